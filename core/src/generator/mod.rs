use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::*;
pub use random::*;

mod random;

/// Source of uniformly distributed indexes used to place bombs.
pub trait RandomSource {
    /// Returns an integer in `[0, max)`, `max` is always positive.
    fn next(&mut self, max: usize) -> core::result::Result<usize, GenerationError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next(&mut self, max: usize) -> core::result::Result<usize, GenerationError> {
        (**self).next(max)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next(&mut self, max: usize) -> core::result::Result<usize, GenerationError> {
        (**self).next(max)
    }
}

/// Linear positions of `start` and its Moore neighbors, `start` first.
pub fn exclusion_zone(grid: &Grid, start: Coord2) -> SmallVec<[usize; 9]> {
    let mut zone = SmallVec::new();
    zone.push(grid.linear_from_coords(start));
    zone.extend(grid.iter_neighbors(start).map(|pos| grid.linear_from_coords(pos)));
    zone
}

/// Draws `bombs` distinct linear positions in `[0, total)` that avoid `excluded`.
///
/// Draws hitting an excluded or already chosen position are discarded. The
/// returned positions are sorted.
pub fn random_bomb_positions(
    total: usize,
    bombs: CellCount,
    excluded: &[usize],
    source: &mut impl RandomSource,
) -> Result<Vec<usize>> {
    let mut taken: HashSet<usize> = excluded.iter().copied().filter(|&p| p < total).collect();
    let capacity = total - taken.len();
    if usize::from(bombs) > capacity {
        log::warn!(
            "Cannot place {} bombs, only {} of {} cells are eligible",
            bombs,
            capacity,
            total
        );
        return Err(ConfigError::TooManyBombs {
            requested: bombs,
            capacity: capacity as CellCount,
        }
        .into());
    }

    let mut placed: CellCount = 0;
    while placed < bombs {
        let pos = source.next(total)?;
        if pos >= total {
            return Err(GenerationError::new(format!(
                "random source returned {pos}, expected a value below {total}"
            ))
            .into());
        }
        if taken.insert(pos) {
            placed += 1;
        }
    }

    for pos in excluded {
        taken.remove(pos);
    }

    let mut positions: Vec<usize> = taken.into_iter().collect();
    positions.sort_unstable();
    Ok(positions)
}

/// Places `bombs` bombs keeping `start` and its neighbors clear, then fills in
/// every safe cell's neighbor bomb count.
///
/// All draws happen before the grid is written, so on error the grid is left
/// untouched.
pub fn place_bombs(
    grid: &mut Grid,
    bombs: CellCount,
    start: Coord2,
    source: &mut impl RandomSource,
) -> Result<()> {
    if !grid.contains(start) {
        return Err(ConfigError::OutsideGrid.into());
    }

    let excluded = exclusion_zone(grid, start);
    let total = usize::from(grid.total_cells());
    let positions = random_bomb_positions(total, bombs, &excluded, source)?;
    log::debug!("Placing {} bombs around safe start {:?}", positions.len(), start);

    for pos in positions {
        if let Some(coords) = grid.coords_from_linear(pos)
            && let Some(cell) = grid.cell_mut(coords)
        {
            cell.has_bomb = true;
        }
    }

    grid.update_bomb_counts();

    Ok(())
}
