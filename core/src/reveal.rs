use hashbrown::HashSet;
use std::collections::VecDeque;

use crate::*;

/// Result of a single reveal on the live grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Coordinates were outside the grid.
    NoChange,
    /// Cells were opened and nothing went wrong.
    Opened,
    /// The target cell held a bomb.
    HitBomb,
    /// A chord was attempted next to a mark that does not cover a bomb.
    IncorrectMark,
}

impl RevealOutcome {
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::HitBomb | Self::IncorrectMark)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ChordCheck {
    /// Marks match the number, every neighbor can be opened.
    Satisfied,
    /// Not enough marks to decide, leave the neighbors alone.
    Unsatisfied,
    /// Some mark sits on a safe cell.
    Inconsistent,
}

/// Opens `start` and expands from it.
///
/// Zero cells flood into their neighbors breadth first. A numbered cell only
/// expands when every bomb around it is marked and no mark around it is wrong;
/// since numbered cells are never queued by the flood, that chord step only
/// ever applies to `start` itself. Bomb cells are never opened by expansion.
pub fn reveal(grid: &mut Grid, start: Coord2) -> RevealOutcome {
    let Some(cell) = grid.cell_mut(start) else {
        return RevealOutcome::NoChange;
    };
    cell.opened = true;
    if cell.has_bomb {
        log::debug!("Opened bomb at {:?}", start);
        return RevealOutcome::HitBomb;
    }

    let mut to_visit = VecDeque::from([start]);
    let mut visited_zeros: HashSet<Coord2> = HashSet::new();

    while let Some(coords) = to_visit.pop_front() {
        if visited_zeros.contains(&coords) {
            continue;
        }

        let bombs_around = grid[coords].bombs_around;
        if bombs_around == 0 {
            visited_zeros.insert(coords);
        } else {
            match check_chord(grid, coords) {
                ChordCheck::Satisfied => {
                    log::trace!("Chord at {:?} with {} marked bombs", coords, bombs_around);
                }
                ChordCheck::Unsatisfied => continue,
                ChordCheck::Inconsistent => {
                    log::debug!("Incorrect mark next to {:?}", coords);
                    return RevealOutcome::IncorrectMark;
                }
            }
        }

        open_neighbors(grid, coords, &mut to_visit);
    }

    RevealOutcome::Opened
}

fn check_chord(grid: &Grid, coords: Coord2) -> ChordCheck {
    let mut marked_bombs = 0;
    for neighbor in grid.iter_neighbor_cells(coords) {
        match (neighbor.marked_as_bomb, neighbor.has_bomb) {
            (true, true) => marked_bombs += 1,
            (true, false) => return ChordCheck::Inconsistent,
            _ => {}
        }
    }

    if marked_bombs == grid[coords].bombs_around {
        ChordCheck::Satisfied
    } else {
        ChordCheck::Unsatisfied
    }
}

/// Opens every safe neighbor, queueing the ones that continue the flood.
fn open_neighbors(grid: &mut Grid, coords: Coord2, to_visit: &mut VecDeque<Coord2>) {
    for pos in grid.iter_neighbors(coords) {
        let Some(neighbor) = grid.cell_mut(pos) else {
            continue;
        };
        if neighbor.is_closed_zero() {
            to_visit.push_back(pos);
        }
        if !neighbor.has_bomb {
            if !neighbor.opened {
                log::trace!("Flood opened cell at {:?}", pos);
            }
            neighbor.opened = true;
        }
    }
}
