use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size rectangular collection of [`Cell`]s.
///
/// Cells are laid out row-major, which makes the linear position of `(x, y)`
/// equal to `y * width + x` and makes [`Grid::iter`] walk rows top to bottom.
/// Cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
}

/// Unchecked wire form of [`Grid`], validated before use.
#[derive(Deserialize)]
struct RawGrid {
    cells: Array2<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let (rows, cols) = raw.cells.dim();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }
        if rows > usize::from(Coord::MAX) || cols > usize::from(Coord::MAX) {
            return Err(ConfigError::OutsideGrid.into());
        }

        let misplaced = raw
            .cells
            .indexed_iter()
            .any(|((y, x), cell)| (usize::from(cell.x()), usize::from(cell.y())) != (x, y));
        if misplaced {
            return Err(ConfigError::OutsideGrid.into());
        }

        Ok(Self { cells: raw.cells })
    }
}

impl Grid {
    pub fn new((width, height): Coord2) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }

        let cells = Array2::from_shape_fn([usize::from(height), usize::from(width)], |(y, x)| {
            // both fit in Coord by construction of the shape
            Cell::new((x as Coord, y as Coord))
        });
        Ok(Self { cells })
    }

    /// Builds a grid with bombs at `bomb_coords` and neighbor counts filled in.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for &coords in bomb_coords {
            let cell = grid.cell_mut(coords).ok_or(ConfigError::OutsideGrid)?;
            cell.has_bomb = true;
        }
        grid.update_bomb_counts();
        Ok(grid)
    }

    pub fn width(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(nd_index(coords))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(nd_index(coords))
    }

    /// Every cell in row-major order: `y` ascending outside, `x` ascending inside.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates of the Moore neighborhood of `coords`, clipped at the edges.
    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn iter_neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.iter_neighbors(coords).map(|pos| &self[pos])
    }

    pub fn linear_from_coords(&self, (x, y): Coord2) -> usize {
        usize::from(y) * usize::from(self.width()) + usize::from(x)
    }

    pub fn coords_from_linear(&self, pos: usize) -> Option<Coord2> {
        if pos >= self.cells.len() {
            return None;
        }
        let width = usize::from(self.width());
        Some(((pos % width) as Coord, (pos / width) as Coord))
    }

    pub(crate) fn count_bombs_around(&self, coords: Coord2) -> u8 {
        self.iter_neighbor_cells(coords)
            .filter(|cell| cell.has_bomb)
            .count() as u8
    }

    /// Recomputes `bombs_around` of every safe cell, bomb cells keep 0.
    pub(crate) fn update_bomb_counts(&mut self) {
        let counts: Vec<u8> = self
            .iter()
            .map(|cell| {
                if cell.has_bomb {
                    0
                } else {
                    self.count_bombs_around(cell.coords())
                }
            })
            .collect();
        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.bombs_around = count;
        }
    }
}

/// Grids are stored row-major, so the ndarray index is `[y, x]`.
fn nd_index((x, y): Coord2) -> [usize; 2] {
    [usize::from(y), usize::from(x)]
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}
