/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells in a `width x height` rectangle.
pub const fn area(size: Coord2) -> CellCount {
    (size.0 as CellCount).saturating_mul(size.1 as CellCount)
}

/// Moore neighborhood of a cell, clipped at the grid edges.
///
/// Walks the 3x3 window around the center row by row, left to right, and
/// skips the center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_x: Coord,
    last_x: Coord,
    last_y: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, (width, height): Coord2) -> Self {
        let (x, y) = center;
        let first_x = x.saturating_sub(1);
        let first_y = y.saturating_sub(1);
        let last_x = x.saturating_add(1).min(width.saturating_sub(1));
        let last_y = y.saturating_add(1).min(height.saturating_sub(1));

        let in_bounds = width > 0 && height > 0 && first_x <= last_x && first_y <= last_y;
        Self {
            center,
            first_x,
            last_x,
            last_y,
            cursor: in_bounds.then_some((first_x, first_y)),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = self.cursor?;
            self.cursor = if x < self.last_x {
                Some((x + 1, y))
            } else if y < self.last_y {
                Some((self.first_x, y + 1))
            } else {
                None
            };

            if (x, y) != self.center {
                return Some((x, y));
            }
        }
    }
}
