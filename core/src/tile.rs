use serde::{Deserialize, Serialize};

use crate::*;

/// What a presentation layer should draw for a cell.
///
/// Bombs under closed cells are only exposed when asked for, so a front end
/// never leaks the layout while the game is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Closed,
    Marked,
    Bomb,
    Empty,
    Number(u8),
}

impl Tile {
    pub const fn from_cell(cell: &Cell, show_bombs: bool) -> Self {
        if cell.is_opened() {
            match cell.bombs_around() {
                0 if cell.has_bomb() => Self::Bomb,
                0 => Self::Empty,
                count => Self::Number(count),
            }
        } else if show_bombs && cell.has_bomb() {
            Self::Bomb
        } else if cell.is_marked() {
            Self::Marked
        } else {
            Self::Closed
        }
    }

    // whether the tile is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed | Self::Marked)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Closed
    }
}

/// Characters used by [`Symbols::render`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub closed: char,
    pub bomb: char,
    pub marked: char,
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            closed: '#',
            bomb: '*',
            marked: '!',
            empty: ' ',
        }
    }
}

impl Symbols {
    pub fn symbol(&self, tile: Tile) -> char {
        match tile {
            Tile::Closed => self.closed,
            Tile::Marked => self.marked,
            Tile::Bomb => self.bomb,
            Tile::Empty => self.empty,
            Tile::Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }

    /// Text board with column numbers on top and row numbers on the left.
    pub fn render(&self, grid: &Grid, show_bombs: bool) -> String {
        let width = usize::from(grid.width());
        let mut out = String::from("  |");
        for x in 0..width {
            out.push_str(&format!(" {x} |"));
        }
        out.push('\n');
        out.push_str(&"-".repeat(3 + 4 * width));
        out.push('\n');

        for cell in grid.iter() {
            if cell.x() == 0 {
                out.push_str(&format!("{} |", cell.y()));
            }
            let symbol = self.symbol(Tile::from_cell(cell, show_bombs));
            out.push_str(&format!(" {symbol} |"));
            if usize::from(cell.x()) + 1 == width {
                out.push('\n');
            }
        }
        out
    }
}
