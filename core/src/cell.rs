use serde::{Deserialize, Serialize};

use crate::*;

/// Ground-truth state of a single grid position.
///
/// Only the owning [`Grid`] and the engine mutate a cell, consumers only ever
/// see copies through a snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    pub(crate) has_bomb: bool,
    pub(crate) bombs_around: u8,
    pub(crate) opened: bool,
    pub(crate) marked_as_bomb: bool,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            has_bomb: false,
            bombs_around: 0,
            opened: false,
            marked_as_bomb: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn has_bomb(&self) -> bool {
        self.has_bomb
    }

    /// Number of bombs in the Moore neighborhood, always 0 on bomb cells.
    pub const fn bombs_around(&self) -> u8 {
        self.bombs_around
    }

    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    pub const fn is_marked(&self) -> bool {
        self.marked_as_bomb
    }

    /// Unopened safe cell with no bombs around, i.e. a flood fill candidate.
    pub(crate) const fn is_closed_zero(&self) -> bool {
        !self.opened && !self.has_bomb && self.bombs_around == 0
    }
}
