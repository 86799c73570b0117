use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Bomb generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl GameError {
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid width and height must be positive")]
    EmptyGrid,
    #[error("at least one bomb is required")]
    NoBombs,
    #[error("coordinates are outside the grid")]
    OutsideGrid,
    #[error("too many bombs, requested {requested} but only {capacity} cells are available")]
    TooManyBombs {
        requested: CellCount,
        capacity: CellCount,
    },
}

/// Failure reported by a [`RandomSource`](crate::RandomSource).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct GenerationError {
    reason: String,
}

impl GenerationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
