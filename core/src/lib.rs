//! Minesweeper game-state engine: grid model, safe-start bomb placement,
//! flood fill and chord reveal, and the win/lose state machine.
//!
//! Presentation layers drive a [`Session`] through [`Session::open`] and
//! [`Session::toggle_mark`] and draw from the read-only [`Session::snapshot`].

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod reveal;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub bombs: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, bombs: CellCount) -> Self {
        Self { size, bombs }
    }

    pub fn new(size: Coord2, bombs: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, bombs);
        config.validate()?;
        Ok(config)
    }

    /// Requires a non-empty grid and `0 < bombs < width * height`.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }
        if self.bombs == 0 {
            return Err(ConfigError::NoBombs.into());
        }
        let total = self.total_cells();
        if self.bombs >= total {
            return Err(ConfigError::TooManyBombs {
                requested: self.bombs,
                capacity: total - 1,
            }
            .into());
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bombs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_regular_game() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        assert_eq!(config.total_cells(), 81);
        assert_eq!(config.safe_cells(), 71);
    }

    #[test]
    fn config_rejects_empty_grid() {
        assert_eq!(
            GameConfig::new((0, 9), 10),
            Err(GameError::Configuration(ConfigError::EmptyGrid))
        );
    }

    #[test]
    fn config_rejects_zero_bombs() {
        assert_eq!(
            GameConfig::new((9, 9), 0),
            Err(GameError::Configuration(ConfigError::NoBombs))
        );
    }

    #[test]
    fn config_rejects_full_grid() {
        assert_eq!(
            GameConfig::new((2, 2), 4),
            Err(GameError::Configuration(ConfigError::TooManyBombs {
                requested: 4,
                capacity: 3,
            }))
        );
        assert!(GameConfig::new((2, 2), 3).is_ok());
    }
}
