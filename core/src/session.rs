use chrono::prelude::*;
use chrono::TimeDelta;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

use crate::*;

/// Valid transitions:
/// - New -> Started
/// - New -> Error
/// - Started -> Win
/// - Started -> Lose
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No cell opened yet, bombs not placed
    New,
    /// Bomb placement failed, the session is unusable
    Error,
    /// Bombs placed, game in progress
    Started,
    /// Every safe cell is open
    Win,
    /// A bomb was opened or a chord hit a wrong mark
    Lose,
}

impl Status {
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    /// No more moves are accepted
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Error | Self::Win | Self::Lose)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::New
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Opened,
    Won,
    Lost,
    /// Bomb placement failed on the first open
    Failed,
}

impl OpenOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game from first click to win or loss.
///
/// The session owns the live grid. Consumers only ever see
/// [`snapshot`](Self::snapshot), an independent copy that is rebuilt lazily
/// after a move changed the grid. Sessions are never reset, start a new one
/// to play again.
#[derive(Debug)]
pub struct Session<S = RngSource<ThreadRng>> {
    config: GameConfig,
    grid: Grid,
    snapshot: OnceCell<Grid>,
    bombs_marked: CellCount,
    status: Status,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    error: Option<GameError>,
    source: S,
}

impl Session {
    /// Session drawing bomb positions from the thread-local generator.
    pub fn with_thread_rng(config: GameConfig) -> Result<Self> {
        Self::new(config, RngSource::thread_local())
    }
}

impl<S: RandomSource> Session<S> {
    pub fn new(config: GameConfig, source: S) -> Result<Self> {
        config.validate().inspect_err(|err| {
            log::warn!("Rejected game configuration {:?}: {}", config, err);
        })?;

        Ok(Self {
            config,
            grid: Grid::new(config.size)?,
            snapshot: OnceCell::new(),
            bombs_marked: 0,
            status: Default::default(),
            started_at: None,
            finished_at: None,
            error: None,
            source,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn bombs(&self) -> CellCount {
        self.config.bombs
    }

    /// How many cells are currently marked, not checked against [`bombs`](Self::bombs).
    pub fn bombs_marked(&self) -> CellCount {
        self.bombs_marked
    }

    /// How many bombs have not been marked yet, negative when over-marked
    pub fn bombs_left(&self) -> isize {
        (self.config.bombs as isize) - (self.bombs_marked as isize)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Time since the first open, frozen once the game is won
    pub fn elapsed(&self) -> Option<TimeDelta> {
        let started_at = self.started_at?;
        Some(self.finished_at.unwrap_or_else(Utc::now) - started_at)
    }

    /// The error that moved the session to [`Status::Error`].
    pub fn error(&self) -> Option<&GameError> {
        self.error.as_ref()
    }

    /// Read-only copy of the grid, shared until the next move.
    pub fn snapshot(&self) -> &Grid {
        self.snapshot.get_or_init(|| self.grid.clone())
    }

    /// Text board of the snapshot, bombs are always shown once the game is over.
    pub fn render(&self, show_bombs: bool) -> String {
        Symbols::default().render(self.snapshot(), show_bombs || self.is_finished())
    }

    /// Opens the cell at `coords`, placing the bombs first if this is the
    /// first open of the session.
    ///
    /// Out of range coordinates, marked cells and finished sessions are
    /// ignored.
    pub fn open(&mut self, coords: Coord2) -> OpenOutcome {
        if self.status.is_finished() {
            return OpenOutcome::NoChange;
        }
        match self.grid.cell(coords) {
            Some(cell) if !cell.is_marked() => {}
            _ => return OpenOutcome::NoChange,
        }

        self.invalidate_snapshot();

        if self.status.is_new() {
            if let Err(err) =
                place_bombs(&mut self.grid, self.config.bombs, coords, &mut self.source)
            {
                log::warn!("Could not start game: {}", err);
                self.status = Status::Error;
                self.error = Some(err);
                return OpenOutcome::Failed;
            }
            self.mark_started();
        }

        let outcome = reveal(&mut self.grid, coords);
        if outcome.is_loss() {
            self.mark_lost();
            return OpenOutcome::Lost;
        }

        self.update_status()
    }

    /// Flips the bomb mark on the cell at `coords`.
    pub fn toggle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        if self.status.is_finished() {
            return MarkOutcome::NoChange;
        }
        let Some(cell) = self.grid.cell_mut(coords) else {
            return MarkOutcome::NoChange;
        };

        cell.marked_as_bomb = !cell.marked_as_bomb;
        let outcome = if cell.marked_as_bomb {
            self.bombs_marked += 1;
            MarkOutcome::Marked
        } else {
            self.bombs_marked -= 1;
            MarkOutcome::Unmarked
        };
        self.invalidate_snapshot();
        outcome
    }

    fn invalidate_snapshot(&mut self) {
        self.snapshot.take();
    }

    /// Full pass over the grid: an open bomb loses, all safe cells open wins.
    fn update_status(&mut self) -> OpenOutcome {
        let mut opened_safe: CellCount = 0;
        let mut bomb_opened = false;
        for cell in self.grid.iter().filter(|cell| cell.is_opened()) {
            if cell.has_bomb() {
                bomb_opened = true;
                break;
            }
            opened_safe += 1;
        }

        if bomb_opened {
            self.mark_lost();
            OpenOutcome::Lost
        } else if opened_safe == self.config.safe_cells() {
            self.mark_won();
            OpenOutcome::Won
        } else {
            OpenOutcome::Opened
        }
    }

    fn mark_started(&mut self) {
        let now = Utc::now();
        log::debug!("started at {}", now);
        self.started_at = Some(now);
        self.status = Status::Started;
    }

    fn mark_won(&mut self) {
        let now = Utc::now();
        log::debug!("won at {}", now);
        self.finished_at = Some(now);
        self.status = Status::Win;
    }

    fn mark_lost(&mut self) {
        log::debug!("lost after {:?}", self.elapsed());
        self.status = Status::Lose;
    }
}
