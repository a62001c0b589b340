use std::path::Path;

use picross_catalog::{CatalogError, ElapsedTime, LevelCatalog};
use picross_core::{Line, Position};
use picross_level::{AssetLayout, Level};

use crate::{PuzzleGrid, SessionError};

/// Lifecycle of a [`GameSession`].
///
/// ```text
/// NotStarted --first move--> Running <--moves--> Solved --complete()--> Completed
/// ```
///
/// A solved grid can be unsolved again by a later move; only
/// [`GameSession::complete`] latches the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// No move has been made; the clock has not started.
    #[default]
    NotStarted,
    /// At least one move has been made and the grid differs from the solution.
    Running,
    /// The grid matches the solution, but completion has not been recorded.
    Solved,
    /// Completion has been recorded in the catalog.
    Completed,
}

/// One play-through of one level.
///
/// The session owns the level and a fresh all-empty [`PuzzleGrid`] of the
/// same size. Time is driven by the host calling [`tick`](Self::tick) once per
/// second; the clock starts with the first move and only advances while the
/// session is [`Running`](SessionState::Running).
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    grid: PuzzleGrid,
    state: SessionState,
    elapsed_secs: u64,
    clock_stopped: bool,
}

impl GameSession {
    /// Starts a session on `level` with an empty grid.
    #[must_use]
    pub fn new(level: Level) -> Self {
        let grid = PuzzleGrid::sized_like(level.solution());
        Self {
            level,
            grid,
            state: SessionState::NotStarted,
            elapsed_secs: 0,
            clock_stopped: false,
        }
    }

    /// Loads the catalog level at `id` from `layout` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if `id` is not in the catalog and
    /// [`SessionError::Level`] if the level image cannot be loaded.
    pub fn for_catalog_level(
        layout: &AssetLayout,
        catalog: &LevelCatalog,
        id: usize,
    ) -> Result<Self, SessionError> {
        let record = catalog.get(id).ok_or(CatalogError::UnknownLevel {
            id,
            len: catalog.len(),
        })?;
        let level = Level::load(layout, &record.name, id)?;
        Ok(Self::new(level))
    }

    /// Returns the level being played.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Returns the player's grid.
    #[must_use]
    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Fills or empties one cell.
    ///
    /// The first successful move starts the clock. Afterwards the state
    /// follows the grid between `Running` and `Solved`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyCompleted`] once the session is
    /// completed and [`SessionError::Grid`] for a position outside the level.
    /// The session is unchanged in both cases.
    pub fn apply_move(&mut self, pos: Position, filled: bool) -> Result<(), SessionError> {
        if self.state.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        self.grid.set(pos, filled)?;
        self.after_move();
        Ok(())
    }

    /// Flips one cell and returns its new value.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move).
    pub fn toggle(&mut self, pos: Position) -> Result<bool, SessionError> {
        if self.state.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        let filled = self.grid.toggle(pos)?;
        self.after_move();
        Ok(filled)
    }

    fn after_move(&mut self) {
        if self.state.is_not_started() {
            log::debug!("clock started on level {:?}", self.level.name());
        }
        let solved = self.is_solved();
        self.state = if solved {
            SessionState::Solved
        } else {
            SessionState::Running
        };
        if solved {
            log::debug!(
                "level {:?} solved at {}",
                self.level.name(),
                self.elapsed()
            );
        }
    }

    /// Returns the share of cells matching the solution, 0 to 100.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.grid.progress_percent(self.level.solution())
    }

    /// Returns `true` if the grid matches the solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.progress() == 100
    }

    /// Returns the clue-match state of every row, top to bottom.
    #[must_use]
    pub fn solved_rows(&self) -> Vec<bool> {
        self.solved_lines(Line::all_rows(self.level.height()))
    }

    /// Returns the clue-match state of every column, left to right.
    #[must_use]
    pub fn solved_columns(&self) -> Vec<bool> {
        self.solved_lines(Line::all_columns(self.level.width()))
    }

    fn solved_lines(&self, lines: impl Iterator<Item = Line>) -> Vec<bool> {
        lines
            .map(|line| self.grid.line_matches_clue(line, self.level.clue(line)))
            .collect()
    }

    /// Advances the clock by one second if it is running.
    ///
    /// Meant to be called by the host once per second.
    pub fn tick(&mut self) {
        if self.is_clock_running() {
            self.elapsed_secs += 1;
        }
    }

    /// Returns `true` if [`tick`](Self::tick) currently advances the clock.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.state.is_running() && !self.clock_stopped
    }

    /// Stops the clock for the rest of the session.
    pub fn stop(&mut self) {
        self.clock_stopped = true;
    }

    /// Returns the whole seconds counted so far.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Returns the elapsed time in catalog form.
    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime::from_secs(self.elapsed_secs)
    }

    /// Records the solve in `catalog` and saves it to `destination`.
    ///
    /// Stops the clock, marks the level's record complete with the elapsed
    /// time, writes the catalog and moves to
    /// [`Completed`](SessionState::Completed). Returns the recorded time.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyCompleted`] if called twice.
    /// - [`SessionError::NotSolved`] unless the session is
    ///   [`Solved`](SessionState::Solved). A grid that matches before any move
    ///   has been made does not count.
    /// - [`SessionError::CatalogMismatch`] if the catalog entry at the level's
    ///   id names another level.
    /// - [`SessionError::Catalog`] if the id is unknown or the save fails.
    ///
    /// On error neither the session nor `catalog` is modified.
    pub fn complete(
        &mut self,
        catalog: &mut LevelCatalog,
        destination: impl AsRef<Path>,
    ) -> Result<ElapsedTime, SessionError> {
        if self.state.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        if !self.state.is_solved() {
            return Err(SessionError::NotSolved);
        }

        let id = self.level.id();
        let previous = catalog
            .get(id)
            .ok_or(CatalogError::UnknownLevel {
                id,
                len: catalog.len(),
            })?
            .clone();
        if previous.name != self.level.name() {
            return Err(SessionError::CatalogMismatch {
                id,
                expected: self.level.name().to_owned(),
                found: previous.name,
            });
        }

        let elapsed = self.elapsed();
        catalog.mark_complete(id, elapsed)?;
        if let Err(e) = catalog.save(destination) {
            if let Err(restore) = catalog.replace(id, previous) {
                log::warn!("failed to restore catalog record {id}: {restore}");
            }
            return Err(e.into());
        }

        self.stop();
        self.state = SessionState::Completed;
        log::info!(
            "level {:?} (id {id}) completed in {elapsed}",
            self.level.name()
        );
        Ok(elapsed)
    }

    /// Throws away the current grid and time and starts over on the same level.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.state = SessionState::NotStarted;
        self.elapsed_secs = 0;
        self.clock_stopped = false;
    }
}
