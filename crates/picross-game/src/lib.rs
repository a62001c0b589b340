//! Nonogram game sessions.
//!
//! This crate ties a [`Level`](picross_level::Level) to the player's working
//! grid and tracks progress, elapsed time and completion:
//!
//! - [`PuzzleGrid`] - the player's cells plus comparisons against a solution.
//! - [`GameSession`] - one play-through of one level, with a one-second tick
//!   clock and the completion transition that updates the level catalog.
//!
//! # Examples
//!
//! ```
//! use picross_core::{BoolGrid, Position};
//! use picross_game::GameSession;
//! use picross_level::Level;
//!
//! let solution: BoolGrid = "#.\n.#\n".parse().unwrap();
//! let level = Level::from_solution("diagonal", 0, solution).unwrap();
//! let mut session = GameSession::new(level);
//!
//! session.apply_move(Position::new(0, 0), true).unwrap();
//! assert_eq!(session.progress(), 75);
//! session.apply_move(Position::new(1, 1), true).unwrap();
//! assert!(session.is_solved());
//! ```

pub use self::{
    error::SessionError,
    puzzle_grid::PuzzleGrid,
    session::{GameSession, SessionState},
};

mod error;
mod puzzle_grid;
mod session;
