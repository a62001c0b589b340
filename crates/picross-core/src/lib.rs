//! Core data structures for nonogram puzzles.
//!
//! This crate provides the pieces every other part of the engine is built from:
//!
//! 1. **Grids** - [`BoolGrid`], a fixed-size rectangle of filled/empty cells
//!    addressed by [`Position`].
//! 2. **Lines** - [`Line`] names one row or one column of a grid and iterates
//!    over its cells.
//! 3. **Clues** - [`Clue`] is the run-length description of a line, computed by
//!    [`compute_clue`].
//!
//! # Examples
//!
//! ```
//! use picross_core::{BoolGrid, Line, compute_clue};
//!
//! let grid: BoolGrid = "\
//! #.#
//! .#.
//! #.#
//! "
//! .parse()
//! .unwrap();
//!
//! let clue = compute_clue(Line::Row { row: 0 }.cells(&grid));
//! assert_eq!(clue.to_string(), "1 1");
//! ```

pub mod clue;
pub mod grid;
pub mod line;
pub mod position;

pub use self::{
    clue::{Clue, compute_clue},
    grid::{BoolGrid, GridError, ParseGridError},
    line::{Line, LineCells},
    position::Position,
};
