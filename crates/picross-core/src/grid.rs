//! Fixed-size boolean grids.

use std::{
    fmt::{self, Display},
    iter::{Copied, StepBy},
    ops::Index,
    slice,
    str::FromStr,
};

use crate::Position;

/// Error returned when a grid is addressed outside its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The position does not lie inside the grid.
    #[display("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
        /// Grid width (number of columns).
        width: usize,
        /// Grid height (number of rows).
        height: usize,
    },
}

/// Error returned when parsing a [`BoolGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contained no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row has a different length from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    #[display("invalid cell character {ch:?} at {pos}")]
    InvalidChar {
        /// Where the character was found.
        pos: Position,
        /// The character itself.
        ch: char,
    },
}

/// A rectangular grid of filled (`true`) and empty (`false`) cells.
///
/// The grid has `height` rows and `width` columns and is stored row-major.
/// Its dimensions are fixed at construction.
///
/// # Text format
///
/// Grids parse from and print as one line per row, `#` for a filled cell and
/// `.` for an empty one. Surrounding whitespace and blank lines are ignored
/// when parsing.
///
/// ```
/// use picross_core::{BoolGrid, Position};
///
/// let grid: BoolGrid = "##.\n..#\n".parse().unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert!(grid[Position::new(1, 2)]);
/// assert_eq!(grid.to_string(), "##.\n..#\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BoolGrid {
    /// Creates an all-empty grid with `width` columns and `height` rows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Creates a grid whose cells are produced by `f`, visited in row-major order.
    #[must_use]
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(Position::new(row, col)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if both grids have the same width and height.
    #[must_use]
    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn offset(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.width + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Result<bool, GridError> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Sets the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid. The grid
    /// is left untouched in that case.
    pub fn set(&mut self, pos: Position, filled: bool) -> Result<(), GridError> {
        let i = self.offset(pos)?;
        self.cells[i] = filled;
        Ok(())
    }

    /// Sets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Returns an iterator over the cells of row `row`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than the grid height.
    #[must_use]
    pub fn row(&self, row: usize) -> Copied<slice::Iter<'_, bool>> {
        assert!(row < self.height, "row {row} out of range");
        let start = row * self.width;
        self.cells[start..start + self.width].iter().copied()
    }

    /// Returns an iterator over the cells of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than the grid width.
    #[must_use]
    pub fn column(&self, col: usize) -> Copied<StepBy<slice::Iter<'_, bool>>> {
        assert!(col < self.width, "column {col} out of range");
        self.cells[col..].iter().step_by(self.width).copied()
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }
}

impl Index<Position> for BoolGrid {
    type Output = bool;

    fn index(&self, pos: Position) -> &bool {
        match self.offset(pos) {
            Ok(i) => &self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl Display for BoolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for filled in self.row(row) {
                f.write_str(if filled { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for BoolGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let start = cells.len();
            for (col, ch) in line.chars().enumerate() {
                let filled = match ch {
                    '#' => true,
                    '.' => false,
                    _ => {
                        return Err(ParseGridError::InvalidChar {
                            pos: Position::new(height, col),
                            ch,
                        });
                    }
                };
                cells.push(filled);
            }
            let found = cells.len() - start;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(ParseGridError::RaggedRow {
                    row: height,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.ok_or(ParseGridError::Empty)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}
