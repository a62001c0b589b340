//! Row and column addressing.

use std::{
    fmt::{self, Display},
    iter::{Copied, FusedIterator, StepBy},
    slice,
};

use crate::{BoolGrid, Position};

/// A single row or column of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its index from the top.
    Row {
        /// Row index.
        row: usize,
    },
    /// A column identified by its index from the left.
    Column {
        /// Column index.
        col: usize,
    },
}

impl Line {
    /// Returns every row line of a grid with `height` rows, top to bottom.
    pub fn all_rows(height: usize) -> impl Iterator<Item = Self> {
        (0..height).map(|row| Self::Row { row })
    }

    /// Returns every column line of a grid with `width` columns, left to right.
    pub fn all_columns(width: usize) -> impl Iterator<Item = Self> {
        (0..width).map(|col| Self::Column { col })
    }

    /// Returns the number of cells this line has in `grid`.
    #[must_use]
    pub fn len(self, grid: &BoolGrid) -> usize {
        match self {
            Self::Row { .. } => grid.width(),
            Self::Column { .. } => grid.height(),
        }
    }

    /// Converts the `i`-th cell of this line into an absolute [`Position`].
    #[must_use]
    pub fn position(self, i: usize) -> Position {
        match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
        }
    }

    /// Returns the cells of this line in `grid`, in reading order.
    ///
    /// # Panics
    ///
    /// Panics if the line lies outside `grid`.
    #[must_use]
    pub fn cells(self, grid: &BoolGrid) -> LineCells<'_> {
        match self {
            Self::Row { row } => LineCells::Row(grid.row(row)),
            Self::Column { col } => LineCells::Column(grid.column(col)),
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {row}"),
            Self::Column { col } => write!(f, "column {col}"),
        }
    }
}

/// Iterator over the cells of a [`Line`].
#[derive(Debug, Clone)]
pub enum LineCells<'a> {
    /// Cells of a row.
    Row(Copied<slice::Iter<'a, bool>>),
    /// Cells of a column.
    Column(Copied<StepBy<slice::Iter<'a, bool>>>),
}

impl Iterator for LineCells<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        match self {
            Self::Row(it) => it.next(),
            Self::Column(it) => it.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Row(it) => it.size_hint(),
            Self::Column(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for LineCells<'_> {}
impl FusedIterator for LineCells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_line_direction() {
        let grid: BoolGrid = "##.\n..#\n".parse().unwrap();

        let row: Vec<_> = Line::Row { row: 0 }.cells(&grid).collect();
        assert_eq!(row, [true, true, false]);

        let col: Vec<_> = Line::Column { col: 2 }.cells(&grid).collect();
        assert_eq!(col, [false, true]);

        assert_eq!(Line::Row { row: 1 }.len(&grid), 3);
        assert_eq!(Line::Column { col: 1 }.len(&grid), 2);
        assert_eq!(Line::Column { col: 1 }.cells(&grid).len(), 2);
    }

    #[test]
    fn test_position_mapping() {
        assert_eq!(Line::Row { row: 2 }.position(4), Position::new(2, 4));
        assert_eq!(Line::Column { col: 2 }.position(4), Position::new(4, 2));
    }

    #[test]
    fn test_enumerations() {
        let rows: Vec<_> = Line::all_rows(2).collect();
        assert_eq!(rows, [Line::Row { row: 0 }, Line::Row { row: 1 }]);
        assert_eq!(Line::all_columns(5).count(), 5);
        assert_eq!(Line::Column { col: 3 }.to_string(), "column 3");
    }
}
