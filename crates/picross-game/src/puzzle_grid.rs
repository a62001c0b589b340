use picross_core::{BoolGrid, Clue, GridError, Line, Position, compute_clue};

/// The player's working grid.
///
/// Starts all empty and is changed one cell at a time. The grid only knows
/// filled and empty; a "crossed out" mark is a presentation detail of an
/// empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: BoolGrid,
}

impl PuzzleGrid {
    /// Creates an all-empty grid with `width` columns and `height` rows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: BoolGrid::new(width, height),
        }
    }

    /// Creates an all-empty grid with the same dimensions as `solution`.
    #[must_use]
    pub fn sized_like(solution: &BoolGrid) -> Self {
        Self::new(solution.width(), solution.height())
    }

    /// Returns the underlying cells.
    #[must_use]
    pub fn cells(&self) -> &BoolGrid {
        &self.cells
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Returns whether the cell at `pos` is filled.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Result<bool, GridError> {
        self.cells.get(pos)
    }

    /// Fills or empties the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, filled: bool) -> Result<(), GridError> {
        self.cells.set(pos, filled)
    }

    /// Flips the cell at `pos` and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn toggle(&mut self, pos: Position) -> Result<bool, GridError> {
        let filled = !self.cells.get(pos)?;
        self.cells.set(pos, filled)?;
        Ok(filled)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns `true` if every cell equals the corresponding solution cell.
    ///
    /// Grids of different dimensions never match.
    #[must_use]
    pub fn matches_solution(&self, solution: &BoolGrid) -> bool {
        self.cells == *solution
    }

    /// Returns the share of cells that agree with `solution`, as a whole
    /// percentage rounded down.
    ///
    /// Correctly empty cells count as agreeing, so an untouched grid already
    /// scores above zero against any solution that is not completely filled.
    /// A grid with no cells scores 100; grids of different dimensions score 0.
    #[must_use]
    pub fn progress_percent(&self, solution: &BoolGrid) -> u8 {
        if !self.cells.same_dimensions(solution) {
            return 0;
        }
        let total = self.cells.len();
        if total == 0 {
            return 100;
        }
        let matching = self
            .cells
            .cells()
            .zip(solution.cells())
            .filter(|(cell, expected)| cell == expected)
            .count();
        u8::try_from(matching * 100 / total).unwrap_or(100)
    }

    /// Returns `true` if the current cells of `line` produce `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `line` lies outside the grid.
    #[must_use]
    pub fn line_matches_clue(&self, line: Line, expected: &Clue) -> bool {
        compute_clue(line.cells(&self.cells)).matches(expected)
    }

    /// Returns `true` if row `row` currently produces `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than the grid height.
    #[must_use]
    pub fn row_matches_clue(&self, row: usize, expected: &Clue) -> bool {
        self.line_matches_clue(Line::Row { row }, expected)
    }

    /// Returns `true` if column `col` currently produces `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than the grid width.
    #[must_use]
    pub fn column_matches_clue(&self, col: usize, expected: &Clue) -> bool {
        self.line_matches_clue(Line::Column { col }, expected)
    }
}
