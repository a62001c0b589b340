//! Run-length clues for rows and columns.

use std::fmt::{self, Display};

/// The clue of a single row or column.
///
/// Each entry is the length of one maximal run of filled cells, in reading
/// order. A line with no filled cells has an empty clue, which displays as an
/// empty string rather than `0`.
///
/// # Examples
///
/// ```
/// use picross_core::compute_clue;
///
/// let clue = compute_clue([true, true, false, true, false, false, true]);
/// assert_eq!(clue.runs(), [2, 1, 1]);
/// assert_eq!(clue.to_string(), "2 1 1");
///
/// assert!(compute_clue([false, false]).is_empty());
/// assert_eq!(compute_clue([false, false]).to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Clue {
    runs: Vec<usize>,
}

impl Clue {
    /// Returns the run lengths.
    #[must_use]
    #[inline]
    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// Returns `true` if the line has no filled cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the number of filled cells the clue describes.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.runs.iter().sum()
    }

    /// Returns the space-separated form used for display and comparison.
    #[must_use]
    pub fn display_key(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if both clues have the same display key.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.display_key() == other.display_key()
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut runs = self.runs.iter();
        if let Some(first) = runs.next() {
            write!(f, "{first}")?;
            for run in runs {
                write!(f, " {run}")?;
            }
        }
        Ok(())
    }
}

/// Computes the clue of a line of cells.
///
/// Runs are flushed when an empty cell ends them, and once more after the
/// scan if the line ends on a filled run.
pub fn compute_clue<I>(line: I) -> Clue
where
    I: IntoIterator<Item = bool>,
{
    let mut runs = Vec::new();
    let mut count = 0;
    for filled in line {
        if filled {
            count += 1;
        } else if count > 0 {
            runs.push(count);
            count = 0;
        }
    }
    if count > 0 {
        runs.push(count);
    }
    Clue { runs }
}
