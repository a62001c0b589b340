use picross_catalog::CatalogError;
use picross_core::GridError;
use picross_level::LevelError;

/// Errors returned by [`GameSession`](crate::GameSession) operations.
///
/// Whenever one of these is returned, the session (and any catalog passed in)
/// is left as it was before the call.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// A move addressed a cell outside the level.
    #[display("invalid move: {_0}")]
    Grid(#[from] GridError),
    /// The level could not be loaded.
    #[display("cannot load level: {_0}")]
    Level(#[from] LevelError),
    /// The catalog could not be updated or saved.
    #[display("cannot record progress: {_0}")]
    Catalog(#[from] CatalogError),
    /// Completion was requested before the grid matches the solution.
    #[display("puzzle is not solved yet")]
    NotSolved,
    /// The session has already been completed.
    #[display("session is already completed")]
    AlreadyCompleted,
    /// The catalog record at the level's id names a different level.
    #[display("catalog id {id} is {found:?}, not {expected:?}")]
    CatalogMismatch {
        /// The level's id.
        id: usize,
        /// The level's name.
        expected: String,
        /// The name stored in the catalog at that id.
        found: String,
    },
}
