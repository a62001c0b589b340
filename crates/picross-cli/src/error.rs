use std::{io, path::PathBuf};

use picross_catalog::{CatalogError, MessagesError};
use picross_core::ParseGridError;
use picross_game::SessionError;
use picross_level::LevelError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("level catalog unusable")]
    Catalog(#[error(source)] #[from] CatalogError),
    #[display("level unavailable")]
    Level(#[error(source)] #[from] LevelError),
    #[display("game session failed")]
    Session(#[error(source)] #[from] SessionError),
    #[display("message file unusable")]
    Messages(#[error(source)] #[from] MessagesError),
    #[display("grid file {} is malformed", path.display())]
    Grid {
        path: PathBuf,
        source: ParseGridError,
    },
    #[display("cannot read {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("cannot write output")]
    Output(#[error(source)] #[from] io::Error),
    #[display("level {name:?} is not in the catalog")]
    UnknownLevel { name: String },
    #[display(
        "grid is {found_width}x{found_height}, level {name:?} is {width}x{height}"
    )]
    SizeMismatch {
        name: String,
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}
