//! Persistent roster of levels and player progress.
//!
//! The catalog is a plain text file with one record per line:
//!
//! ```text
//! smile - complete - 01:42
//! heart - incomplete - --:--
//! spiral - incomplete
//! ```
//!
//! Record order is significant: a level's id is its line position. The whole
//! file is rewritten, atomically, on every save.
//!
//! The crate also reads the optional message asset (help text and the
//! "all levels complete" prompt), see [`Messages`].

pub use self::{
    catalog::{CatalogError, LevelCatalog},
    messages::{Messages, MessagesError},
    record::{ElapsedTime, LevelRecord, LevelStatus, ParseRecordError, UNRECORDED_TIME},
};

mod catalog;
mod messages;
mod record;
