use std::{
    collections::HashSet,
    fmt::{self, Display},
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{ElapsedTime, LevelRecord, LevelStatus, ParseRecordError};

/// Errors reported by [`LevelCatalog`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[display("level catalog {} not found", path.display())]
    NotFound {
        /// Path that was tried.
        path: PathBuf,
    },
    /// The catalog file could not be read or written.
    #[display("I/O error on level catalog {}", path.display())]
    Io {
        /// Path of the catalog.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A line of the catalog is malformed.
    #[display("corrupt catalog record on line {line}")]
    CorruptRecord {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        source: ParseRecordError,
    },
    /// Two records share a name.
    #[display("level name {name:?} appears more than once (line {line})")]
    DuplicateName {
        /// One-based line number of the second occurrence.
        line: usize,
        /// The repeated name.
        name: String,
    },
    /// A name cannot be represented in the catalog format.
    #[display("level name {name:?} cannot be stored in the catalog")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// No record exists at the given id.
    #[display("no level with id {id} (catalog has {len} levels)")]
    UnknownLevel {
        /// Requested id.
        id: usize,
        /// Number of records in the catalog.
        len: usize,
    },
}

/// The ordered roster of levels and their completion state.
///
/// A record's id is its index; ids never change once assigned, including
/// across [`reset_all`](Self::reset_all). The catalog is meant to be held as a
/// single owned value and passed to whatever needs to update it.
///
/// # Examples
///
/// ```
/// use picross_catalog::{ElapsedTime, LevelCatalog};
///
/// let mut catalog: LevelCatalog = "\
/// smile - complete - 00:40
/// heart - incomplete - --:--
/// "
/// .parse()
/// .unwrap();
///
/// let (id, next) = catalog.next_incomplete().unwrap();
/// assert_eq!((id, next.name.as_str()), (1, "heart"));
///
/// catalog.mark_complete(id, ElapsedTime::from_secs(75)).unwrap();
/// assert!(catalog.is_all_complete());
/// assert_eq!(catalog.to_string(), "smile - complete - 00:40\nheart - complete - 01:15\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCatalog {
    records: Vec<LevelRecord>,
}

impl LevelCatalog {
    /// Creates a catalog from records in id order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] for a name the line format cannot
    /// hold and [`CatalogError::DuplicateName`] if two records share a name.
    pub fn new(records: Vec<LevelRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (i, record) in records.iter().enumerate() {
            if !LevelRecord::is_valid_name(&record.name) {
                return Err(CatalogError::InvalidName {
                    name: record.name.clone(),
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    line: i + 1,
                    name: record.name.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Creates a catalog of incomplete levels with the given names.
    ///
    /// # Errors
    ///
    /// Same as [`LevelCatalog::new`].
    pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(LevelRecord::new).collect())
    }

    /// Parses the line format. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CorruptRecord`] for a malformed line and
    /// [`CatalogError::DuplicateName`] for a repeated name.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: LevelRecord = line
                .parse()
                .map_err(|source| CatalogError::CorruptRecord { line: i + 1, source })?;
            if !seen.insert(record.name.clone()) {
                return Err(CatalogError::DuplicateName {
                    line: i + 1,
                    name: record.name,
                });
            }
            records.push(record);
        }
        log::debug!("parsed level catalog with {} records", records.len());
        Ok(Self { records })
    }

    /// Reads and parses the catalog file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the file does not exist,
    /// [`CatalogError::Io`] if it cannot be read, and any error of
    /// [`LevelCatalog::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: path.to_owned(),
                }
            } else {
                CatalogError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })?;
        Self::parse(&text)
    }

    /// Writes the whole catalog to `path`, replacing its previous contents.
    ///
    /// The new contents are written to a temporary file in the same directory
    /// and moved over `path`, so a failed save leaves the old file intact.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be written or replaced.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| CatalogError::Io {
            path: path.to_owned(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(self.to_string().as_bytes())
            .map_err(io_error)?;
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(path).map_err(|e| io_error(e.error))?;

        log::info!(
            "saved level catalog ({} records) to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    /// Returns all records in id order.
    #[must_use]
    pub fn records(&self) -> &[LevelRecord] {
        &self.records
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&LevelRecord> {
        self.records.get(id)
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a level up by name, returning its id and record.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(usize, &LevelRecord)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.name == name)
    }

    /// Returns the first incomplete level in catalog order, with its id.
    #[must_use]
    pub fn next_incomplete(&self) -> Option<(usize, &LevelRecord)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.status.is_incomplete())
    }

    /// Returns `true` if every level is complete.
    ///
    /// An empty catalog counts as complete.
    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        self.next_incomplete().is_none()
    }

    /// Marks the level at `id` complete with the given solve time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownLevel`] if `id` is not a valid index.
    pub fn mark_complete(&mut self, id: usize, elapsed: ElapsedTime) -> Result<(), CatalogError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(id)
            .ok_or(CatalogError::UnknownLevel { id, len })?;
        record.status = LevelStatus::Complete;
        record.elapsed = Some(elapsed);
        log::debug!("marked level {:?} (id {id}) complete in {elapsed}", record.name);
        Ok(())
    }

    /// Replaces the record at `id`, returning the previous one.
    ///
    /// Used to roll back an in-memory change whose save failed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownLevel`] if `id` is not a valid index and
    /// [`CatalogError::InvalidName`] or [`CatalogError::DuplicateName`] if the
    /// new record's name does not fit the catalog.
    pub fn replace(&mut self, id: usize, record: LevelRecord) -> Result<LevelRecord, CatalogError> {
        let len = self.records.len();
        if id >= len {
            return Err(CatalogError::UnknownLevel { id, len });
        }
        if !LevelRecord::is_valid_name(&record.name) {
            return Err(CatalogError::InvalidName { name: record.name });
        }
        if let Some((other, _)) = self.find(&record.name)
            && other != id
        {
            return Err(CatalogError::DuplicateName {
                line: id + 1,
                name: record.name,
            });
        }
        Ok(std::mem::replace(&mut self.records[id], record))
    }

    /// Marks every level incomplete and clears all recorded times.
    pub fn reset_all(&mut self) {
        for record in &mut self.records {
            record.status = LevelStatus::Incomplete;
            record.elapsed = None;
        }
        log::info!("reset progress of {} levels", self.records.len());
    }
}

impl Display for LevelCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for LevelCatalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
