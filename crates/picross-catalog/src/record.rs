use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Text stored in place of a time when none has been recorded.
pub const UNRECORDED_TIME: &str = "--:--";

const FIELD_SEPARATOR: &str = " - ";

/// Errors produced while parsing a single catalog line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseRecordError {
    /// The line does not have the `name - status[ - time]` shape.
    #[display("expected `name - status[ - time]`, found {field_count} field(s)")]
    FieldCount {
        /// Number of ` - `-separated fields found.
        field_count: usize,
    },
    /// The name field is blank.
    #[display("level name is empty")]
    EmptyName,
    /// The name holds characters the line format cannot store.
    #[display("invalid level name {name:?}")]
    InvalidName {
        /// The name text found.
        name: String,
    },
    /// The status is neither `incomplete` nor `complete`.
    #[display("unknown status {status:?}")]
    InvalidStatus {
        /// The status text found.
        status: String,
    },
    /// The time is neither `mm:ss` nor `--:--`.
    #[display("invalid time {time:?}")]
    InvalidTime {
        /// The time text found.
        time: String,
    },
}

/// Completion status of a level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum LevelStatus {
    /// Not solved yet (or reset).
    #[default]
    Incomplete,
    /// Solved and recorded.
    Complete,
}

impl LevelStatus {
    /// Returns the persisted spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }
}

impl Display for LevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LevelStatus {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseRecordError::InvalidStatus {
                status: s.to_owned(),
            }),
        }
    }
}

/// Time spent solving a level, with second resolution.
///
/// Displays as `mm:ss` with zero-padded fields; minutes are not capped at 59
/// and widen as needed.
///
/// ```
/// use picross_catalog::ElapsedTime;
///
/// assert_eq!(ElapsedTime::from_secs(65).to_string(), "01:05");
/// assert_eq!(ElapsedTime::from_secs(7_527).to_string(), "125:27");
/// assert_eq!("03:09".parse::<ElapsedTime>().unwrap().as_secs(), 189);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElapsedTime {
    secs: u64,
}

impl ElapsedTime {
    /// Creates an elapsed time from a number of seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Returns the total number of seconds.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.secs
    }
}

impl Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.secs / 60, self.secs % 60)
    }
}

impl FromStr for ElapsedTime {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRecordError::InvalidTime { time: s.to_owned() };
        let (minutes, seconds) = s.split_once(':').ok_or_else(invalid)?;
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(minutes) || seconds.len() != 2 || !is_digits(seconds) {
            return Err(invalid());
        }
        let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }
        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_secs)
            .ok_or_else(invalid)
    }
}

/// One line of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    /// Level name, also the image file stem.
    pub name: String,
    /// Whether the level has been solved.
    pub status: LevelStatus,
    /// Solve time, or `None` when no time has been recorded.
    pub elapsed: Option<ElapsedTime>,
}

impl LevelRecord {
    /// Creates an incomplete record with no recorded time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: LevelStatus::Incomplete,
            elapsed: None,
        }
    }

    /// Returns `true` if `name` can be stored in the line format unchanged.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty()
            && name.trim() == name
            && !name.contains(FIELD_SEPARATOR)
            && !name.contains(['\n', '\r'])
    }
}

impl Display for LevelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}", self.name, self.status)?;
        match self.elapsed {
            Some(time) => write!(f, "{time}"),
            None => f.write_str(UNRECORDED_TIME),
        }
    }
}

impl FromStr for LevelRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
        let (name, status, time) = match fields.as_slice() {
            [name, status] => (*name, *status, None),
            [name, status, time] => (*name, *status, Some(*time)),
            _ => {
                return Err(ParseRecordError::FieldCount {
                    field_count: fields.len(),
                });
            }
        };
        if name.is_empty() {
            return Err(ParseRecordError::EmptyName);
        }
        if !Self::is_valid_name(name) {
            return Err(ParseRecordError::InvalidName {
                name: name.to_owned(),
            });
        }
        let status = status.parse()?;
        let elapsed = match time {
            None | Some(UNRECORDED_TIME) => None,
            Some(time) => Some(time.parse()?),
        };
        Ok(Self {
            name: name.to_owned(),
            status,
            elapsed,
        })
    }
}
