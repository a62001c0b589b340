use std::{
    fs, io,
    path::{Path, PathBuf},
};

const DELIMITER: &str = "[--DELIMITER--]";

/// Errors reported while reading the message asset.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MessagesError {
    /// The file exists but could not be read.
    #[display("I/O error on message file {}", path.display())]
    Io {
        /// Path of the message file.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The text has no `[--DELIMITER--]` line separating the two blocks.
    #[display("message text has no delimiter line")]
    MissingDelimiter,
}

/// Display texts shipped next to the level catalog.
///
/// The file holds two free-text blocks separated by a line reading exactly
/// `[--DELIMITER--]`: first the help text, then the prompt shown once every
/// level is complete.
///
/// ```
/// use picross_catalog::Messages;
///
/// let messages = Messages::parse("Click cells.\n[--DELIMITER--]\nAll done!\n").unwrap();
/// assert_eq!(messages.help, "Click cells.");
/// assert_eq!(messages.all_complete, "All done!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    /// How-to-play text.
    pub help: String,
    /// Prompt offered when every level has been solved.
    pub all_complete: String,
}

impl Messages {
    /// Splits `text` into its two blocks at the first delimiter line.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::MissingDelimiter`] if no line equals the
    /// delimiter.
    pub fn parse(text: &str) -> Result<Self, MessagesError> {
        let mut help = Vec::new();
        let mut lines = text.lines();
        for line in lines.by_ref() {
            if line.trim_end() == DELIMITER {
                let all_complete: Vec<&str> = lines.collect();
                return Ok(Self {
                    help: help.join("\n").trim().to_owned(),
                    all_complete: all_complete.join("\n").trim().to_owned(),
                });
            }
            help.push(line);
        }
        Err(MessagesError::MissingDelimiter)
    }

    /// Reads the message file at `path`.
    ///
    /// A missing file is not an error: the asset is optional and `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::Io`] if the file exists but cannot be read and
    /// any error of [`Messages::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, MessagesError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no message file at {}", path.display());
                Ok(None)
            }
            Err(source) => Err(MessagesError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }
}
