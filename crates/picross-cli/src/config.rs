use std::path::PathBuf;

use clap::{Parser, Subcommand};
use picross_level::AssetLayout;

use crate::version;

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
pub(crate) struct Args {
    /// Game directory containing `images/`, `level_data.txt` and `messages.txt`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub(crate) root: PathBuf,

    /// Level catalog file. Defaults to `<ROOT>/level_data.txt`.
    #[arg(long, value_name = "FILE")]
    pub(crate) catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    /// List every level with its status and recorded time.
    Levels,
    /// Show the first level that is not complete yet.
    Next,
    /// Print a level's clues and solution.
    Show {
        /// Level name.
        name: String,
    },
    /// Compare a grid file (`#` filled, `.` empty) against a level.
    Check {
        /// Level name.
        name: String,
        /// Text grid to replay.
        grid: PathBuf,
    },
    /// Mark every level incomplete and clear all times.
    Reset,
    /// Print the help block of the message file.
    HelpText,
}

/// File locations derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) layout: AssetLayout,
    pub(crate) catalog: PathBuf,
    pub(crate) messages: PathBuf,
}

impl Args {
    pub(crate) fn config(&self) -> Config {
        Config {
            layout: AssetLayout::rooted_at(&self.root),
            catalog: self
                .catalog
                .clone()
                .unwrap_or_else(|| self.root.join("level_data.txt")),
            messages: self.root.join("messages.txt"),
        }
    }
}
