//! `picross`: inspect levels and manage saved progress from the terminal.

use std::process;

use clap::Parser as _;

use crate::config::Args;

mod commands;
mod config;
mod error;
mod version;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!("starting picross {}", version::build_version());

    let config = args.config();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::run(&config, &args.command, &mut stdout) {
        eprintln!("error: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}
