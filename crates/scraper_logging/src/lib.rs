#![deny(missing_docs)]
//! Shared logging setup for the scraper workspace.
//!
//! Thin wrappers around `simplelog` so the CLI and the test suites
//! initialize the global logger the same way.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Initializes a terminal logger at the given level.
///
/// Quietly does nothing if a global logger is already installed.
pub fn init_terminal(level: LevelFilter) {
    let _ = CombinedLogger::init(vec![term_logger(level)]);
}

/// Initializes terminal logging plus a log file at `path`.
pub fn init_with_file(level: LevelFilter, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let _ = CombinedLogger::init(vec![
        term_logger(level),
        WriteLogger::new(level, Config::default(), file),
    ]);
    Ok(())
}

fn term_logger(level: LevelFilter) -> Box<dyn SharedLogger> {
    TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
}

/// Initializes a terminal logger for use in unit tests.
///
/// Debug level in debug builds, info in release builds. Safely no-ops if
/// another test already installed a logger.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = CombinedLogger::init(vec![term_logger(level)]);
}
