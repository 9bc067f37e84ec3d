//! Output utilities for Kiln CLI.

use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity a message is emitted at.
///
/// `Normal` messages are always shown; `Verbose` messages are shown only
/// after [`set_verbosity`] raised the process-wide gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputLevel {
    Normal = 0,
    Verbose = 1,
}

static VERBOSITY: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide verbosity gate. Called once from the CLI entry point.
pub fn set_verbosity(level: OutputLevel) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

fn enabled(level: OutputLevel) -> bool {
    level as u8 <= VERBOSITY.load(Ordering::Relaxed)
}

/// Print an error message to stderr with red color
pub fn print_error(message: &str, level: OutputLevel) {
    if enabled(level) {
        eprintln!("\x1b[31mERROR:\x1b[0m {message}");
    }
}

/// Print a success message to stdout with green color
pub fn print_success(message: &str, level: OutputLevel) {
    if enabled(level) {
        println!("\x1b[32mSUCCESS:\x1b[0m {message}");
    }
}

/// Print an info message to stdout with blue color
pub fn print_info(message: &str, level: OutputLevel) {
    if enabled(level) {
        println!("\x1b[34mINFO:\x1b[0m {message}");
    }
}

/// Print a warning message to stdout with yellow color
#[allow(dead_code)]
pub fn print_warning(message: &str, level: OutputLevel) {
    if enabled(level) {
        println!("\x1b[33mWARNING:\x1b[0m {message}");
    }
}
