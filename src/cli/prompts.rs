//! Centralized warning and status messages for CLI output.

use crossterm::style::Stylize;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Empty charset pool: tell the user how to get a result.
pub fn empty_pool() {
    error("No characters to choose from.");
    eprintln!("Enable at least one of upper, lower, numbers or symbols.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} VALUES COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

pub fn clipboard_fallback() {
    warn("Clipboard unavailable, printing to terminal instead.");
}

pub fn settings_saved() {
    if !quiet::enabled() {
        println!("Settings saved.");
    }
}
