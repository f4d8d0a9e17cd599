//! Shared terminal utilities.
//!
//! Box drawing, result display and ANSI helpers.

mod output;

pub use output::*;
