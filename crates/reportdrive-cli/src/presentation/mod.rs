//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no Drive calls, no domain decisions.

mod file_display;

pub use file_display::{display_file, format_file};
