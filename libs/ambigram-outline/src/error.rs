//! # Outline Errors
//!
//! Error types for outline construction and path-data parsing.

use thiserror::Error;

/// Errors that can occur while building outlines.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// Path data contained a command outside the supported subset.
    #[error("Unsupported path command '{command}' at byte {offset}")]
    UnsupportedCommand { command: char, offset: usize },

    /// A number in the path data failed to parse.
    #[error("Invalid number in path data at byte {offset}")]
    InvalidNumber { offset: usize },

    /// A command was missing one or more of its arguments.
    #[error("Missing argument for command '{command}' at byte {offset}")]
    MissingArgument { command: char, offset: usize },

    /// A draw command appeared before any subpath was started.
    #[error("Path data must start with a moveto command")]
    MissingMoveto,

    /// Requested digit is outside 0..=9.
    #[error("Digit {0} is out of range (expected 0..=9)")]
    DigitOutOfRange(u8),
}
