//! Error types for rotacal.

use thiserror::Error;

use crate::grid::CellRef;

/// Errors that can occur while turning a schedule into events.
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("No date was found above the entry at {cell}")]
    DateNotFound { cell: CellRef },

    #[error("Day of week does not match date for entry at {cell}: expected '{expected}', found '{found}'")]
    DayMismatch {
        cell: CellRef,
        expected: String,
        found: String,
    },

    #[error("Unknown role '{role}' for entry at {cell}")]
    UnknownRole { role: String, cell: CellRef },

    #[error("Invalid recurring schedule '{title}': {reason}")]
    InvalidRecurrence { title: String, reason: String },

    #[error("Invalid time '{value}', expected HH:MM AM/PM")]
    InvalidTime { value: String },

    #[error("Invalid date '{value}', expected MM/DD/YYYY")]
    InvalidDate { value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rotacal operations.
pub type RotaResult<T> = Result<T, RotaError>;
