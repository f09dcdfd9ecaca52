//! Error types.
//!
//! The widget itself cannot fail. Errors come from the outer surfaces:
//! terminal I/O, snapshot event parsing, serialization, logging setup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::TabId;

/// Rejected tab collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSetError {
    #[error("a tab set needs at least one tab")]
    Empty,

    #[error("tab id {0} appears more than once")]
    DuplicateId(TabId),
}

/// Malformed entry in a snapshot event list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    #[error("empty event in list")]
    Empty,

    #[error("unknown key name '{0}'")]
    UnknownKey(String),

    #[error("'{0}' is not a tab index")]
    BadIndex(String),

    #[error("tab index {index} out of range (tabs: {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Top-level error for the binary and the effectful modules.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TabSet(#[from] TabSetError),

    #[error("invalid event: {0}")]
    Event(#[from] EventParseError),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_both_numbers() {
        let err = EventParseError::OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "tab index 5 out of range (tabs: 3)");
    }

    #[test]
    fn tab_set_error_converts_into_error() {
        let err: Error = TabSetError::DuplicateId(TabId(2)).into();
        assert_eq!(err.to_string(), "tab id 2 appears more than once");
    }
}
