//! Error types.
//!
//! Nothing here is fatal: every error is scoped to one record or one
//! load/save round trip and is recoverable at the session level.

use thiserror::Error;

use crate::models::UnknownDay;

/// A time string whose hour component could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The string was empty or whitespace.
    #[error("empty time string")]
    Empty,
    /// The string is not `HH:MM` or `HH:MM:SS`.
    #[error("malformed time {0:?}: expected HH:MM[:SS]")]
    Malformed(String),
}

/// A single inbound slot or shift that cannot become an interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error(transparent)]
    UnknownDay(#[from] UnknownDay),
    #[error("invalid {field}: {source}")]
    Time {
        /// Which field failed ("start" or "end").
        field: &'static str,
        #[source]
        source: TimeParseError,
    },
}

/// Failure of a round trip through the schedule store.
#[derive(Debug, Error)]
pub enum SessionError<E: std::error::Error + 'static> {
    /// Fetching the saved schedule failed.
    #[error("failed to load schedule: {0}")]
    Load(#[source] E),
    /// Posting the edited schedule failed.
    #[error("failed to save schedule: {0}")]
    Save(#[source] E),
}
