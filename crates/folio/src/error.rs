//! Session Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A session error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("Failed to load books")]
    Load,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Load)
    }
}
