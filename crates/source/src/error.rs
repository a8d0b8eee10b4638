//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A source error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connection, TLS...).
    #[display("network error")]
    Network,
    /// The upstream answered with a non-success status code.
    #[display("HTTP error! status: {_0}")]
    Status(#[error(not(source))] u16),
    /// The response body did not have the expected shape.
    #[display("invalid response body")]
    InvalidData,
    /// The source refused to serve records (used by test doubles).
    #[display("source unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Client errors (4xx) are never worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network | Self::Unavailable(_) => true,
            Self::Status(code) => !(400..500).contains(code),
            Self::InvalidData => false,
        }
    }
}
