//! Store Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use folio_catalog::models::BookId;
use folio_source::error::{Error as SourceError, ErrorKind as SourceErrorKind};

/// A store error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Loading the initial collection failed, but might succeed later.
    #[display("failed to fetch books")]
    Fetch,
    /// The source refused the initial load in a way retrying won't fix.
    #[display("failed to fetch books: {_0}")]
    Upstream(SourceErrorKind),
    /// No record with this identifier exists.
    #[display("Book with ID {_0} not found")]
    NotFound(#[error(not(source))] BookId),
    /// The record was rejected. Reserved: the simulated backend accepts
    /// anything and only logs violations.
    #[display("invalid book: {_0}")]
    Validation(#[error(not(source))] String),
    /// The backend failed to apply a mutation.
    #[display("backend error: {_0}")]
    Backend(#[error(not(source))] String),
}
impl ErrorKind {
    /// Convert a source error into a store error, keeping the source crate's
    /// `Exn` frame as a child in the error tree.
    #[track_caller]
    pub fn upstream(err: SourceError) -> Error {
        if err.is_retryable() {
            err.raise(ErrorKind::Fetch)
        } else {
            let inner = (*err).clone();
            err.raise(ErrorKind::Upstream(inner))
        }
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch | Self::Backend(_))
    }
}
