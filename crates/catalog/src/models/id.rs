use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::atomic::{AtomicU64, Ordering};
use time::UtcDateTime;

/// Marker prefixed to identifiers handed out by the client before the backend
/// has confirmed a record.
pub const TEMPORARY_PREFIX: &str = "temp-";

static TEMPORARY_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identifier of a book record.
///
/// Backend-assigned identifiers are opaque strings. Temporary identifiers are
/// generated locally for optimistic inserts and are always prefixed with
/// [`TEMPORARY_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);
impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh temporary identifier, unique for the lifetime of the
    /// process.
    pub fn temporary() -> Self {
        let millis = UtcDateTime::now().unix_timestamp_nanos() / 1_000_000;
        let sequence = TEMPORARY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{TEMPORARY_PREFIX}{millis}-{sequence}"))
    }

    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMPORARY_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}
impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
