//! In-memory record source for testing.

use async_trait::async_trait;
use folio_catalog::source::SourceRecord;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::SourceBackend;
use crate::error::{ErrorKind, Result};

/// In-memory record source for testing.
///
/// Serves a fixed list of records. Failures can be queued with
/// [`fail_next()`](Self::fail_next): each queued failure is consumed by one
/// call to [`list()`](SourceBackend::list).
///
/// # Examples
///
/// ```
/// use folio_source::{MockSource, SourceBackend};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = MockSource::with_people(12);
/// source.fail_next(1);
/// assert!(source.list(12).await.is_err());
/// assert_eq!(source.list(12).await.unwrap().len(), 12);
/// assert_eq!(source.calls(), 2);
/// # }
/// ```
pub struct MockSource {
    name: String,
    records: Vec<SourceRecord>,
    failures: AtomicUsize,
    calls: AtomicUsize,
}

impl MockSource {
    pub fn with_records(records: impl IntoIterator<Item = SourceRecord>) -> Self {
        Self {
            name: "mock".to_string(),
            records: records.into_iter().collect(),
            failures: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Generate `count` placeholder people with ids starting at 1.
    pub fn with_people(count: u64) -> Self {
        Self::with_records((1..=count).map(|id| SourceRecord {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("person{id}@example.com"),
        }))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Make the next `count` calls fail with [`ErrorKind::Unavailable`].
    pub fn fail_next(&self, count: usize) {
        self.failures.store(count, Ordering::SeqCst);
    }

    /// Number of calls made to [`list()`](SourceBackend::list) so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
impl Default for MockSource {
    fn default() -> Self {
        Self::with_records([])
    }
}

#[async_trait]
impl SourceBackend for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, per_page: usize) -> Result<Vec<SourceRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self.failures.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok();
        if failing {
            exn::bail!(ErrorKind::Unavailable(self.name.clone()));
        }
        Ok(self.records.iter().take(per_page).cloned().collect())
    }
}
