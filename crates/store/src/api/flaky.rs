//! Failure-injecting wrapper backend for testing.

use async_trait::async_trait;
use folio_catalog::models::{Book, BookId, BookInput, BookPatch};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::api::BookApi;
use crate::error::{ErrorKind, Result};

/// Wraps another backend and fails mutations on demand.
///
/// Each failure queued with [`fail_next()`](Self::fail_next) makes one
/// mutation wait out `latency` and then fail with [`ErrorKind::Backend`]
/// without reaching the inner backend. Reads can be slowed down with
/// [`with_fetch_delay()`](Self::with_fetch_delay) to hold a refresh in flight.
pub struct FlakyApi<A> {
    inner: A,
    failures: AtomicUsize,
    latency: Duration,
    fetch_delay: Duration,
}
impl<A: BookApi> FlakyApi<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            failures: AtomicUsize::new(0),
            latency: Duration::from_millis(300),
            fetch_delay: Duration::ZERO,
        }
    }

    /// How long a failing mutation takes before reporting its failure.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Delay applied after the inner backend answers a fetch.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Make the next `count` mutations fail.
    pub fn fail_next(&self, count: usize) {
        self.failures.store(count, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    async fn injected_failure(&self, operation: &str) -> Result<()> {
        if self.failures.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_err() {
            return Ok(());
        }
        tokio::time::sleep(self.latency).await;
        tracing::info!(backend = self.inner.name(), operation, "Injecting backend failure");
        exn::bail!(ErrorKind::Backend(format!("failed to {operation} book")))
    }
}

#[async_trait]
impl<A: BookApi> BookApi for FlakyApi<A> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_all(&self) -> Result<Vec<Book>> {
        let books = self.inner.fetch_all().await?;
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        Ok(books)
    }

    async fn create(&self, input: BookInput) -> Result<Book> {
        self.injected_failure("create").await?;
        self.inner.create(input).await
    }

    async fn update(&self, id: &BookId, patch: BookPatch) -> Result<Book> {
        self.injected_failure("update").await?;
        self.inner.update(id, patch).await
    }

    async fn remove(&self, id: &BookId) -> Result<BookId> {
        self.injected_failure("delete").await?;
        self.inner.remove(id).await
    }
}
