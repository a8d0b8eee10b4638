//! Backend contract for book records and its implementations.
//!
//! The cache never talks to a server directly; it goes through [`BookApi`].
//! [`LocalApi`] is the simulated server: an in-memory collection behind
//! artificial latency, seeded lazily from a [`SourceBackend`](folio_source::SourceBackend).

#[cfg(any(test, feature = "mock"))]
mod flaky;
mod local;

#[cfg(any(test, feature = "mock"))]
pub use self::flaky::FlakyApi;
pub use self::local::LocalApi;
use crate::error::Result;
use async_trait::async_trait;
use folio_catalog::models::{Book, BookId, BookInput, BookPatch};

/// CRUD access to the authoritative book collection.
///
/// Every call is a suspension point and may take as long as the backend
/// likes; callers must not hold locks across them.
///
/// # Examples
///
/// ```
/// use folio_catalog::models::BookInput;
/// use folio_store::{api::BookApi, error::Result};
///
/// async fn add_and_count(api: &dyn BookApi) -> Result<usize> {
///     api.create(BookInput::new("Dune", "Frank Herbert")).await?;
///     Ok(api.fetch_all().await?.len())
/// }
/// ```
#[async_trait]
pub trait BookApi: Send + Sync {
    /// Name of the backend, used for logging only.
    fn name(&self) -> &str;

    /// The whole collection, in insertion order.
    async fn fetch_all(&self) -> Result<Vec<Book>>;

    /// Store a new record, filling defaults for missing fields, and return
    /// it with its assigned identifier.
    async fn create(&self, input: BookInput) -> Result<Book>;

    /// Merge `patch` into the record with identifier `id`.
    async fn update(&self, id: &BookId, patch: BookPatch) -> Result<Book>;

    /// Delete the record with identifier `id`, returning the identifier.
    async fn remove(&self, id: &BookId) -> Result<BookId>;
}
