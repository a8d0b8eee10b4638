//! Simulated book server.

use async_trait::async_trait;
use exn::OptionExt;
use folio_catalog::models::{Book, BookId, BookInput, BookPatch};
use folio_catalog::validate;
use folio_config::{Config, LatencyConfig};
use folio_source::SourceHandle;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::api::BookApi;
use crate::error::{ErrorKind, Result};

/// Identifier handed to the first record created through the API.
pub const FIRST_CREATED_ID: u64 = 1000;

struct State {
    books: Vec<Book>,
    next_id: u64,
    loaded: bool,
}

/// In-memory "server" with artificial latency.
///
/// The collection is seeded from `source` the first time anything touches
/// it; until a seed succeeds every call tries again. Created records get
/// sequential numeric identifiers starting at [`FIRST_CREATED_ID`].
///
/// # Examples
///
/// ```
/// use folio_config::Config;
/// use folio_source::MockSource;
/// use folio_store::api::{BookApi, LocalApi};
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> folio_store::error::Result<()> {
/// let api = LocalApi::from_config(Arc::new(MockSource::with_people(12)), &Config::default());
/// assert_eq!(api.fetch_all().await?.len(), 12);
/// # Ok(())
/// # }
/// ```
pub struct LocalApi {
    name: String,
    source: SourceHandle,
    latency: LatencyConfig,
    per_page: usize,
    state: RwLock<State>,
}

impl LocalApi {
    pub fn new(source: SourceHandle, latency: LatencyConfig, per_page: usize) -> Self {
        Self {
            name: "local".to_string(),
            source,
            latency,
            per_page,
            state: RwLock::new(State { books: Vec::new(), next_id: FIRST_CREATED_ID, loaded: false }),
        }
    }

    pub fn from_config(source: SourceHandle, config: &Config) -> Self {
        Self::new(source, config.latency.clone(), config.source.per_page)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Seed the collection from the source unless that already happened.
    async fn ensure_loaded(&self) -> Result<()> {
        if self.state.read().await.loaded {
            return Ok(());
        }
        tokio::time::sleep(self.latency.initial_load()).await;
        let records = self.source.list(self.per_page).await.map_err(ErrorKind::upstream)?;

        let mut state = self.state.write().await;
        // Another caller may have finished seeding while this one waited.
        if !state.loaded {
            state.books = records.iter().map(|record| record.to_book()).collect();
            state.loaded = true;
            tracing::info!(backend = %self.name, source = self.source.name(), books = state.books.len(), "Seeded collection");
        }
        Ok(())
    }

    fn warn_violations(&self, book: &Book) {
        for violation in validate(book) {
            tracing::warn!(backend = %self.name, id = %book.id, %violation, "Storing book that fails validation");
        }
    }
}

#[async_trait]
impl BookApi for LocalApi {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(level = "debug", skip(self), fields(backend = %self.name))]
    async fn fetch_all(&self) -> Result<Vec<Book>> {
        self.ensure_loaded().await?;
        Ok(self.state.read().await.books.clone())
    }

    #[instrument(level = "debug", skip(self, input), fields(backend = %self.name))]
    async fn create(&self, input: BookInput) -> Result<Book> {
        tokio::time::sleep(self.latency.mutation()).await;
        self.ensure_loaded().await?;

        let mut state = self.state.write().await;
        let book = input.into_book(BookId::from(state.next_id));
        state.next_id += 1;
        self.warn_violations(&book);
        state.books.push(book.clone());
        tracing::debug!(id = %book.id, "Created book");
        Ok(book)
    }

    #[instrument(level = "debug", skip(self, patch), fields(backend = %self.name))]
    async fn update(&self, id: &BookId, patch: BookPatch) -> Result<Book> {
        tokio::time::sleep(self.latency.mutation()).await;
        self.ensure_loaded().await?;

        let mut state = self.state.write().await;
        let book = state.books.iter_mut().find(|book| &book.id == id).ok_or_raise(|| ErrorKind::NotFound(id.clone()))?;
        book.apply(&patch);
        self.warn_violations(book);
        Ok(book.clone())
    }

    #[instrument(level = "debug", skip(self), fields(backend = %self.name))]
    async fn remove(&self, id: &BookId) -> Result<BookId> {
        tokio::time::sleep(self.latency.mutation()).await;
        self.ensure_loaded().await?;

        let mut state = self.state.write().await;
        let position =
            state.books.iter().position(|book| &book.id == id).ok_or_raise(|| ErrorKind::NotFound(id.clone()))?;
        state.books.remove(position);
        Ok(id.clone())
    }
}
