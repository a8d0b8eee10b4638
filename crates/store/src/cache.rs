//! Client-side copy of the collection with optimistic mutations.

use exn::OptionExt;
use folio_catalog::models::{Book, BookId, BookInput, BookPatch};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::instrument;

use crate::ApiHandle;
use crate::error::{ErrorKind, Result};

/// Default time a fetched collection is served before refetching.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

#[derive(Default)]
struct State {
    /// `None` until the first fetch (or optimistic write) lands.
    books: Option<Vec<Book>>,
    updated_at: Option<Instant>,
    stale: bool,
    /// Bumped by every refresh and mutation; a refresh only lands if nothing
    /// else started while it was in flight.
    generation: u64,
}
impl State {
    fn is_fresh(&self, stale_after: Duration) -> bool {
        !self.stale && self.updated_at.is_some_and(|at| at.elapsed() < stale_after)
    }

    fn position(&self, id: &BookId) -> Option<usize> {
        self.books.as_ref()?.iter().position(|book| &book.id == id)
    }

    /// Start an optimistic write: cancel in-flight refreshes and remember
    /// what was visible.
    fn begin(&mut self) -> Snapshot {
        self.generation += 1;
        self.updated_at = Some(Instant::now());
        Snapshot(self.books.clone())
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.books = snapshot.0;
        self.stale = true;
    }

    fn replace(&mut self, id: &BookId, book: Book) {
        if let Some(slot) = self.books.iter_mut().flatten().find(|b| &b.id == id) {
            *slot = book;
        }
    }
}

/// The visible collection as it was before an optimistic write.
struct Snapshot(Option<Vec<Book>>);

/// Cache and mutation coordinator for the book collection.
///
/// Reads are served from the cached collection while it is fresh. Mutations
/// are applied to the cached collection before the backend is asked, so
/// concurrent readers see the expected outcome straight away:
///
/// 1. the visible collection is snapshotted,
/// 2. the change is applied (create appends a record under a temporary id),
/// 3. the backend is called with no lock held,
/// 4. on success the confirmed record replaces the optimistic one; on
///    failure the snapshot is restored as it was and the error returned.
///
/// Either way the collection is marked stale, so the next [`books()`](Self::books)
/// refetches from the backend.
///
/// # Examples
///
/// ```
/// use folio_catalog::models::BookInput;
/// use folio_config::Config;
/// use folio_source::MockSource;
/// use folio_store::{BookCache, api::LocalApi};
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> folio_store::error::Result<()> {
/// let api = LocalApi::from_config(Arc::new(MockSource::with_people(12)), &Config::default());
/// let cache = BookCache::new(Arc::new(api));
/// let book = cache.create(BookInput::new("Dune", "Frank Herbert")).await?;
/// assert!(cache.books().await?.contains(&book));
/// # Ok(())
/// # }
/// ```
pub struct BookCache {
    api: ApiHandle,
    stale_after: Duration,
    state: RwLock<State>,
}

impl BookCache {
    pub fn new(api: ApiHandle) -> Self {
        Self { api, stale_after: DEFAULT_STALE_AFTER, state: RwLock::new(State::default()) }
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn api(&self) -> &ApiHandle {
        &self.api
    }

    /// The collection, refetched first unless the cached copy is fresh.
    pub async fn books(&self) -> Result<Vec<Book>> {
        {
            let state = self.state.read().await;
            if state.is_fresh(self.stale_after)
                && let Some(books) = &state.books
            {
                return Ok(books.clone());
            }
        }
        self.refresh().await
    }

    /// Whatever is cached right now, optimistic changes included. Never
    /// fetches; empty before the first load.
    pub async fn visible(&self) -> Vec<Book> {
        self.state.read().await.books.clone().unwrap_or_default()
    }

    /// Look a record up in the cached collection.
    pub async fn get(&self, id: &BookId) -> Option<Book> {
        let state = self.state.read().await;
        state.books.as_ref()?.iter().find(|book| &book.id == id).cloned()
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.books.is_some()
    }

    pub async fn is_stale(&self) -> bool {
        !self.state.read().await.is_fresh(self.stale_after)
    }

    /// Mark the cached collection stale so the next read refetches.
    pub async fn invalidate(&self) {
        self.state.write().await.stale = true;
    }

    async fn ensure_loaded(&self) -> Result<()> {
        if !self.is_loaded().await {
            self.books().await?;
        }
        Ok(())
    }

    /// Refetch unconditionally.
    ///
    /// If another refresh or a mutation starts before this one settles, the
    /// fetched collection is not stored and the current one is returned
    /// instead (or the fetched one, while nothing has landed yet).
    #[instrument(level = "debug", skip(self), fields(backend = self.api.name()))]
    pub async fn refresh(&self) -> Result<Vec<Book>> {
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.generation
        };
        let fetched = self.api.fetch_all().await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "Discarding superseded refresh");
            return match fetched {
                Ok(books) => Ok(state.books.clone().unwrap_or(books)),
                Err(err) => Err(err),
            };
        }
        let books = fetched?;
        state.books = Some(books.clone());
        state.updated_at = Some(Instant::now());
        state.stale = false;
        Ok(books)
    }

    /// Create a record, showing it under a temporary id until the backend
    /// confirms it.
    #[instrument(level = "debug", skip(self, input), fields(backend = self.api.name()))]
    pub async fn create(&self, input: BookInput) -> Result<Book> {
        let optimistic = input.clone().into_book(BookId::temporary());
        let temporary = optimistic.id.clone();
        let snapshot = {
            let mut state = self.state.write().await;
            let snapshot = state.begin();
            state.books.get_or_insert_default().push(optimistic);
            snapshot
        };

        let result = self.api.create(input).await;
        let mut state = self.state.write().await;
        state.stale = true;
        match result {
            Ok(book) => {
                tracing::debug!(%temporary, id = %book.id, "Confirmed created book");
                state.replace(&temporary, book.clone());
                Ok(book)
            },
            Err(err) => {
                tracing::warn!(%temporary, error = %*err, "Create failed, rolling back");
                state.restore(snapshot);
                Err(err)
            },
        }
    }

    /// Merge `patch` into a cached record, then confirm with the backend.
    ///
    /// Loads the collection first if nothing is cached yet. Fails with
    /// [`ErrorKind::NotFound`] without touching anything if the record isn't
    /// in it.
    #[instrument(level = "debug", skip(self, patch), fields(backend = self.api.name()))]
    pub async fn update(&self, id: &BookId, patch: BookPatch) -> Result<Book> {
        self.ensure_loaded().await?;
        let snapshot = {
            let mut state = self.state.write().await;
            let position = state.position(id).ok_or_raise(|| ErrorKind::NotFound(id.clone()))?;
            let snapshot = state.begin();
            if let Some(books) = state.books.as_mut() {
                books[position].apply(&patch);
            }
            snapshot
        };

        let result = self.api.update(id, patch).await;
        let mut state = self.state.write().await;
        state.stale = true;
        match result {
            Ok(book) => {
                state.replace(id, book.clone());
                Ok(book)
            },
            Err(err) => {
                tracing::warn!(error = %*err, "Update failed, rolling back");
                state.restore(snapshot);
                Err(err)
            },
        }
    }

    /// Drop a cached record, then confirm with the backend.
    ///
    /// Loads the collection first if nothing is cached yet. Fails with
    /// [`ErrorKind::NotFound`] without touching anything if the record isn't
    /// in it.
    #[instrument(level = "debug", skip(self), fields(backend = self.api.name()))]
    pub async fn remove(&self, id: &BookId) -> Result<BookId> {
        self.ensure_loaded().await?;
        let snapshot = {
            let mut state = self.state.write().await;
            let position = state.position(id).ok_or_raise(|| ErrorKind::NotFound(id.clone()))?;
            let snapshot = state.begin();
            if let Some(books) = state.books.as_mut() {
                books.remove(position);
            }
            snapshot
        };

        let result = self.api.remove(id).await;
        let mut state = self.state.write().await;
        state.stale = true;
        if let Err(err) = &result {
            tracing::warn!(error = %**err, "Delete failed, rolling back");
            state.restore(snapshot);
        }
        result
    }
}
