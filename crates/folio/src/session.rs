use exn::ResultExt;
use folio_catalog::models::{Book, BookInput};
use folio_config::Config;
use folio_source::SourceHandle;
use folio_store::api::LocalApi;
use folio_store::{ApiHandle, BookCache, RetryPolicy};
use folio_view::{Action, Page, PageSizes, SortField, SortSpec, ViewState, ViewStore, genres, project};
use std::sync::Arc;
use tracing::instrument;

use crate::draft::Draft;
use crate::error::{ErrorKind, Result};
use crate::notice::Notice;

/// One user's view of the catalog.
///
/// Owns the cached collection, the view state and the sort order, and runs
/// the save and delete flows that turn store outcomes into [`Notice`]s.
pub struct Session {
    cache: BookCache,
    view: ViewStore,
    sort: SortSpec,
    sizes: PageSizes,
    retry: RetryPolicy,
}

impl Session {
    pub fn new(api: ApiHandle, config: &Config) -> Self {
        Self {
            cache: BookCache::new(api).with_stale_after(config.cache.stale_after()),
            view: ViewStore::default(),
            sort: SortSpec::default(),
            sizes: PageSizes { table: config.view.table_page_size, grid: config.view.grid_page_size },
            retry: RetryPolicy::from(&config.cache.retry),
        }
    }

    /// A session over the simulated backend, seeded from `source`.
    pub fn with_source(source: SourceHandle, config: &Config) -> Self {
        Self::new(Arc::new(LocalApi::from_config(source, config)), config)
    }

    /// A session seeded from the upstream endpoint named in the configuration.
    #[cfg(feature = "http")]
    pub fn connect(config: &Config) -> Self {
        let source = folio_source::HttpSource::new(&config.source.base_url, &config.source.api_key);
        Self::with_source(Arc::new(source), config)
    }

    /// Load configuration from every layer (see [`Config::load()`]) and
    /// connect to the configured upstream.
    #[cfg(feature = "http")]
    pub fn open(explicit: Option<&std::path::Path>) -> Result<Self> {
        let config = Config::load(explicit).or_raise(|| ErrorKind::Config)?;
        Ok(Self::connect(&config))
    }

    pub fn cache(&self) -> &BookCache {
        &self.cache
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn view(&mut self) -> &mut ViewStore {
        &mut self.view
    }

    pub fn dispatch(&mut self, action: Action) {
        self.view.dispatch(action);
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Sort by `field`, flipping the direction if it already is the sort field.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    /// First read of the collection, retried with backoff while the failure
    /// looks transient.
    #[instrument(level = "debug", skip(self))]
    pub async fn load(&self) -> Result<Vec<Book>> {
        self.retry.run("load books", || self.cache.books()).await.or_raise(|| ErrorKind::Load)
    }

    /// The page to render for the current view state.
    pub async fn page(&self) -> Result<Page<Book>> {
        let books = self.cache.books().await.or_raise(|| ErrorKind::Load)?;
        Ok(project(&books, self.view.state(), self.sort, self.sizes))
    }

    /// Options for the genre filter.
    pub async fn genres(&self) -> Result<Vec<String>> {
        let books = self.cache.books().await.or_raise(|| ErrorKind::Load)?;
        Ok(genres::available(&books))
    }

    /// Submit the editor: update when the draft names a record, create
    /// otherwise. The editor is closed only on success.
    #[instrument(level = "debug", skip(self, draft), fields(id = ?draft.id))]
    pub async fn save(&mut self, draft: Draft) -> Notice {
        let title = draft.title().to_string();
        let outcome = match draft.id {
            Some(id) => self.cache.update(&id, draft.fields).await.map(|_| Notice::updated(&title)),
            None => self.cache.create(BookInput::from(draft.fields)).await.map(|_| Notice::added(&title)),
        };
        match outcome {
            Ok(notice) => {
                self.view.close_editor();
                notice
            },
            Err(err) => {
                tracing::error!(error = %*err, "Save failed");
                Notice::save_failed(&*err)
            },
        }
    }

    /// Delete the record awaiting confirmation, if any. The dialog is closed
    /// only on success.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_confirmed(&mut self) -> Option<Notice> {
        let book = self.view.state().confirm.clone()?;
        match self.cache.remove(&book.id).await {
            Ok(_) => {
                self.view.close_delete_confirm();
                Some(Notice::deleted(&book.title))
            },
            Err(err) => {
                tracing::error!(id = %book.id, error = %*err, "Delete failed");
                Some(Notice::delete_failed(&book.title, &*err))
            },
        }
    }
}
