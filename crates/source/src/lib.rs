//! Upstream record sources.
//!
//! The catalog is seeded from a paginated "list items" endpoint. This crate
//! defines the [`SourceBackend`] trait the store loads through, plus:
//!
//! - [`HttpSource`] (feature `http`): the real endpoint over HTTPS.
//! - [`MockSource`] (feature `mock`): in-memory records with failure
//!   injection, for tests.

pub mod error;
#[cfg(feature = "http")]
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(feature = "http")]
pub use self::http::HttpSource;
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockSource;
use crate::error::Result;
use async_trait::async_trait;
use folio_catalog::source::SourceRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type SourceHandle = Arc<dyn SourceBackend + Send + Sync>;

/// One page of the upstream listing. Paging metadata is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePage {
    pub data: Vec<SourceRecord>,
}

/// Read access to the upstream listing.
///
/// Implementations only ever serve the first page; the catalog never pages
/// further than its configured seed size.
#[async_trait]
pub trait SourceBackend: Send + Sync {
    /// Name of the source, used for logging only.
    fn name(&self) -> &str;

    /// Fetch the first page of records, at most `per_page` of them.
    async fn list(&self, per_page: usize) -> Result<Vec<SourceRecord>>;
}
