//! Client-side state for the book collection.
//!
//! [`BookCache`] keeps the last known collection and applies mutations
//! optimistically, rolling back when the backend refuses them. The backend is
//! anything implementing [`api::BookApi`]; [`api::LocalApi`] simulates one in
//! memory. [`RetryPolicy`] is for callers that want to retry reads.

pub mod api;
mod cache;
pub mod error;
mod retry;

pub use crate::api::BookApi;
pub use crate::cache::{BookCache, DEFAULT_STALE_AFTER};
pub use crate::retry::RetryPolicy;
use std::sync::Arc;

pub type ApiHandle = Arc<dyn BookApi + Send + Sync>;
