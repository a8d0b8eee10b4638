//! Book catalog session.
//!
//! Ties the pieces together for a single user: [`Session`] owns the cached
//! collection ([`folio_store`]), the view state and pipeline ([`folio_view`])
//! and settings ([`folio_config`]), and reports the outcome of every change
//! as a [`Notice`].
//!
//! With the `http` feature, [`Session::open()`] loads configuration and seeds
//! the catalog from the configured upstream endpoint.

mod draft;
pub mod error;
mod notice;
mod session;

pub use crate::draft::Draft;
pub use crate::notice::Notice;
pub use crate::session::Session;
pub use folio_catalog::models::{Book, BookId, BookInput, BookPatch, Status};
pub use folio_config::Config;
pub use folio_view::{Action, Page, SortDirection, SortField, SortSpec, ViewMode, ViewState};
