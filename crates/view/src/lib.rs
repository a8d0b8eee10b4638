//! Everything between the cached collection and what gets rendered.
//!
//! - [`reducer`]: the view state and its pure transitions, plus [`ViewStore`]
//!   which owns a state and exposes one dispatcher per action.
//! - The list pipeline, applied in this order by [`project()`]:
//!   [`filter()`] -> [`sort()`] -> [`paginate()`].
//! - Presentation helpers: [`genres::available()`] for the genre filter
//!   options and [`highlight()`] for marking search matches.

mod filter;
pub mod genres;
mod highlight;
mod paginate;
pub mod reducer;
mod sort;
mod store;

pub use crate::filter::{filter, matches};
pub use crate::highlight::{Segment, highlight};
pub use crate::paginate::{Page, page_window, paginate};
pub use crate::reducer::{Action, Editing, GenreFilter, StatusFilter, ViewMode, ViewState, reduce};
pub use crate::sort::{SortDirection, SortField, SortSpec, compare, sort, sort_in_place};
pub use crate::store::ViewStore;
use folio_catalog::models::Book;
use tracing::instrument;

/// Items per page for each layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub table: usize,
    pub grid: usize,
}
impl PageSizes {
    pub fn for_view(&self, view: ViewMode) -> usize {
        match view {
            ViewMode::Table => self.table,
            ViewMode::Grid => self.grid,
        }
    }
}
impl Default for PageSizes {
    fn default() -> Self {
        Self { table: 10, grid: 9 }
    }
}

/// Run the whole pipeline for `state`: filter by its search term and filters,
/// order by `sort`, then serve its page at the page size of its layout.
#[instrument(level = "trace", skip(books, state), fields(books = books.len(), page = state.page))]
pub fn project(books: &[Book], state: &ViewState, sort: SortSpec, sizes: PageSizes) -> Page<Book> {
    let mut visible = filter(books, &state.search_term, &state.genre_filter, &state.status_filter);
    sort_in_place(&mut visible, sort);
    paginate(&visible, state.page, sizes.for_view(state.view))
}
