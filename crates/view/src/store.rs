use folio_catalog::models::Book;

use crate::reducer::{Action, Editing, GenreFilter, StatusFilter, ViewMode, ViewState, reduce};

/// Owns a [`ViewState`] and funnels every change through [`reduce()`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStore {
    state: ViewState,
}
impl ViewStore {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "Dispatching view action");
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.dispatch(Action::SetView(view));
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(Action::SetPage(page));
    }

    /// Step back one page, stopping at the first.
    pub fn previous_page(&mut self) {
        self.set_page(self.state.page.saturating_sub(1).max(1));
    }

    /// Step forward one page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.set_page((self.state.page + 1).min(total_pages.max(1)));
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(Action::SetSearchTerm(term.into()));
    }

    pub fn set_genre_filter(&mut self, genre: impl Into<GenreFilter>) {
        self.dispatch(Action::SetGenreFilter(genre.into()));
    }

    pub fn set_status_filter(&mut self, status: impl Into<StatusFilter>) {
        self.dispatch(Action::SetStatusFilter(status.into()));
    }

    pub fn set_editing(&mut self, editing: Editing) {
        self.dispatch(Action::SetEditing(editing));
    }

    pub fn edit(&mut self, book: Book) {
        self.set_editing(Editing::Existing(book));
    }

    pub fn open_add_book(&mut self) {
        self.dispatch(Action::OpenAddBook);
    }

    pub fn close_editor(&mut self) {
        self.dispatch(Action::CloseEditor);
    }

    pub fn open_delete_confirm(&mut self, book: Book) {
        self.dispatch(Action::OpenDeleteConfirm(book));
    }

    pub fn close_delete_confirm(&mut self) {
        self.dispatch(Action::CloseDeleteConfirm);
    }

    pub fn clear_filters(&mut self) {
        self.dispatch(Action::ClearFilters);
    }

    pub fn reset_pagination(&mut self) {
        self.dispatch(Action::ResetPagination);
    }
}
