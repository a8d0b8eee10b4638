//! View state and its transitions.
//!
//! [`reduce()`] is a pure, total function: every action maps the state to a
//! new state, unknown actions leave it untouched. The only cross-field rule is
//! that changing the search term or either filter sends the user back to the
//! first page.

use derive_more::Display;
use folio_catalog::error::ErrorKind;
use folio_catalog::models::{Book, Status};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Label used for "no restriction" in both filters.
pub const ALL: &str = "All";

/// How the collection is laid out.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    #[display("table")]
    Table,
    #[display("grid")]
    Grid,
}

/// Genre restriction, either [`ALL`] or one exact genre name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}
impl GenreFilter {
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == genre,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(genre) => genre,
        }
    }
}
impl From<String> for GenreFilter {
    fn from(value: String) -> Self {
        if value == ALL { Self::All } else { Self::Only(value) }
    }
}
impl From<&str> for GenreFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        match filter {
            GenreFilter::All => ALL.to_string(),
            GenreFilter::Only(genre) => genre,
        }
    }
}

/// Status restriction.
///
/// Parsed leniently from [`ALL`] or any spelling [`Status`] accepts, so
/// `"issued"` and `" Issued "` both select [`StatusFilter::Issued`].
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Issued,
}
impl StatusFilter {
    /// The status this filter requires, if any.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::All => None,
            Self::Available => Some(Status::Available),
            Self::Issued => Some(Status::Issued),
        }
    }

    pub fn matches(&self, status: Status) -> bool {
        self.status().is_none_or(|wanted| wanted == status)
    }

    pub fn as_str(&self) -> &'static str {
        self.status().map_or(ALL, |status| status.as_str())
    }
}
impl FromStr for StatusFilter {
    type Err = folio_catalog::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse::<Status>().map(Self::from)
    }
}
impl TryFrom<String> for StatusFilter {
    type Error = ErrorKind;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|err: folio_catalog::error::Error| (*err).clone())
    }
}
impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}
impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        match status {
            Status::Available => Self::Available,
            Status::Issued => Self::Issued,
        }
    }
}

/// What the editor is open for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Editing {
    /// Editor closed.
    #[default]
    Closed,
    /// Editor open for a record that does not exist yet.
    New,
    /// Editor open for an existing record.
    Existing(Book),
}
impl Editing {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: ViewMode,
    /// 1-based, never zero.
    pub page: usize,
    pub search_term: String,
    pub genre_filter: GenreFilter,
    pub status_filter: StatusFilter,
    pub editing: Editing,
    /// Record awaiting delete confirmation.
    pub confirm: Option<Book>,
}
impl Default for ViewState {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            page: 1,
            search_term: String::new(),
            genre_filter: GenreFilter::default(),
            status_filter: StatusFilter::default(),
            editing: Editing::default(),
            confirm: None,
        }
    }
}
impl ViewState {
    /// Whether either filter restricts the collection (the search term does
    /// not count).
    pub fn has_active_filters(&self) -> bool {
        self.genre_filter != GenreFilter::All || self.status_filter != StatusFilter::All
    }
}

/// Every transition the view state supports.
///
/// Serializes as `{"type": "SET_PAGE", "payload": 3}`. Any unrecognized
/// `type` deserializes to [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetView(ViewMode),
    SetPage(usize),
    SetSearchTerm(String),
    SetGenreFilter(GenreFilter),
    SetStatusFilter(StatusFilter),
    SetEditing(Editing),
    OpenAddBook,
    CloseEditor,
    OpenDeleteConfirm(Book),
    CloseDeleteConfirm,
    ClearFilters,
    ResetPagination,
    #[serde(other)]
    Unknown,
}

/// Apply `action` to `state`.
pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::SetView(view) => ViewState { view, ..state },
        Action::SetPage(page) => ViewState { page: page.max(1), ..state },
        Action::SetSearchTerm(search_term) => ViewState { search_term, page: 1, ..state },
        Action::SetGenreFilter(genre_filter) => ViewState { genre_filter, page: 1, ..state },
        Action::SetStatusFilter(status_filter) => ViewState { status_filter, page: 1, ..state },
        Action::SetEditing(editing) => ViewState { editing, ..state },
        Action::OpenAddBook => ViewState { editing: Editing::New, ..state },
        Action::CloseEditor => ViewState { editing: Editing::Closed, ..state },
        Action::OpenDeleteConfirm(book) => ViewState { confirm: Some(book), ..state },
        Action::CloseDeleteConfirm => ViewState { confirm: None, ..state },
        Action::ClearFilters => ViewState {
            search_term: String::new(),
            genre_filter: GenreFilter::All,
            status_filter: StatusFilter::All,
            page: 1,
            ..state
        },
        Action::ResetPagination => ViewState { page: 1, ..state },
        Action::Unknown => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_catalog::models::BookId;
    use rstest::rstest;

    fn on_page(page: usize) -> ViewState {
        ViewState { page, ..Default::default() }
    }

    fn book() -> Book {
        Book {
            id: BookId::from("1"),
            title: "Harry Potter".to_string(),
            author: "J. K. Rowling".to_string(),
            genre: "Fantasy".to_string(),
            published_year: 1997,
            rating: 5,
            status: Status::Available,
        }
    }

    #[test]
    fn test_setting_genre_filter_resets_page() {
        let state = reduce(on_page(3), Action::SetGenreFilter("Fantasy".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.genre_filter, GenreFilter::Only("Fantasy".to_string()));
    }

    #[rstest]
    #[case(Action::SetSearchTerm("harry".to_string()))]
    #[case(Action::SetGenreFilter(GenreFilter::All))]
    #[case(Action::SetStatusFilter(StatusFilter::Issued))]
    #[case(Action::ClearFilters)]
    #[case(Action::ResetPagination)]
    fn test_page_resets(#[case] action: Action) {
        assert_eq!(reduce(on_page(4), action).page, 1);
    }

    #[rstest]
    #[case(Action::SetView(ViewMode::Grid))]
    #[case(Action::SetEditing(Editing::New))]
    #[case(Action::OpenAddBook)]
    #[case(Action::CloseEditor)]
    #[case(Action::OpenDeleteConfirm(book()))]
    #[case(Action::CloseDeleteConfirm)]
    fn test_page_preserved(#[case] action: Action) {
        assert_eq!(reduce(on_page(4), action).page, 4);
    }

    #[test]
    fn test_set_page_never_zero() {
        assert_eq!(reduce(on_page(2), Action::SetPage(0)).page, 1);
        assert_eq!(reduce(on_page(2), Action::SetPage(7)).page, 7);
    }

    #[test]
    fn test_clear_filters() {
        let state = ViewState {
            page: 5,
            search_term: "hobbit".to_string(),
            genre_filter: "Fantasy".into(),
            status_filter: StatusFilter::Issued,
            view: ViewMode::Grid,
            ..Default::default()
        };
        let state = reduce(state, Action::ClearFilters);
        assert_eq!(state.search_term, "");
        assert_eq!(state.genre_filter, GenreFilter::All);
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.page, 1);
        // Clearing filters does not touch the layout.
        assert_eq!(state.view, ViewMode::Grid);
    }

    #[test]
    fn test_unknown_is_identity() {
        let state = ViewState { page: 3, search_term: "x".to_string(), ..Default::default() };
        assert_eq!(reduce(state.clone(), Action::Unknown), state);
    }

    #[test]
    fn test_editor_and_confirm_targets() {
        let state = reduce(ViewState::default(), Action::OpenAddBook);
        assert_eq!(state.editing, Editing::New);
        let state = reduce(state, Action::SetEditing(Editing::Existing(book())));
        assert!(matches!(&state.editing, Editing::Existing(b) if b.title == "Harry Potter"));
        let state = reduce(state, Action::CloseEditor);
        assert!(!state.editing.is_open());

        let state = reduce(state, Action::OpenDeleteConfirm(book()));
        assert_eq!(state.confirm.as_ref().map(|b| b.id.as_str()), Some("1"));
        assert_eq!(reduce(state, Action::CloseDeleteConfirm).confirm, None);
    }

    #[test]
    fn test_active_filters() {
        assert!(!ViewState::default().has_active_filters());
        let state = reduce(ViewState::default(), Action::SetSearchTerm("x".to_string()));
        assert!(!state.has_active_filters());
        let state = reduce(state, Action::SetStatusFilter(StatusFilter::Available));
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action = serde_json::from_str(r#"{"type": "SET_PAGE", "payload": 3}"#).unwrap();
        assert_eq!(action, Action::SetPage(3));
        let action: Action = serde_json::from_str(r#"{"type": "SET_GENRE_FILTER", "payload": "All"}"#).unwrap();
        assert_eq!(action, Action::SetGenreFilter(GenreFilter::All));
        let action: Action = serde_json::from_str(r#"{"type": "SET_VIEW", "payload": "grid"}"#).unwrap();
        assert_eq!(action, Action::SetView(ViewMode::Grid));
        let action: Action = serde_json::from_str(r#"{"type": "CLEAR_FILTERS"}"#).unwrap();
        assert_eq!(action, Action::ClearFilters);
    }

    #[test]
    fn test_unrecognized_action_type() {
        let action: Action = serde_json::from_str(r#"{"type": "TOGGLE_THEME"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(Status::Issued));
        assert!(StatusFilter::Issued.matches(Status::Issued));
        assert!(!StatusFilter::Available.matches(Status::Issued));
        assert_eq!(StatusFilter::from(Status::Issued), StatusFilter::Issued);
    }

    #[rstest]
    #[case("All", StatusFilter::All)]
    #[case(" all ", StatusFilter::All)]
    #[case("Available", StatusFilter::Available)]
    #[case("issued", StatusFilter::Issued)]
    #[case(" ISSUED ", StatusFilter::Issued)]
    fn test_status_filter_parse(#[case] input: &str, #[case] expected: StatusFilter) {
        assert_eq!(input.parse::<StatusFilter>().unwrap(), expected);
    }

    #[test]
    fn test_status_filter_parse_unknown() {
        let err = "Lost".parse::<StatusFilter>().unwrap_err();
        assert_eq!(*err, ErrorKind::ParseError { field: "status", value: "Lost".to_string() });
    }

    #[test]
    fn test_status_filter_payload_is_lenient() {
        let action: Action = serde_json::from_str(r#"{"type": "SET_STATUS_FILTER", "payload": "issued"}"#).unwrap();
        assert_eq!(action, Action::SetStatusFilter(StatusFilter::Issued));
        let action: Action = serde_json::from_str(r#"{"type": "SET_STATUS_FILTER", "payload": "All"}"#).unwrap();
        assert_eq!(action, Action::SetStatusFilter(StatusFilter::All));
        assert_eq!(serde_json::to_string(&StatusFilter::Issued).unwrap(), r#""Issued""#);

        let err = serde_json::from_str::<Action>(r#"{"type": "SET_STATUS_FILTER", "payload": "Lost"}"#).unwrap_err();
        assert!(err.to_string().contains("found value: Lost"));
    }
}
