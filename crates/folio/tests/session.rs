use folio::{Action, BookId, BookInput, BookPatch, Config, Draft, Notice, Session, SortField, Status, ViewMode};
use folio_config::{LatencyConfig, SourceConfig};
use folio_source::MockSource;
use folio_store::api::{FlakyApi, LocalApi};
use folio_view::Editing;
use std::sync::Arc;

fn config() -> Config {
    Config {
        source: SourceConfig { per_page: 50, ..Default::default() },
        latency: LatencyConfig { initial_load_ms: 500, mutation_ms: 300 },
        ..Default::default()
    }
}

async fn session(people: u64) -> Session {
    let session = Session::with_source(Arc::new(MockSource::with_people(people)), &config());
    session.load().await.unwrap();
    session
}

async fn flaky_session(people: u64) -> (Arc<FlakyApi<LocalApi>>, Session) {
    let local = LocalApi::from_config(Arc::new(MockSource::with_people(people)), &config());
    let api = Arc::new(FlakyApi::new(local));
    let session = Session::new(api.clone(), &config());
    session.load().await.unwrap();
    (api, session)
}

#[tokio::test(start_paused = true)]
async fn load_retries_transient_source_failures() {
    let source = Arc::new(MockSource::with_people(12));
    source.fail_next(2);
    let session = Session::with_source(source.clone(), &config());

    let books = session.load().await.unwrap();
    assert_eq!(books.len(), 12);
    assert_eq!(source.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn load_gives_up_after_max_attempts() {
    let source = Arc::new(MockSource::with_people(12));
    source.fail_next(5);
    let session = Session::with_source(source.clone(), &config());

    let err = session.load().await.unwrap_err();
    assert_eq!(*err, folio::error::ErrorKind::Load);
    assert_eq!(source.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn page_follows_view_state() {
    let mut session = session(25).await;

    let page = session.page().await.unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.data.len(), 10);

    session.dispatch(Action::SetPage(4));
    let page = session.page().await.unwrap();
    assert_eq!(page.page, 3);
    assert_eq!(page.data.len(), 5);

    session.dispatch(Action::SetView(ViewMode::Grid));
    assert_eq!(session.page().await.unwrap().per_page, 9);

    session.dispatch(Action::SetStatusFilter(Status::Issued.into()));
    assert_eq!(session.state().page, 1);
    let page = session.page().await.unwrap();
    assert!(page.data.iter().all(|book| book.status == Status::Issued));
}

#[tokio::test(start_paused = true)]
async fn sorting_by_year_descending() {
    let mut session = session(3).await;
    session.toggle_sort(SortField::PublishedYear);
    session.toggle_sort(SortField::PublishedYear);

    let years: Vec<_> = session.page().await.unwrap().data.iter().map(|book| book.published_year).collect();
    assert_eq!(years, [2023, 2022, 2021]);
}

#[tokio::test(start_paused = true)]
async fn saving_new_draft_adds_book_and_closes_editor() {
    let mut session = session(3).await;
    session.view().open_add_book();

    let notice = session.save(Draft::from(BookInput::new("Dune", "Frank Herbert").with_genre("sci-fi"))).await;
    assert_eq!(notice, Notice::Success("\"Dune\" added successfully!".to_string()));
    assert_eq!(session.state().editing, Editing::Closed);

    let books = session.cache().books().await.unwrap();
    assert_eq!(books.len(), 4);
    assert_eq!(books[3].id, BookId::from("1000"));
    assert_eq!(books[3].genre, "Sci-fi");
    assert!(session.genres().await.unwrap().contains(&"Sci-fi".to_string()));
}

#[tokio::test(start_paused = true)]
async fn saving_existing_draft_updates_book() {
    let mut session = session(3).await;
    let mut book = session.cache().get(&BookId::from("2")).await.unwrap();
    session.view().edit(book.clone());
    book.title = "Renamed".to_string();

    let notice = session.save(Draft::from(book)).await;
    assert_eq!(notice.message(), "\"Renamed\" updated successfully!");
    assert!(!session.state().editing.is_open());
    assert_eq!(session.cache().get(&BookId::from("2")).await.unwrap().title, "Renamed");
}

#[tokio::test(start_paused = true)]
async fn failed_save_keeps_editor_open() {
    let (api, mut session) = flaky_session(3).await;
    let before = session.cache().visible().await;
    session.view().open_add_book();
    api.fail_next(1);

    let notice = session.save(Draft::from(BookInput::new("Dune", "Frank Herbert"))).await;
    assert_eq!(notice, Notice::Error("Failed to save book: backend error: failed to create book".to_string()));
    assert_eq!(session.state().editing, Editing::New);
    assert_eq!(session.cache().visible().await, before);
}

#[tokio::test(start_paused = true)]
async fn saving_unknown_record_reports_not_found() {
    let mut session = session(3).await;
    let draft = Draft { id: Some(BookId::from("404")), fields: BookPatch::default() };

    let notice = session.save(draft).await;
    assert_eq!(notice.message(), "Failed to save book: Book with ID 404 not found");
}

#[tokio::test(start_paused = true)]
async fn delete_flow() {
    let (api, mut session) = flaky_session(3).await;
    assert_eq!(session.delete_confirmed().await, None);

    let book = session.cache().get(&BookId::from("1")).await.unwrap();
    session.view().open_delete_confirm(book.clone());
    api.fail_next(1);
    let notice = session.delete_confirmed().await.unwrap();
    assert!(!notice.is_success());
    assert!(notice.message().starts_with(&format!("Failed to delete \"{}\"", book.title)));
    assert_eq!(session.state().confirm.as_ref(), Some(&book));

    let notice = session.delete_confirmed().await.unwrap();
    assert_eq!(notice, Notice::deleted(&book.title));
    assert_eq!(session.state().confirm, None);
    assert_eq!(session.cache().books().await.unwrap().len(), 2);
}
