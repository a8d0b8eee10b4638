use async_trait::async_trait;
use folio_catalog::models::{Book, BookId, BookInput, BookPatch, Status};
use folio_store::error::{ErrorKind, Result};
use folio_store::{BookApi, BookCache};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Serves a fixed collection and refuses every mutation after a delay.
struct ReadOnlyServer {
    books: Vec<Book>,
    fetches: AtomicUsize,
}

#[async_trait]
impl BookApi for ReadOnlyServer {
    fn name(&self) -> &str {
        "read-only"
    }

    async fn fetch_all(&self) -> Result<Vec<Book>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.books.clone())
    }

    async fn create(&self, _input: BookInput) -> Result<Book> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        exn::bail!(ErrorKind::Backend("read-only".to_string()))
    }

    async fn update(&self, id: &BookId, _patch: BookPatch) -> Result<Book> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        exn::bail!(ErrorKind::NotFound(id.clone()))
    }

    async fn remove(&self, id: &BookId) -> Result<BookId> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        exn::bail!(ErrorKind::NotFound(id.clone()))
    }
}

fn book(id: &str, title: &str) -> Book {
    Book {
        id: BookId::from(id),
        title: title.to_string(),
        author: "J.K. Rowling".to_string(),
        genre: "Fantasy".to_string(),
        published_year: 1997,
        rating: 5,
        status: Status::Available,
    }
}

fn server() -> Arc<ReadOnlyServer> {
    Arc::new(ReadOnlyServer {
        books: vec![book("1", "Harry Potter"), book("2", "The Hobbit")],
        fetches: AtomicUsize::new(0),
    })
}

#[tokio::test(start_paused = true)]
async fn create_grows_collection_then_rolls_back() {
    let server = server();
    let cache = BookCache::new(server.clone());
    let before = cache.books().await.unwrap();

    let (result, during) = tokio::join!(cache.create(BookInput::new("Dune", "Frank Herbert")), async {
        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.visible().await
    });

    assert_eq!(during.len(), before.len() + 1);
    assert!(during.last().is_some_and(|book| book.id.is_temporary()));
    assert!(result.is_err());
    assert_eq!(cache.visible().await, before);
    assert!(cache.is_stale().await);

    cache.books().await.unwrap();
    assert_eq!(server.fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn rejected_update_and_delete_restore_the_collection() {
    let cache = BookCache::new(server());
    let before = cache.books().await.unwrap();
    let id = BookId::from("1");

    let patch = BookPatch { status: Some(Status::Issued), ..Default::default() };
    let err = cache.update(&id, patch).await.unwrap_err();
    assert_eq!(*err, ErrorKind::NotFound(id.clone()));
    assert_eq!(cache.visible().await, before);

    assert!(cache.remove(&id).await.is_err());
    assert_eq!(cache.visible().await, before);
}

#[tokio::test(start_paused = true)]
async fn later_mutation_snapshots_earlier_optimistic_state() {
    let cache = BookCache::new(server());
    let before = cache.books().await.unwrap();

    // Each rollback restores what its own mutation saw, so the later one
    // reinstates the earlier optimistic removal until the next refetch.
    let (one, two) = (BookId::from("1"), BookId::from("2"));
    let (first, second) = tokio::join!(cache.remove(&one), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        cache.remove(&two).await
    });
    assert!(first.is_err() && second.is_err());
    let visible = cache.visible().await;
    assert_eq!(visible, [before[1].clone()]);

    assert_eq!(cache.books().await.unwrap(), before);
}
