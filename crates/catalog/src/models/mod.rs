mod book;
mod genre;
mod id;
mod input;
mod status;

pub use self::book::Book;
pub use self::genre::{DEFAULT_GENRE, SOURCE_GENRES, normalize_genre};
pub use self::id::{BookId, TEMPORARY_PREFIX};
pub use self::input::{BookInput, BookPatch};
pub use self::status::Status;

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace(['-', '_', ' '], "")
}
