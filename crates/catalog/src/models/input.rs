use serde::{Deserialize, Serialize};

use super::{Book, BookId, DEFAULT_GENRE, Status, normalize_genre};
use crate::current_year;

/// Payload for creating a book. Every field is optional; missing (or blank)
/// fields are filled with defaults when the record is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
impl BookInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: Some(title.into()), author: Some(author.into()), ..Default::default() }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_published_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Build the stored record under `id`, filling defaults: genre
    /// [`DEFAULT_GENRE`], the current year, rating `0` and
    /// [`Status::Available`]. A zero year or blank genre counts as missing.
    pub fn into_book(self, id: BookId) -> Book {
        let genre = self.genre.map(normalize_genre).filter(|g| !g.is_empty());
        Book {
            id,
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            genre: genre.unwrap_or_else(|| DEFAULT_GENRE.to_string()),
            published_year: self.published_year.filter(|y| *y != 0).unwrap_or_else(current_year),
            rating: self.rating.unwrap_or(0),
            status: self.status.unwrap_or_default(),
        }
    }
}

/// Partial update for an existing book. Present fields replace the stored
/// values; the identifier cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
impl BookPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A full record used as a patch replaces every field but the identifier.
impl From<Book> for BookPatch {
    fn from(book: Book) -> Self {
        Self {
            title: Some(book.title),
            author: Some(book.author),
            genre: Some(book.genre),
            published_year: Some(book.published_year),
            rating: Some(book.rating),
            status: Some(book.status),
        }
    }
}

impl From<BookPatch> for BookInput {
    fn from(patch: BookPatch) -> Self {
        Self {
            title: patch.title,
            author: patch.author,
            genre: patch.genre,
            published_year: patch.published_year,
            rating: patch.rating,
            status: patch.status,
        }
    }
}
