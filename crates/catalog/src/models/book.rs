use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{BookId, BookPatch, Status};

/// A single catalog entry.
///
/// Serializes with the field names used on the wire (`_id`, `publishedYear`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    /// Star rating, `0` meaning unrated.
    pub rating: u8,
    pub status: Status,
}
impl Book {
    /// Merge the fields present in `patch` into this record. The identifier
    /// never changes.
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(author) = &patch.author {
            self.author.clone_from(author);
        }
        if let Some(genre) = &patch.genre {
            self.genre = super::normalize_genre(genre);
        }
        if let Some(year) = patch.published_year {
            self.published_year = year;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Copy of this record with `patch` merged in.
    pub fn patched(&self, patch: &BookPatch) -> Self {
        let mut book = self.clone();
        book.apply(patch);
        book
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "\"{}\" by {}", self.title, self.author)
    }
}
