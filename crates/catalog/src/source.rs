//! Mapping of upstream "list items" records onto books.
//!
//! The upstream endpoint knows nothing about books; its people records are
//! used as placeholder data. Every field is derived deterministically from the
//! record except the rating, which is rolled at random.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Book, BookId, SOURCE_GENRES, Status};

/// Base year for source-derived books; the record id picks one of the ten
/// years following it.
const SOURCE_BASE_YEAR: i32 = 2020;

/// A record as returned by the upstream list endpoint. Unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
impl SourceRecord {
    /// Map onto a book with a random 1-5 rating.
    pub fn to_book(&self) -> Book {
        self.to_book_with_rating(rand::rng().random_range(1..=5))
    }

    /// Map onto a book with a fixed rating.
    pub fn to_book_with_rating(&self, rating: u8) -> Book {
        // Both remainders are tiny, the casts cannot truncate.
        let genre = SOURCE_GENRES[(self.id % SOURCE_GENRES.len() as u64) as usize];
        Book {
            id: BookId::from(self.id),
            title: format!("{} {}", self.first_name, self.last_name),
            author: self.email.clone(),
            genre: genre.to_string(),
            published_year: SOURCE_BASE_YEAR + (self.id % 10) as i32,
            rating,
            status: if self.id % 2 == 0 { Status::Available } else { Status::Issued },
        }
    }
}
