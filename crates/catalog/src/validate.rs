//! Advisory record validation.
//!
//! Violations are reported, never enforced: the store fills defaults and keeps
//! whatever it is given. Callers decide whether to surface them.

use derive_more::Display;
use std::ops::RangeInclusive;

use crate::current_year;
use crate::models::Book;

pub const TITLE_LENGTH: RangeInclusive<usize> = 2..=100;
pub const AUTHOR_LENGTH: RangeInclusive<usize> = 2..=50;
pub const MIN_PUBLISHED_YEAR: i32 = 1000;
pub const MAX_RATING: u8 = 5;

/// A single constraint a record does not meet.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Violation {
    #[display("title must be between 2 and 100 characters (found {_0})")]
    TitleLength(usize),
    #[display("author must be between 2 and 50 characters (found {_0})")]
    AuthorLength(usize),
    #[display("genre is required")]
    MissingGenre,
    #[display("published year must be between 1000 and {max} (found {year})")]
    PublishedYear { year: i32, max: i32 },
    #[display("rating must be at most 5 (found {_0})")]
    Rating(u8),
}

/// Check a record against the catalog constraints.
pub fn validate(book: &Book) -> Vec<Violation> {
    let mut violations = Vec::new();
    let title = book.title.trim().chars().count();
    if !TITLE_LENGTH.contains(&title) {
        violations.push(Violation::TitleLength(title));
    }
    let author = book.author.trim().chars().count();
    if !AUTHOR_LENGTH.contains(&author) {
        violations.push(Violation::AuthorLength(author));
    }
    if book.genre.trim().is_empty() {
        violations.push(Violation::MissingGenre);
    }
    let max = current_year();
    if !(MIN_PUBLISHED_YEAR..=max).contains(&book.published_year) {
        violations.push(Violation::PublishedYear { year: book.published_year, max });
    }
    if book.rating > MAX_RATING {
        violations.push(Violation::Rating(book.rating));
    }
    violations
}
