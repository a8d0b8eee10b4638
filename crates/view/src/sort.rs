use derive_more::Display;
use folio_catalog::models::Book;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column a collection can be ordered by.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Title,
    Author,
    Genre,
    PublishedYear,
    Rating,
    Status,
}
impl SortField {
    fn is_numeric(&self) -> bool {
        matches!(self, Self::PublishedYear | Self::Rating)
    }
}

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}
impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active ordering: defaults to title, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}
impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Selecting the active column flips the direction, selecting any other
    /// column sorts by it ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self { field, direction: self.direction.reversed() }
        } else {
            Self { field, direction: SortDirection::Asc }
        }
    }
}

/// Compare two books by `field`, ascending.
///
/// Numeric columns compare as integers; every other column compares
/// case-insensitively as text.
pub fn compare(a: &Book, b: &Book, field: SortField) -> Ordering {
    if field.is_numeric() {
        return numeric_key(a, field).cmp(&numeric_key(b, field));
    }
    text_key(a, field).cmp(&text_key(b, field))
}

fn numeric_key(book: &Book, field: SortField) -> i64 {
    match field {
        SortField::PublishedYear => i64::from(book.published_year),
        SortField::Rating => i64::from(book.rating),
        _ => 0,
    }
}

fn text_key(book: &Book, field: SortField) -> String {
    match field {
        SortField::Title => book.title.to_lowercase(),
        SortField::Author => book.author.to_lowercase(),
        SortField::Genre => book.genre.to_lowercase(),
        SortField::Status => book.status.as_str().to_lowercase(),
        SortField::PublishedYear | SortField::Rating => String::new(),
    }
}

/// Stable sort in place. Descending order reverses the comparison only, so
/// equal keys keep their input order in both directions.
pub fn sort_in_place(books: &mut [Book], spec: SortSpec) {
    books.sort_by(|a, b| {
        let ordering = compare(a, b, spec.field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Sorted copy of `books`.
pub fn sort(books: &[Book], spec: SortSpec) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sort_in_place(&mut sorted, spec);
    sorted
}
