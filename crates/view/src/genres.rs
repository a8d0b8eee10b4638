use folio_catalog::models::{Book, normalize_genre};
use std::collections::BTreeSet;

use crate::reducer::ALL;

/// Genres offered by the genre filter even when no book carries them.
pub const BASE_GENRES: [&str; 9] =
    ["Fiction", "Non-Fiction", "Sci-Fi", "Romance", "Fantasy", "Mystery", "Thriller", "Biography", "History"];

/// Filter options for `books`: [`ALL`] followed by the sorted union of
/// [`BASE_GENRES`] and every (normalized, non-blank) genre in the collection.
pub fn available(books: &[Book]) -> Vec<String> {
    let mut genres: BTreeSet<String> = BASE_GENRES.iter().map(ToString::to_string).collect();
    genres.extend(books.iter().map(|book| normalize_genre(&book.genre)).filter(|genre| !genre.is_empty()));
    std::iter::once(ALL.to_string()).chain(genres).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_catalog::models::{BookId, Status};

    fn with_genre(genre: &str) -> Book {
        Book {
            id: BookId::from("1"),
            title: "t".to_string(),
            author: "a".to_string(),
            genre: genre.to_string(),
            published_year: 2000,
            rating: 0,
            status: Status::Available,
        }
    }

    #[test]
    fn test_empty_collection_lists_base_genres() {
        let genres = available(&[]);
        assert_eq!(genres[0], "All");
        assert_eq!(genres.len(), BASE_GENRES.len() + 1);
        let mut sorted = genres[1..].to_vec();
        sorted.sort();
        assert_eq!(sorted, genres[1..]);
    }

    #[test]
    fn test_collection_genres_are_normalized_and_deduplicated() {
        let books = [with_genre("cooking"), with_genre("COOKING"), with_genre("  "), with_genre("Fantasy")];
        let genres = available(&books);
        assert_eq!(genres.iter().filter(|g| *g == "Cooking").count(), 1);
        assert_eq!(genres.iter().filter(|g| *g == "Fantasy").count(), 1);
        assert!(!genres.iter().any(|g| g.trim().is_empty()));
        assert_eq!(genres.len(), BASE_GENRES.len() + 2);
    }
}
