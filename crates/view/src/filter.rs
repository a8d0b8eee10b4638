use folio_catalog::models::Book;

use crate::reducer::{GenreFilter, StatusFilter};

/// Whether `book` passes every predicate.
///
/// The search term is trimmed and matched case-insensitively against the
/// title and the author; a blank term matches everything.
pub fn matches(book: &Book, term: &str, genre: &GenreFilter, status: &StatusFilter) -> bool {
    let term = term.trim().to_lowercase();
    matches_normalized(book, &term, genre, status)
}

fn matches_normalized(book: &Book, term: &str, genre: &GenreFilter, status: &StatusFilter) -> bool {
    let matches_term =
        term.is_empty() || book.title.to_lowercase().contains(term) || book.author.to_lowercase().contains(term);
    matches_term && genre.matches(&book.genre) && status.matches(book.status)
}

/// Books passing every predicate, in input order.
pub fn filter(books: &[Book], term: &str, genre: &GenreFilter, status: &StatusFilter) -> Vec<Book> {
    let term = term.trim().to_lowercase();
    books.iter().filter(|book| matches_normalized(book, &term, genre, status)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_catalog::models::{BookId, Status};

    fn book(id: &str, title: &str, author: &str, genre: &str, status: Status) -> Book {
        Book {
            id: BookId::from(id),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year: 2000,
            rating: 3,
            status,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "Harry Potter", "J. K. Rowling", "Fantasy", Status::Available),
            book("2", "The Hobbit", "J. R. R. Tolkien", "Fantasy", Status::Issued),
            book("3", "Gone Girl", "Gillian Flynn", "Thriller", Status::Available),
            book("4", "Rebecca", "Daphne du Maurier", "Mystery", Status::Issued),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let books = vec![
            book("1", "Harry Potter", "x", "Fantasy", Status::Available),
            book("2", "The Hobbit", "y", "Fantasy", Status::Available),
        ];
        let found = filter(&books, "harry", &GenreFilter::All, &StatusFilter::All);
        assert_eq!(titles(&found), ["Harry Potter"]);
    }

    #[test]
    fn test_search_matches_author() {
        let found = filter(&shelf(), "  TOLKIEN ", &GenreFilter::All, &StatusFilter::All);
        assert_eq!(titles(&found), ["The Hobbit"]);
    }

    #[test]
    fn test_blank_term_matches_everything() {
        assert_eq!(filter(&shelf(), "   ", &GenreFilter::All, &StatusFilter::All).len(), 4);
    }

    #[test]
    fn test_predicates_are_a_conjunction() {
        let genre = GenreFilter::from("Fantasy");
        assert_eq!(titles(&filter(&shelf(), "", &genre, &StatusFilter::Issued)), ["The Hobbit"]);
        assert_eq!(titles(&filter(&shelf(), "j.", &genre, &StatusFilter::All)), ["Harry Potter", "The Hobbit"]);
        assert!(filter(&shelf(), "gone", &genre, &StatusFilter::All).is_empty());
    }

    #[test]
    fn test_genre_must_match_exactly() {
        assert!(filter(&shelf(), "", &GenreFilter::from("fantasy"), &StatusFilter::All).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let genre = GenreFilter::All;
        let status = StatusFilter::Available;
        let once = filter(&shelf(), "r", &genre, &status);
        let twice = filter(&once, "r", &genre, &status);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_single_book() {
        let books = shelf();
        assert!(matches(&books[2], "GILLIAN", &GenreFilter::from("Thriller"), &StatusFilter::Available));
        assert!(!matches(&books[2], "gillian", &GenreFilter::All, &StatusFilter::Issued));
    }
}
