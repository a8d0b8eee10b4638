/// Genre assigned to books that were created without one.
pub const DEFAULT_GENRE: &str = "Fiction";

/// Genres cycled through when mapping source records onto books, indexed by
/// `source id % 16`.
pub const SOURCE_GENRES: [&str; 16] = [
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Thriller",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Technology",
    "Health",
    "Travel",
    "Cooking",
    "Art",
];

/// Normalize free-form genre input to title-case words.
///
/// Words are split on single spaces; each word keeps its first character
/// upper-cased and the remainder lower-cased. Surrounding whitespace is
/// trimmed, so blank input normalizes to an empty string.
///
/// ```
/// use folio_catalog::models::normalize_genre;
/// assert_eq!(normalize_genre("  science FICTION "), "Science Fiction");
/// assert_eq!(normalize_genre("   "), "");
/// ```
pub fn normalize_genre(genre: impl AsRef<str>) -> String {
    genre.as_ref().trim().split(' ').map(title_case).collect::<Vec<_>>().join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
