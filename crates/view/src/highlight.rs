use regex::RegexBuilder;

/// A run of text, either outside or inside a search match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Split `text` around every case-insensitive occurrence of `term`.
///
/// The term is matched literally (after trimming). A blank term yields the
/// whole text as a single plain segment.
///
/// ```
/// use folio_view::{Segment, highlight};
/// assert_eq!(
///     highlight("Harry Potter", "harry"),
///     [Segment::Match("Harry"), Segment::Plain(" Potter")],
/// );
/// ```
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    let term = term.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![Segment::Plain(text)];
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build() else {
        // An escaped literal always compiles unless it blows the size limit.
        return vec![Segment::Plain(text)];
    };
    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Plain(&text[last..found.start()]));
        }
        segments.push(Segment::Match(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }
    segments
}
