use folio_catalog::models::{Book, BookId, BookInput, BookPatch};
use serde::{Deserialize, Serialize};

/// What the editor submits: field values, plus the identifier when an
/// existing record is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    #[serde(flatten)]
    pub fields: BookPatch,
}
impl Draft {
    pub fn new(fields: BookPatch) -> Self {
        Self { id: None, fields }
    }

    pub fn title(&self) -> &str {
        self.fields.title.as_deref().unwrap_or_default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
impl From<Book> for Draft {
    fn from(book: Book) -> Self {
        Self { id: Some(book.id.clone()), fields: BookPatch::from(book) }
    }
}
impl From<BookInput> for Draft {
    fn from(input: BookInput) -> Self {
        Self::new(BookPatch {
            title: input.title,
            author: input.author,
            genre: input.genre,
            published_year: input.published_year,
            rating: input.rating,
            status: input.status,
        })
    }
}
