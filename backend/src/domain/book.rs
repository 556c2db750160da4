//! Book records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted book.
///
/// # Examples
/// ```
/// use bookshelf::domain::NewBook;
///
/// let book = NewBook::new("Dune", "Herbert").into_book(1);
/// assert_eq!(
///     serde_json::to_string(&book).unwrap(),
///     r#"{"id":1,"title":"Dune","author":"Herbert"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned primary key.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
}

/// Values required to insert a book. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

impl NewBook {
    /// Build an insert payload.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Pair the payload with the identifier the store assigned.
    ///
    /// The insert only returns the id, so title and author echo the
    /// submitted values.
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
        }
    }
}
