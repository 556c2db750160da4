//! Port for the `books` table.
//!
//! Each operation maps to exactly one statement. There is no update.

use async_trait::async_trait;

use crate::domain::{Book, NewBook};

use super::StoreError;

/// Persistence for book records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert one book and return it with the store-assigned id.
    async fn create(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Return every stored book in storage order.
    ///
    /// An empty table yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Delete the book with `id`.
    ///
    /// Deleting an id that does not exist succeeds; callers cannot tell the
    /// two outcomes apart.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}
