//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BookRepository, StoreError};
use crate::domain::{Book, NewBook};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, NewBookRow};
use super::pool::DbPool;
use super::schema::books;

/// Diesel-backed implementation of the `BookRepository` port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a stored row, rejecting rows with missing columns.
///
/// The table allows `NULL` titles and authors, but a [`Book`] does not.
fn row_to_book(row: BookRow) -> Result<Book, StoreError> {
    let BookRow { id, title, author } = row;
    match (title, author) {
        (Some(title), Some(author)) => Ok(Book { id, title, author }),
        _ => Err(StoreError::query(format!(
            "book {id} has a NULL title or author"
        ))),
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewBookRow {
            title: &book.title,
            author: &book.author,
        };

        let id: i32 = diesel::insert_into(books::table)
            .values(&row)
            .returning(books::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(id, "book inserted");
        Ok(book.into_book(id))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = books::table
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_book).collect()
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(books::table.filter(books::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(id, removed, "book delete executed");
        Ok(())
    }
}
