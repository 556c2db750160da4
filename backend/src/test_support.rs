//! In-memory repository doubles shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature. Both
//! doubles assign sequential ids starting at 1, like a fresh `SERIAL`
//! column, and can be switched into a failing mode to exercise error paths.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{BookRepository, StoreError, UserRepository};
use crate::domain::{Book, NewBook, NewUser, User};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
    failure: Option<StoreError>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
            failure: None,
        }
    }
}

impl<T> Table<T> {
    fn check(&self) -> Result<(), StoreError> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> MutexGuard<'_, Table<T>> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Users kept in a vector.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        lock(&self.table).failure = Some(error);
    }

    /// Restore normal behaviour.
    pub fn clear_failure(&self) {
        lock(&self.table).failure = None;
    }

    /// Current rows in insertion order.
    pub fn snapshot(&self) -> Vec<User> {
        lock(&self.table).rows.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut table = lock(&self.table);
        table.check()?;
        let id = table.allocate_id();
        let user = user.into_user(id);
        table.rows.push(user.clone());
        Ok(user)
    }
}

/// Books kept in a vector.
///
/// # Examples
/// ```
/// use bookshelf::domain::NewBook;
/// use bookshelf::domain::ports::BookRepository;
/// use bookshelf::test_support::InMemoryBookRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryBookRepository::default();
/// let book = repo.create(NewBook::new("Dune", "Herbert")).await.unwrap();
/// assert_eq!(book.id, 1);
/// repo.delete(book.id).await.unwrap();
/// assert!(repo.list().await.unwrap().is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    table: Mutex<Table<Book>>,
}

impl InMemoryBookRepository {
    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        lock(&self.table).failure = Some(error);
    }

    /// Restore normal behaviour.
    pub fn clear_failure(&self) {
        lock(&self.table).failure = None;
    }

    /// Current rows in insertion order.
    pub fn snapshot(&self) -> Vec<Book> {
        lock(&self.table).rows.clone()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut table = lock(&self.table);
        table.check()?;
        let id = table.allocate_id();
        let book = book.into_book(id);
        table.rows.push(book.clone());
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let table = lock(&self.table);
        table.check()?;
        Ok(table.rows.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut table = lock(&self.table);
        table.check()?;
        table.rows.retain(|book| book.id != id);
        Ok(())
    }
}
