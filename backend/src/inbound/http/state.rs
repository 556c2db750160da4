//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BookRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub books: Arc<dyn BookRepository>,
}

impl HttpState {
    /// Construct state from the two repository ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshelf::inbound::http::state::HttpState;
    /// use bookshelf::test_support::{InMemoryBookRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(InMemoryBookRepository::default()),
    /// );
    /// let _books = state.books.clone();
    /// ```
    pub fn new(users: Arc<dyn UserRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { users, books }
    }
}
