//! Repository ports for the `users` and `books` tables.
//!
//! Handlers depend on these traits only. The Diesel adapters in
//! `outbound::persistence` implement them for PostgreSQL; the `test-support`
//! feature provides in-memory implementations.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod store_error;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::BookRepository;
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
