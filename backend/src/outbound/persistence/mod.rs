//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and table definitions stay private to this module.
//! Connections come from a lazily built `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
//!
//! # async fn demo() {
//! let pool = DbPool::new(PoolConfig::new("host=localhost dbname=library"));
//! let books = DieselBookRepository::new(pool);
//! # }
//! ```

mod bootstrap;
mod diesel_book_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use bootstrap::ensure_schema;
pub use diesel_book_repository::DieselBookRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
