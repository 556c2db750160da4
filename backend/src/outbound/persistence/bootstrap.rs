//! Idempotent schema creation run once at startup.

use diesel::sql_query;
use diesel_async::RunQueryDsl;
use tracing::{error, info};

use crate::domain::ports::StoreError;

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

pub(crate) const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name VARCHAR(200))";

pub(crate) const CREATE_BOOKS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS books (id SERIAL PRIMARY KEY, title TEXT, author TEXT)";

const STATEMENTS: [(&str, &str); 2] = [("users", CREATE_USERS_TABLE), ("books", CREATE_BOOKS_TABLE)];

/// Create the `users` and `books` tables if they are missing.
///
/// Each statement runs independently. Failures are logged and returned;
/// the caller decides whether to continue, and the server does.
pub async fn ensure_schema(pool: &DbPool) -> Vec<StoreError> {
    let mut failures = Vec::new();
    for (table, statement) in STATEMENTS {
        match run_statement(pool, statement).await {
            Ok(()) => info!(table, "table ensured"),
            Err(err) => {
                error!(table, error = %err, "failed to ensure table");
                failures.push(err);
            }
        }
    }
    failures
}

async fn run_statement(pool: &DbPool, statement: &'static str) -> Result<(), StoreError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    sql_query(statement)
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
    Ok(())
}
