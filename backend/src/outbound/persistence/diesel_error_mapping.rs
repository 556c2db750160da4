//! Translation of pool and Diesel failures into [`StoreError`].
//!
//! The store's own message is kept as detail. HTTP adapters log it and
//! answer clients with a generic message.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map a pool checkout failure to a connection error.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    let PoolError::Checkout { message } = error;
    StoreError::connection(message)
}

/// Map a Diesel failure to a store error.
///
/// Closed connections are reported as connection errors; everything else,
/// including constraint violations and `NotFound`, is a query error.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StoreError::connection(info.message())
        }
        other => StoreError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_checkout_becomes_connection_error() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, StoreError::connection("timed out"));
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        let err = map_diesel_error(DieselError::NotFound);
        assert!(matches!(err, StoreError::Query { .. }));
    }

    #[rstest]
    fn closed_connection_becomes_connection_error() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert_eq!(err, StoreError::connection("server closed the connection"));
    }

    #[rstest]
    fn constraint_violation_keeps_store_message() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_owned()),
        ));
        assert_eq!(err, StoreError::query("duplicate key value"));
    }
}
