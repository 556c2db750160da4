//! Error raised by every repository adapter.

use super::define_port_error;

define_port_error! {
    /// Any failure reported by the relational store.
    ///
    /// The variants exist for diagnostics; callers treat both the same way.
    pub enum StoreError {
        /// A connection could not be checked out or was lost mid-statement.
        Connection { message: String } =>
            "store connection failed: {message}",
        /// The statement failed or its rows could not be decoded.
        Query { message: String } =>
            "store query failed: {message}",
    }
}
