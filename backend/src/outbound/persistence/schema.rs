//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the statements in [`super::bootstrap`]. Every non-key
//! column is nullable because the tables are created without `NOT NULL`
//! constraints.

diesel::table! {
    /// Registered users.
    users (id) {
        /// `SERIAL` primary key.
        id -> Int4,
        /// Display name.
        #[max_length = 200]
        name -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Catalogued books.
    books (id) {
        /// `SERIAL` primary key.
        id -> Int4,
        title -> Nullable<Text>,
        author -> Nullable<Text>,
    }
}
