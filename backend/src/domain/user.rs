//! User records.
//!
//! A user is a store-assigned identifier and an optional display name. The
//! name is stored in a `VARCHAR(200)` column; longer values are rejected by
//! the store rather than here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted user.
///
/// Serialises as `{"id": 1, "name": "Ada"}`; a missing name serialises as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned primary key.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name as submitted.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
}

/// Values required to insert a user. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: Option<String>,
}

impl NewUser {
    /// Build an insert payload from an optional name.
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Pair the payload with the identifier the store assigned.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
        }
    }
}
