//! Port for writing to the `users` table.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::StoreError;

/// Persistence for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert one user and return it with the store-assigned id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}
