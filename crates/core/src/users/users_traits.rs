//! User repository trait.

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User persistence.
///
/// Implementations handle the storage of owner records. The trait is
/// storage-agnostic; store-specific details live in concrete implementations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user. The implementation assigns the id when the
    /// input does not carry one.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Retrieves a user by id.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Lists all users.
    fn list(&self) -> Result<Vec<User>>;
}
