//! User repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{NewUser, User, UserId};

/// Repository trait for user operations.
///
/// Implementations must enforce email uniqueness: inserting a user whose
/// email already exists yields `RepositoryError::Conflict`.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row with its assigned id.
    ///
    /// # Returns
    /// * `Ok(User)` - The inserted user
    /// * `Err(RepositoryError::Conflict)` - If the email is already taken
    async fn create_user(&self, user: NewUser) -> RepositoryResult<User>;

    /// Fetch a user by id.
    ///
    /// # Returns
    /// * `Ok(User)` - The user
    /// * `Err(RepositoryError::NotFound)` - If no user has this id
    async fn get_user(&self, id: UserId) -> RepositoryResult<User>;

    /// Look up a user by email.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - If a user with this email exists
    /// * `Ok(None)` - Otherwise
    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    /// List all users ordered by id.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;

    /// Check whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
