//! High-level business logic on top of the repository traits.
//!
//! These functions are generic over the repository implementation and are
//! the recommended entry points for application code (HTTP handlers, tests).
//! They own cross-cutting concerns such as password hashing and owner
//! validation so the storage backends stay thin.

use crate::api::{Item, ItemId, NewItem, NewUser, User, UserId};
use crate::db::password::hash_password;
use crate::db::repository::{FullRepository, RepositoryResult};

/// Check that the backing store is reachable.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Register a new user.
///
/// The plaintext password is hashed before it reaches the repository; the
/// repository enforces email uniqueness.
///
/// # Returns
/// * `Ok(User)` - The stored user
/// * `Err(RepositoryError::Conflict)` - If the email is already registered
pub async fn register_user<R: FullRepository + ?Sized>(
    repo: &R,
    email: &str,
    password: &str,
) -> RepositoryResult<User> {
    let user = NewUser::new(email, hash_password(password));
    repo.create_user(user).await
}

/// Fetch a user by id.
pub async fn get_user<R: FullRepository + ?Sized>(repo: &R, id: UserId) -> RepositoryResult<User> {
    repo.get_user(id).await
}

/// Fetch a user together with the items it owns.
pub async fn get_user_with_items<R: FullRepository + ?Sized>(
    repo: &R,
    id: UserId,
) -> RepositoryResult<(User, Vec<Item>)> {
    let user = repo.get_user(id).await?;
    let items = repo.list_items_for_owner(id).await?;
    Ok((user, items))
}

/// Look up a user by email.
pub async fn find_user_by_email<R: FullRepository + ?Sized>(
    repo: &R,
    email: &str,
) -> RepositoryResult<Option<User>> {
    repo.find_user_by_email(email).await
}

/// List all users.
pub async fn list_users<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<User>> {
    repo.list_users().await
}

/// Create an item, optionally owned by a user.
///
/// The repository enforces that a set owner references an existing user.
pub async fn create_item<R: FullRepository + ?Sized>(
    repo: &R,
    item: NewItem,
) -> RepositoryResult<Item> {
    repo.create_item(item).await
}

/// Create an item owned by the given user.
///
/// The owner is looked up first so a missing user surfaces as `NotFound`
/// rather than a validation failure.
pub async fn create_item_for_owner<R: FullRepository + ?Sized>(
    repo: &R,
    owner: UserId,
    title: &str,
    description: &str,
) -> RepositoryResult<Item> {
    repo.get_user(owner).await?;
    repo.create_item(NewItem::new(title, description).with_owner(owner))
        .await
}

/// Fetch an item by id.
pub async fn get_item<R: FullRepository + ?Sized>(repo: &R, id: ItemId) -> RepositoryResult<Item> {
    repo.get_item(id).await
}

/// List all items owned by a user.
pub async fn list_items_for_owner<R: FullRepository + ?Sized>(
    repo: &R,
    owner: UserId,
) -> RepositoryResult<Vec<Item>> {
    repo.list_items_for_owner(owner).await
}
