//! Item repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Item, ItemId, NewItem, UserId};

/// Repository trait for item operations.
///
/// Implementations must enforce the ownership invariant: a set `owner_id`
/// must reference an existing user, otherwise the insert fails with
/// `RepositoryError::ValidationError`. A `None` owner is permitted.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return the stored row with its assigned id.
    ///
    /// # Returns
    /// * `Ok(Item)` - The inserted item
    /// * `Err(RepositoryError::ValidationError)` - If `owner_id` references
    ///   no existing user
    async fn create_item(&self, item: NewItem) -> RepositoryResult<Item>;

    /// Fetch an item by id.
    ///
    /// # Returns
    /// * `Ok(Item)` - The item
    /// * `Err(RepositoryError::NotFound)` - If no item has this id
    async fn get_item(&self, id: ItemId) -> RepositoryResult<Item>;

    /// List all items owned by the given user, ordered by id.
    async fn list_items_for_owner(&self, owner: UserId) -> RepositoryResult<Vec<Item>>;
}
