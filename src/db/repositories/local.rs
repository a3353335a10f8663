//! In-memory repository implementation for unit testing and local development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::{Item, ItemId, NewItem, NewUser, User, UserId};
use crate::db::repository::{
    ErrorContext, ItemRepository, RepositoryError, RepositoryResult, UserRepository,
};

#[derive(Debug, Default)]
struct LocalState {
    users: BTreeMap<i64, User>,
    items: BTreeMap<i64, Item>,
    next_user_id: i64,
    next_item_id: i64,
}

/// In-memory repository backed by `BTreeMap`s.
///
/// Ids are assigned sequentially starting at 1. The email-uniqueness and
/// item-ownership invariants are enforced the same way the Postgres backend
/// enforces them with constraints.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Number of stored items.
    pub fn item_count(&self) -> usize {
        self.state.read().items.len()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn create_user(&self, user: NewUser) -> RepositoryResult<User> {
        let mut state = self.state.write();

        if state.users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::conflict_with_context(
                format!("email '{}' is already registered", user.email),
                ErrorContext::new("create_user").with_entity("user"),
            ));
        }

        state.next_user_id += 1;
        let id = state.next_user_id;
        let stored = User {
            id: UserId::new(id),
            email: user.email,
            hashed_password: user.hashed_password,
            is_active: user.is_active,
            created_at: Utc::now(),
        };
        state.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user(&self, id: UserId) -> RepositoryResult<User> {
        self.state.read().users.get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("user {} not found", id),
                ErrorContext::new("get_user")
                    .with_entity("user")
                    .with_entity_id(id),
            )
        })
    }

    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.state.read().users.values().cloned().collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl ItemRepository for LocalRepository {
    async fn create_item(&self, item: NewItem) -> RepositoryResult<Item> {
        let mut state = self.state.write();

        if let Some(owner) = item.owner_id {
            if !state.users.contains_key(&owner.value()) {
                return Err(RepositoryError::validation_with_context(
                    format!("owner {} does not reference an existing user", owner),
                    ErrorContext::new("create_item")
                        .with_entity("item")
                        .with_details(format!("owner_id={}", owner)),
                ));
            }
        }

        state.next_item_id += 1;
        let id = state.next_item_id;
        let stored = Item {
            id: ItemId::new(id),
            title: item.title,
            description: item.description,
            owner_id: item.owner_id,
            created_at: Utc::now(),
        };
        state.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_item(&self, id: ItemId) -> RepositoryResult<Item> {
        self.state.read().items.get(&id.value()).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("item {} not found", id),
                ErrorContext::new("get_item")
                    .with_entity("item")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_items_for_owner(&self, owner: UserId) -> RepositoryResult<Vec<Item>> {
        Ok(self
            .state
            .read()
            .items
            .values()
            .filter(|i| i.owner_id == Some(owner))
            .cloned()
            .collect())
    }
}
