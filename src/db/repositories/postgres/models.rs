use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{items, users};
use crate::api::{Item, ItemId, NewItem, NewUser, User, UserId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow {
    pub title: String,
    pub description: String,
    pub owner_id: Option<i64>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            email: row.email,
            hashed_password: row.hashed_password,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl From<NewUser> for NewUserRow {
    fn from(user: NewUser) -> Self {
        NewUserRow {
            email: user.email,
            hashed_password: user.hashed_password,
            is_active: user.is_active,
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            title: row.title,
            description: row.description,
            owner_id: row.owner_id.map(UserId::new),
            created_at: row.created_at,
        }
    }
}

impl From<NewItem> for NewItemRow {
    fn from(item: NewItem) -> Self {
        NewItemRow {
            title: item.title,
            description: item.description,
            owner_id: item.owner_id.map(|id| id.value()),
        }
    }
}
