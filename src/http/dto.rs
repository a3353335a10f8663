//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The demonstration endpoints keep the exact field names of the original
//! surface (including the capitalized `Class` and `Name`), hence the serde
//! renames.

use serde::{Deserialize, Serialize};

use crate::api::{Item, User};

/// Simple message payload used by the greeting endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Echo of a path parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEchoResponse {
    #[serde(rename = "path variable")]
    pub path_variable: String,
}

/// Query parameters for the query echo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RollQuery {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Numeric-as-string roll number, length 3-4 when present.
    #[serde(default)]
    pub roll_no: Option<String>,
}

/// Response for the query echo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollQueryResponse {
    pub name: Option<String>,
    pub roll_no: Option<String>,
}

/// Enum-constrained path parameter for `/models/{model_name}`.
///
/// Only these three literal values are accepted; anything else is rejected
/// by the extractor before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelName {
    #[serde(rename = "one")]
    One,
    #[serde(rename = "Two")]
    Two,
    #[serde(rename = "Three")]
    Three,
}

/// Response for `/models/{model_name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: String,
}

/// Request/response body for the `/items/` echo endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(rename = "Class")]
    pub class: String,
    pub roll_no: i64,
}

/// Form fields for `/form/data`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response for `/form/data`.
///
/// Carries a digest instead of the plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFormResponse {
    pub username: String,
    pub password_sha256: String,
}

/// Response for `/file/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    /// Byte count of the uploaded content.
    pub file: usize,
}

/// Response for `/form/data/filedata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFormResponse {
    pub file_name: String,
    pub file2_bytes: usize,
    pub name: String,
}

/// Query parameters for `/error/handling`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorProbeQuery {
    pub items: i64,
}

/// Success response for `/error/handling`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorProbeResponse {
    pub value: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

/// User DTO for API responses. Never exposes password material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// User DTO including the owned items collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithItemsDto {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub items: Vec<ItemDto>,
}

impl UserWithItemsDto {
    pub fn from_parts(user: User, items: Vec<Item>) -> Self {
        Self {
            id: user.id.value(),
            email: user.email,
            is_active: user.is_active,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// User list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
    pub total: usize,
}

/// Request body for creating an item for a specific owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOwnedItemRequest {
    pub title: String,
    pub description: String,
}

/// Request body for creating an item with an optional owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Item DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: Option<i64>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.value(),
            title: item.title,
            description: item.description,
            owner_id: item.owner_id.map(|id| id.value()),
        }
    }
}

/// Item list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<ItemDto>,
    pub total: usize,
}
