//! HTTP handlers for the REST API.
//!
//! The root-level handlers reproduce the original demonstration surface
//! (greetings, path/query echoes, form and file uploads); the `/v1` handlers
//! delegate to the service layer for user/item persistence.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Form, Json,
};

use super::dto::{
    CreateItemRequest, CreateOwnedItemRequest, CreateUserRequest, ErrorProbeQuery,
    ErrorProbeResponse, FileFormResponse, FileUploadResponse, HealthResponse, ItemDto,
    ItemListResponse, LoginForm, LoginFormResponse, MessageResponse, ModelName, ModelResponse,
    PathEchoResponse, RollQuery, RollQueryResponse, StudentRecord, UserDto, UserListResponse,
    UserWithItemsDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ItemId, NewItem, UserId};
use crate::db::password::hash_password;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Demonstration Endpoints
// =============================================================================

/// GET /
///
/// Bare greeting string at the application root.
pub async fn root_greeting() -> Json<&'static str> {
    Json("helloooo.....")
}

/// GET /hello
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from Ratnani Ji"))
}

/// GET /hy
pub async fn hy() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hi, how are you!!"))
}

/// GET /item/{item}
///
/// Echoes the path parameter back under the original `path variable` key.
pub async fn path_echo(Path(item): Path<String>) -> Json<PathEchoResponse> {
    Json(PathEchoResponse {
        path_variable: item,
    })
}

/// GET /query/
///
/// Optional free-text `Name` and optional `roll_no` whose length must be
/// 3-4 characters. A roll number outside that range yields a 422.
pub async fn query_echo(Query(query): Query<RollQuery>) -> HandlerResult<RollQueryResponse> {
    if let Some(ref roll_no) = query.roll_no {
        let len = roll_no.chars().count();
        if !(3..=4).contains(&len) {
            return Err(AppError::Validation(format!(
                "roll_no must be 3 to 4 characters long, got {}",
                len
            )));
        }
    }

    Ok(Json(RollQueryResponse {
        name: query.name,
        roll_no: query.roll_no,
    }))
}

/// GET /models/{model_name}
///
/// The extractor rejects anything outside the `one`/`Two`/`Three` set, so
/// the handler only maps each variant to its fixed message.
pub async fn get_model(Path(model_name): Path<ModelName>) -> Json<ModelResponse> {
    let message = match model_name {
        ModelName::One => "calling one!!",
        ModelName::Two => "calling Two!!",
        ModelName::Three => "calling Three",
    };

    Json(ModelResponse {
        model_name,
        message: message.to_string(),
    })
}

/// POST /items/
///
/// Echoes the validated body back unchanged.
pub async fn echo_student(Json(record): Json<StudentRecord>) -> Json<StudentRecord> {
    Json(record)
}

/// POST /form/data
///
/// Accepts `username` and `password` form fields. The response carries the
/// SHA-256 digest of the password, never the plaintext.
pub async fn form_data(Form(form): Form<LoginForm>) -> Json<LoginFormResponse> {
    Json(LoginFormResponse {
        username: form.username,
        password_sha256: hash_password(&form.password),
    })
}

/// POST /file/upload
///
/// Reports the byte length of the uploaded `file` field without persisting
/// anything.
pub async fn file_upload(mut multipart: Multipart) -> HandlerResult<FileUploadResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read file field: {}", e)))?;
            return Ok(Json(FileUploadResponse { file: data.len() }));
        }
    }

    Err(AppError::Validation("missing 'file' field".to_string()))
}

/// POST /form/data/filedata
///
/// Mixed multipart upload: `file1` (filename reported), `file2` (byte count
/// reported), and a `name` text field.
pub async fn form_file_data(mut multipart: Multipart) -> HandlerResult<FileFormResponse> {
    let mut file_name = None;
    let mut file2_bytes = None;
    let mut name = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("file1") => {
                file_name = field.file_name().map(ToString::to_string);
                // Drain the field so the next one can be read.
                let _ = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("failed to read file1 field: {}", e))
                })?;
            }
            Some("file2") => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("failed to read file2 field: {}", e))
                })?;
                file2_bytes = Some(data.len());
            }
            Some("name") => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("failed to read name field: {}", e))
                })?;
                name = Some(text);
            }
            _ => {}
        }
    }

    match (file_name, file2_bytes, name) {
        (Some(file_name), Some(file2_bytes), Some(name)) => Ok(Json(FileFormResponse {
            file_name,
            file2_bytes,
            name,
        })),
        _ => Err(AppError::Validation(
            "expected fields 'file1', 'file2' and 'name'".to_string(),
        )),
    }
}

/// GET /error/handling
///
/// Accepts an integer `items` and requires it to be a member of {0..9}.
/// Out-of-range values produce a real HTTP 400.
pub async fn error_probe(
    Query(query): Query<ErrorProbeQuery>,
) -> HandlerResult<ErrorProbeResponse> {
    if !(0..10).contains(&query.items) {
        return Err(AppError::BadRequest(
            "item is not equal to 2 try another value!!!".to_string(),
        ));
    }

    Ok(Json(ErrorProbeResponse { value: query.items }))
}

// =============================================================================
// User Registry
// =============================================================================

/// POST /v1/users
///
/// Register a new user. Duplicate emails yield a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email must not be empty".to_string()));
    }

    let user =
        db_services::register_user(state.repository.as_ref(), &request.email, &request.password)
            .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /v1/users
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<UserListResponse> {
    let users = db_services::list_users(state.repository.as_ref()).await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(Into::into).collect();
    let total = user_dtos.len();

    Ok(Json(UserListResponse {
        users: user_dtos,
        total,
    }))
}

/// GET /v1/users/{user_id}
///
/// Returns the user together with its items collection.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<UserWithItemsDto> {
    let (user, items) =
        db_services::get_user_with_items(state.repository.as_ref(), UserId::new(user_id)).await?;

    Ok(Json(UserWithItemsDto::from_parts(user, items)))
}

/// GET /v1/users/{user_id}/items
pub async fn list_user_items(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<ItemListResponse> {
    let user_id = UserId::new(user_id);
    // Surface unknown owners as 404 instead of an empty list.
    db_services::get_user(state.repository.as_ref(), user_id).await?;
    let items = db_services::list_items_for_owner(state.repository.as_ref(), user_id).await?;

    let item_dtos: Vec<ItemDto> = items.into_iter().map(Into::into).collect();
    let total = item_dtos.len();

    Ok(Json(ItemListResponse {
        items: item_dtos,
        total,
    }))
}

/// POST /v1/users/{user_id}/items
///
/// Create an item owned by the given user. Unknown owners yield a 404.
pub async fn create_user_item(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<CreateOwnedItemRequest>,
) -> Result<(StatusCode, Json<ItemDto>), AppError> {
    let item = db_services::create_item_for_owner(
        state.repository.as_ref(),
        UserId::new(user_id),
        &request.title,
        &request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// POST /v1/items
///
/// Create an item with an optional owner. A set owner must reference an
/// existing user (422 otherwise); a null owner is permitted.
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemDto>), AppError> {
    let new_item = NewItem {
        title: request.title,
        description: request.description,
        owner_id: request.owner_id.map(UserId::new),
    };

    let item = db_services::create_item(state.repository.as_ref(), new_item).await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// GET /v1/items/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> HandlerResult<ItemDto> {
    let item = db_services::get_item(state.repository.as_ref(), ItemId::new(item_id)).await?;

    Ok(Json(item.into()))
}
