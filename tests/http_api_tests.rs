//! HTTP-level tests driving the full router with in-process requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rollcall::db::repositories::LocalRepository;
use rollcall::db::repository::FullRepository;
use rollcall::http::{create_router, AppState};

fn test_router() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
    create_router(AppState::new(repo))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: &Router, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(router: &Router, uri: &str, body: Value) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

// =============================================================================
// Demonstration endpoints
// =============================================================================

#[tokio::test]
async fn test_root_greeting() {
    let router = test_router();
    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("helloooo....."));
}

#[tokio::test]
async fn test_hello_exact_message() {
    let router = test_router();
    let response = get(&router, "/hello").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Hello from Ratnani Ji"})
    );
}

#[tokio::test]
async fn test_hy_greeting() {
    let router = test_router();
    let response = get(&router, "/hy").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Hi, how are you!!"})
    );
}

#[tokio::test]
async fn test_path_echo_uses_original_key() {
    let router = test_router();
    let response = get(&router, "/item/pencil").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"path variable": "pencil"}));
}

#[tokio::test]
async fn test_query_echo_with_valid_roll_no() {
    let router = test_router();
    let response = get(&router, "/query/?Name=ram&roll_no=123").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"name": "ram", "roll_no": "123"})
    );
}

#[tokio::test]
async fn test_query_echo_without_params_returns_nulls() {
    let router = test_router();
    let response = get(&router, "/query/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"name": null, "roll_no": null})
    );
}

#[tokio::test]
async fn test_query_echo_roll_no_length_bounds() {
    let router = test_router();

    // Length 2 is below the minimum of 3
    let response = get(&router, "/query/?roll_no=12").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Length 5 is above the maximum of 4
    let response = get(&router, "/query/?roll_no=12345").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Lengths 3 and 4 are accepted
    for roll_no in ["123", "1234"] {
        let response = get(&router, &format!("/query/?roll_no={}", roll_no)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_models_fixed_messages() {
    let router = test_router();

    let response = get(&router, "/models/one").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"model_name": "one", "message": "calling one!!"})
    );

    let response = get(&router, "/models/Two").await;
    assert_eq!(
        body_json(response).await,
        json!({"model_name": "Two", "message": "calling Two!!"})
    );

    let response = get(&router, "/models/Three").await;
    assert_eq!(
        body_json(response).await,
        json!({"model_name": "Three", "message": "calling Three"})
    );
}

#[tokio::test]
async fn test_models_rejects_values_outside_the_set() {
    let router = test_router();
    for invalid in ["four", "two", "ONE"] {
        let response = get(&router, &format!("/models/{}", invalid)).await;
        assert!(
            response.status().is_client_error(),
            "expected client error for {:?}",
            invalid
        );
    }
}

#[tokio::test]
async fn test_items_echo_roundtrip() {
    let router = test_router();
    let body = json!({"name": "a", "Class": "b", "roll_no": 1});
    let response = post_json(&router, "/items/", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, body);
}

#[tokio::test]
async fn test_items_echo_rejects_malformed_body() {
    let router = test_router();
    // roll_no must coerce to an integer
    let response = post_json(&router, "/items/", json!({"name": "a", "Class": "b", "roll_no": "x"})).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_form_data_never_echoes_plaintext_password() {
    let router = test_router();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/form/data")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=ram&password=topsecret"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "ram");
    assert_eq!(
        body["password_sha256"],
        rollcall::db::password::hash_password("topsecret")
    );
    assert!(body.get("password").is_none());
}

fn multipart_request(uri: &str, boundary: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_file_upload_reports_byte_count() {
    let router = test_router();
    let boundary = "XBOUNDARY";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello world\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = router
        .clone()
        .oneshot(multipart_request("/file/upload", boundary, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"file": 11}));
}

#[tokio::test]
async fn test_file_upload_without_file_field_is_rejected() {
    let router = test_router();
    let boundary = "XBOUNDARY";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"other\"\r\n\r\n\
         data\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = router
        .clone()
        .oneshot(multipart_request("/file/upload", boundary, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_mixed_form_and_file_upload() {
    let router = test_router();
    let boundary = "XBOUNDARY";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"file1\"; filename=\"report.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         pdfdata\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"file2\"; filename=\"raw.bin\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         12345\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"name\"\r\n\r\n\
         ram\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = router
        .clone()
        .oneshot(multipart_request("/form/data/filedata", boundary, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"file_name": "report.pdf", "file2_bytes": 5, "name": "ram"})
    );
}

#[tokio::test]
async fn test_error_probe_in_range_echoes_value() {
    let router = test_router();
    let response = get(&router, "/error/handling?items=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"value": 5}));
}

#[tokio::test]
async fn test_error_probe_out_of_range_is_a_real_400() {
    let router = test_router();
    let response = get(&router, "/error/handling?items=42").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "item is not equal to 2 try another value!!!");
}

#[tokio::test]
async fn test_error_probe_requires_items_param() {
    let router = test_router();
    let response = get(&router, "/error/handling").await;
    assert!(response.status().is_client_error());
}

// =============================================================================
// Registry endpoints
// =============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    let router = test_router();

    // Create
    let response = post_json(
        &router,
        "/v1/users",
        json!({"email": "alice@example.com", "password": "pw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["is_active"], true);
    assert!(user.get("hashed_password").is_none());
    let user_id = user["id"].as_i64().unwrap();

    // Fetch with empty items collection
    let response = get(&router, &format!("/v1/users/{}", user_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["items"], json!([]));

    // List
    let response = get(&router, "/v1/users").await;
    let list = body_json(response).await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_duplicate_email_conflict() {
    let router = test_router();
    let body = json!({"email": "alice@example.com", "password": "pw"});

    let response = post_json(&router, "/v1/users", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&router, "/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let router = test_router();
    let response = get(&router, "/v1/users/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_appears_in_owner_collection() {
    let router = test_router();

    let response = post_json(
        &router,
        "/v1/users",
        json!({"email": "alice@example.com", "password": "pw"}),
    )
    .await;
    let user_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        &router,
        &format!("/v1/users/{}/items", user_id),
        json!({"title": "notebook", "description": "ruled"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = body_json(response).await;
    assert_eq!(item["owner_id"], user_id);

    // Owner collection includes the item
    let response = get(&router, &format!("/v1/users/{}", user_id)).await;
    let user = body_json(response).await;
    assert_eq!(user["items"][0]["title"], "notebook");

    // Dedicated listing endpoint agrees
    let response = get(&router, &format!("/v1/users/{}/items", user_id)).await;
    let listing = body_json(response).await;
    assert_eq!(listing["total"], 1);
}

#[tokio::test]
async fn test_create_item_for_missing_owner_is_404() {
    let router = test_router();
    let response = post_json(
        &router,
        "/v1/users/42/items",
        json!({"title": "t", "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_with_nullable_owner() {
    let router = test_router();
    let response = post_json(
        &router,
        "/v1/items",
        json!({"title": "orphan", "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = body_json(response).await;
    assert_eq!(item["owner_id"], Value::Null);

    let item_id = item["id"].as_i64().unwrap();
    let response = get(&router, &format!("/v1/items/{}", item_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_item_with_unknown_owner_is_rejected() {
    let router = test_router();
    let response = post_json(
        &router,
        "/v1/items",
        json!({"title": "t", "description": "d", "owner_id": 42}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router();
    let response = get(&router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}
