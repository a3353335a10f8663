//! Tests for the repository error taxonomy.

use rollcall::db::repository::{ErrorContext, RepositoryError};

#[test]
fn test_connection_errors_are_retryable() {
    let err = RepositoryError::connection("pool exhausted");
    assert!(err.is_retryable());
}

#[test]
fn test_timeout_errors_are_retryable() {
    let err = RepositoryError::timeout("query timed out");
    assert!(err.is_retryable());
}

#[test]
fn test_not_found_is_not_retryable() {
    let err = RepositoryError::not_found("user 1 not found");
    assert!(!err.is_retryable());
}

#[test]
fn test_conflict_is_not_retryable() {
    let err = RepositoryError::conflict("duplicate email");
    assert!(!err.is_retryable());
}

#[test]
fn test_validation_is_not_retryable() {
    let err = RepositoryError::validation("owner missing");
    assert!(!err.is_retryable());
}

#[test]
fn test_error_context_display() {
    let context = ErrorContext::new("create_user")
        .with_entity("user")
        .with_entity_id(7)
        .with_details("duplicate email");
    let rendered = context.to_string();
    assert!(rendered.contains("operation=create_user"));
    assert!(rendered.contains("entity=user"));
    assert!(rendered.contains("id=7"));
    assert!(rendered.contains("details=duplicate email"));
}

#[test]
fn test_with_operation_updates_context() {
    let err = RepositoryError::validation("bad owner").with_operation("create_item");
    assert_eq!(err.context().operation.as_deref(), Some("create_item"));
}

#[test]
fn test_error_messages_include_context() {
    let err = RepositoryError::not_found_with_context(
        "user 7 not found",
        ErrorContext::new("get_user").with_entity("user").with_entity_id(7),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("user 7 not found"));
    assert!(rendered.contains("operation=get_user"));
}

#[test]
fn test_string_conversion_is_internal() {
    let err: RepositoryError = "boom".into();
    assert!(matches!(err, RepositoryError::InternalError { .. }));

    let err: RepositoryError = String::from("boom").into();
    assert!(matches!(err, RepositoryError::InternalError { .. }));
}
