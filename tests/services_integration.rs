//! Integration tests for the service layer against the in-memory repository.

use rollcall::api::{NewItem, UserId};
use rollcall::db::repositories::LocalRepository;
use rollcall::db::repository::RepositoryError;
use rollcall::db::{password, services};

#[tokio::test]
async fn test_register_and_fetch_user() {
    let repo = LocalRepository::new();

    let user = services::register_user(&repo, "alice@example.com", "s3cret")
        .await
        .unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_active);

    let fetched = services::get_user(&repo, user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_register_user_stores_digest_not_plaintext() {
    let repo = LocalRepository::new();

    let user = services::register_user(&repo, "alice@example.com", "s3cret")
        .await
        .unwrap();
    assert_ne!(user.hashed_password, "s3cret");
    assert!(password::verify_password("s3cret", &user.hashed_password));
}

#[tokio::test]
async fn test_email_uniqueness_invariant() {
    let repo = LocalRepository::new();

    services::register_user(&repo, "alice@example.com", "one")
        .await
        .unwrap();
    let err = services::register_user(&repo, "alice@example.com", "two")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));

    // The first registration is still intact
    let found = services::find_user_by_email(&repo, "alice@example.com")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_owner_relationship_roundtrip() {
    let repo = LocalRepository::new();

    let owner = services::register_user(&repo, "alice@example.com", "pw")
        .await
        .unwrap();
    let item = services::create_item_for_owner(&repo, owner.id, "notebook", "ruled")
        .await
        .unwrap();
    assert_eq!(item.owner_id, Some(owner.id));

    // Querying the user returns the item in its collection
    let (_, items) = services::get_user_with_items(&repo, owner.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);
    assert_eq!(items[0].title, "notebook");
}

#[tokio::test]
async fn test_owner_reference_must_exist() {
    let repo = LocalRepository::new();

    let err = services::create_item(&repo, NewItem::new("t", "d").with_owner(UserId::new(42)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_nullable_owner_is_permitted() {
    let repo = LocalRepository::new();

    let item = services::create_item(&repo, NewItem::new("orphan", "no owner"))
        .await
        .unwrap();
    assert_eq!(item.owner_id, None);

    let fetched = services::get_item(&repo, item.id).await.unwrap();
    assert_eq!(fetched, item);
}

#[tokio::test]
async fn test_list_items_for_owner_excludes_other_owners() {
    let repo = LocalRepository::new();

    let alice = services::register_user(&repo, "alice@example.com", "pw")
        .await
        .unwrap();
    let bob = services::register_user(&repo, "bob@example.com", "pw")
        .await
        .unwrap();

    services::create_item_for_owner(&repo, alice.id, "a1", "")
        .await
        .unwrap();
    services::create_item_for_owner(&repo, alice.id, "a2", "")
        .await
        .unwrap();
    services::create_item_for_owner(&repo, bob.id, "b1", "")
        .await
        .unwrap();

    let alice_items = services::list_items_for_owner(&repo, alice.id).await.unwrap();
    let bob_items = services::list_items_for_owner(&repo, bob.id).await.unwrap();
    assert_eq!(alice_items.len(), 2);
    assert_eq!(bob_items.len(), 1);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let repo = LocalRepository::new();

    let err = services::get_user(&repo, UserId::new(999)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_users_ordering() {
    let repo = LocalRepository::new();

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        services::register_user(&repo, email, "pw").await.unwrap();
    }

    let users = services::list_users(&repo).await.unwrap();
    assert_eq!(users.len(), 3);
    let ids: Vec<i64> = users.iter().map(|u| u.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
