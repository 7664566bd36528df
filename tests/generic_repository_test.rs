//! Integration tests for the generic repository contract
//!
//! Soft-delete visibility, staging and the unit-of-work flush, against an
//! in-memory SQLite database.

mod common;

use common::{hotel, room_type, store, user};
use travelstore::prelude::*;

#[tokio::test]
async fn get_all_hides_inactive_users() {
    let store = store().await;
    let scope = store.scope();
    let users = scope.users();

    let active = user(1, "one@example.com");
    let mut inactive = user(2, "two@example.com");
    inactive.is_active = false;
    users.add(active).await.unwrap();
    users.add(inactive).await.unwrap();
    assert!(users.save_changes().await.unwrap());

    let visible = users.get_all(false).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);

    let everything = users.get_all(true).await.unwrap();
    assert_eq!(everything.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
    assert!(!everything[1].is_active);
}

#[tokio::test]
async fn added_entity_round_trips_through_the_database() {
    let store = store().await;
    let scope = store.scope();
    let users = scope.users();

    let mut added = users
        .add(User {
            phone: Some("+51 999 111 222".to_string()),
            ..User::new("carla@example.com", "Carla Diaz", "argon2-hash")
        })
        .await
        .unwrap();
    assert!(users.save_changes().await.unwrap());

    let id = scope.context().last_generated_key("users").await.unwrap();
    added.id = id;

    let stored = users.get_by_id(id, false).await.unwrap().unwrap();
    assert_eq!(stored, added);
}

#[tokio::test]
async fn missing_ids_are_absent_not_errors() {
    let store = store().await;
    let hotels = store.scope().hotels();

    assert!(hotels.get_by_id(12345, false).await.unwrap().is_none());
    assert!(hotels.get_by_id(12345, true).await.unwrap().is_none());
}

#[tokio::test]
async fn soft_deleted_rows_persist_inactive() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();
    hotels.add(hotel(1, "TAX-1", "Lima")).await.unwrap();
    hotels.add(hotel(2, "TAX-2", "Lima")).await.unwrap();
    hotels.save_changes().await.unwrap();

    assert!(hotels.soft_delete(1).await.unwrap());
    assert!(hotels.save_changes().await.unwrap());

    let visible = hotels.get_all(false).await.unwrap();
    assert_eq!(visible.iter().map(|h| h.id).collect::<Vec<_>>(), vec![2]);

    let (is_active,): (bool,) = sqlx::query_as("SELECT is_active FROM hotels WHERE id = ?1")
        .bind(1i64)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert!(!is_active);
    assert_eq!(hotels.generic().count(true).await.unwrap(), 2);
    assert_eq!(hotels.generic().count(false).await.unwrap(), 1);
}

#[tokio::test]
async fn soft_delete_of_unknown_id_writes_nothing() {
    let store = store().await;
    let scope = store.scope();

    assert!(!scope.users().soft_delete(42).await.unwrap());
    assert_eq!(scope.context().pending_changes().await, 0);
    assert!(!scope.save_changes().await.unwrap());
}

#[tokio::test]
async fn restore_brings_a_row_back() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();
    hotels.add(hotel(1, "TAX-1", "Arequipa")).await.unwrap();
    hotels.save_changes().await.unwrap();

    hotels.soft_delete(1).await.unwrap();
    hotels.save_changes().await.unwrap();
    assert!(hotels.get_by_id(1, false).await.unwrap().is_none());

    assert!(hotels.generic().restore(1).await.unwrap());
    hotels.save_changes().await.unwrap();
    assert!(hotels.get_by_id(1, false).await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn writes_are_invisible_until_saved() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();

    hotels.add(hotel(1, "TAX-1", "Puno")).await.unwrap();
    assert!(hotels.get_by_id(1, true).await.unwrap().is_none());

    scope.context().discard_changes().await;
    assert!(!hotels.save_changes().await.unwrap());
    assert!(hotels.get_all(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_changes_the_stored_row() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();
    hotels.add(hotel(1, "TAX-1", "Lima")).await.unwrap();
    hotels.save_changes().await.unwrap();

    let mut stored = hotels.get_by_id(1, false).await.unwrap().unwrap();
    stored.stars = 5;
    stored.description = Some("Rooftop pool".to_string());
    hotels.update(stored.clone()).await.unwrap();
    assert!(hotels.save_changes().await.unwrap());

    assert_eq!(hotels.get_by_id(1, false).await.unwrap().unwrap(), stored);
}

#[tokio::test]
async fn repositories_of_one_scope_commit_together() {
    let store = store().await;
    let scope = store.scope();

    scope.hotels().add(hotel(1, "TAX-1", "Cusco")).await.unwrap();
    scope.room_types().add(room_type(1, 1, "Double")).await.unwrap();
    assert_eq!(scope.context().pending_changes().await, 2);

    assert!(scope.hotels().save_changes().await.unwrap());
    assert_eq!(scope.room_types().list_by_hotel(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn related_repository_joins_the_unit_of_work() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();

    hotels.add(hotel(1, "TAX-1", "Cusco")).await.unwrap();
    hotels
        .generic()
        .related::<RoomType>()
        .add(room_type(1, 1, "Single"))
        .await
        .unwrap();

    assert!(hotels.save_changes().await.unwrap());
    let loaded = hotels.get_with_room_types(1).await.unwrap().unwrap();
    assert_eq!(loaded.room_types.len(), 1);
}

#[tokio::test]
async fn failed_flush_rolls_back_the_whole_unit_of_work() {
    let store = store().await;
    let scope = store.scope();

    scope.hotels().add(hotel(1, "TAX-1", "Cusco")).await.unwrap();
    // References a hotel that does not exist
    scope.room_types().add(room_type(1, 99, "Orphan")).await.unwrap();

    let err = scope.save_changes().await.unwrap_err();
    assert!(err.is_foreign_key_violation());
    assert_eq!(scope.context().pending_changes().await, 2);
    assert!(scope.hotels().get_all(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn unique_violations_surface_as_database_errors() {
    let store = store().await;
    let scope = store.scope();
    let hotels = scope.hotels();
    hotels.add(hotel(1, "TAX-1", "Cusco")).await.unwrap();
    hotels.save_changes().await.unwrap();

    hotels.add(hotel(2, "TAX-1", "Lima")).await.unwrap();
    let err = hotels.save_changes().await.unwrap_err();
    assert!(matches!(err, StoreError::DatabaseOperation { .. }));
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn separate_scopes_do_not_share_staged_writes() {
    let store = store().await;
    let first = store.scope();
    let second = store.scope();

    first.hotels().add(hotel(1, "TAX-1", "Cusco")).await.unwrap();
    assert_eq!(second.context().pending_changes().await, 0);
    assert!(!second.save_changes().await.unwrap());
    assert!(first.save_changes().await.unwrap());
}
