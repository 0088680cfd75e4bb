//! Contact-request store behaviour against PostgreSQL

mod common;

use aurumbank_backend::contact::{ContactStatus, ContactStore, NewContactRequest};
use aurumbank_backend::error::StoreError;

use common::isolated_db;

async fn store() -> ContactStore {
    let store = ContactStore::new(isolated_db().await);
    store.ensure_schema().await.unwrap();
    store
}

fn request(telegram_id: i64, username: &str) -> NewContactRequest {
    NewContactRequest {
        telegram_id,
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_append_creates_new_request() {
    let store = store().await;

    let created = store.append(&request(12345, "alice")).await.unwrap();
    assert_eq!(created.status, ContactStatus::New);
    assert_eq!(created.telegram_id, 12345);

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_append_accepts_long_names() {
    let store = store().await;

    let request = NewContactRequest {
        telegram_id: 5,
        username: "a".repeat(300),
        first_name: "Александр".repeat(40),
        last_name: "Константинопольский".repeat(20),
    };

    let created = store.append(&request).await.unwrap();
    assert_eq!(created.username.len(), 300);
    assert_eq!(created.first_name, request.first_name);
    assert_eq!(created.last_name, request.last_name);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_ensure_schema_widens_bounded_name_columns() {
    let db = isolated_db().await;
    sqlx::query("CREATE TYPE contact_status AS ENUM ('new', 'processed')")
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query(
        r#"
        CREATE TABLE contact_requests (
            id SERIAL PRIMARY KEY,
            telegram_id BIGINT NOT NULL,
            username VARCHAR(256) NOT NULL DEFAULT '',
            first_name VARCHAR(256) NOT NULL DEFAULT '',
            last_name VARCHAR(256) NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            status contact_status NOT NULL DEFAULT 'new'
        )
        "#,
    )
    .execute(db.pool())
    .await
    .unwrap();

    let store = ContactStore::new(db);
    store.ensure_schema().await.unwrap();

    let created = store.append(&request(5, &"a".repeat(300))).await.unwrap();
    assert_eq!(created.username.len(), 300);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_ensure_schema_is_idempotent() {
    let store = store().await;
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_list_is_newest_first() {
    let store = store().await;

    let first = store.append(&request(1, "first")).await.unwrap();
    let second = store.append(&request(2, "second")).await.unwrap();
    let third = store.append(&request(3, "third")).await.unwrap();

    let ids: Vec<i32> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_count_unprocessed_tracks_transitions() {
    let store = store().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(store.append(&request(100 + i, "")).await.unwrap().id);
    }

    let summary = store.count_unprocessed().await.unwrap();
    assert_eq!((summary.unprocessed, summary.total), (4, 4));

    store.mark_processed(ids[0]).await.unwrap();
    store.mark_processed(ids[2]).await.unwrap();
    // second transition of the same request changes nothing
    let again = store.mark_processed(ids[2]).await.unwrap();
    assert_eq!(again.status, ContactStatus::Processed);

    let summary = store.count_unprocessed().await.unwrap();
    assert_eq!((summary.unprocessed, summary.total), (2, 4));
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_mark_processed_unknown_id() {
    let store = store().await;

    let result = store.mark_processed(404).await;
    assert!(matches!(
        result,
        Err(StoreError::NotFound { id: 404, .. })
    ));
}
