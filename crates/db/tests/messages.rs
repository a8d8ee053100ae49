//! Integration tests for the message repository.
//!
//! Exercises create/list ordering, the read-flag lifecycle, and unknown-id
//! behaviour against a real database.

use folio_db::models::message::CreateMessage;
use folio_db::repositories::MessageRepo;
use sqlx::PgPool;

fn submission(name: &str, email: &str, message: &str) -> CreateMessage {
    CreateMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_stores_submission_unread_and_unchanged(pool: PgPool) {
    let created = MessageRepo::create(
        &pool,
        &submission("Alice", "a@x.com", "Hello\nWorld"),
    )
    .await
    .unwrap();

    assert!(!created.read);
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "a@x.com");
    // Line breaks are preserved in the stored record; conversion to <br>
    // happens only in the composed notification body.
    assert_eq!(created.message, "Hello\nWorld");

    let listed = MessageRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].message, "Hello\nWorld");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_newest_first_by_insertion_order(pool: PgPool) {
    for i in 0..5 {
        MessageRepo::create(
            &pool,
            &submission(&format!("Sender {i}"), "s@example.com", "hi"),
        )
        .await
        .unwrap();
    }

    let listed = MessageRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].name, "Sender 4");
    assert_eq!(listed[4].name, "Sender 0");
    for pair in listed.windows(2) {
        assert!(pair[0].id > pair[1].id, "ids must strictly descend");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_read_is_idempotent(pool: PgPool) {
    let created = MessageRepo::create(&pool, &submission("Bob", "b@x.com", "ping"))
        .await
        .unwrap();

    let first = MessageRepo::mark_read(&pool, created.id).await.unwrap();
    assert!(first.expect("row must exist").read);

    // Marking again succeeds with the same observable result.
    let second = MessageRepo::mark_read(&pool, created.id).await.unwrap();
    assert!(second.expect("row must exist").read);

    let stored = MessageRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.read);
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_read_unknown_id_changes_nothing(pool: PgPool) {
    MessageRepo::create(&pool, &submission("Carol", "c@x.com", "hey"))
        .await
        .unwrap();

    let result = MessageRepo::mark_read(&pool, 9999).await.unwrap();
    assert!(result.is_none());

    let listed = MessageRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].read);
}

#[sqlx::test(migrations = "./migrations")]
async fn count_tracks_inserts(pool: PgPool) {
    assert_eq!(MessageRepo::count(&pool).await.unwrap(), 0);
    MessageRepo::create(&pool, &submission("Dan", "d@x.com", "one"))
        .await
        .unwrap();
    MessageRepo::create(&pool, &submission("Eve", "e@x.com", "two"))
        .await
        .unwrap();
    assert_eq!(MessageRepo::count(&pool).await.unwrap(), 2);
}
