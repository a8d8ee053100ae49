//! Repository for the `messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{CreateMessage, Message};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, message, read, created_at";

/// Provides CRUD operations for contact messages.
///
/// Messages are insert-only apart from the read flag; there is no update
/// or delete path.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message with `read = false`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all messages, newest first by insertion order.
    ///
    /// Ordered by `id` rather than `created_at` so rows inserted within the
    /// same timestamp tick still come back in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY id DESC");
        sqlx::query_as::<_, Message>(&query).fetch_all(pool).await
    }

    /// Find a message by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a message as read, returning the updated row.
    ///
    /// Idempotent: marking an already-read message succeeds with the same
    /// observable result. Returns `None` if no row with the given `id` exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET read = TRUE WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored messages.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }
}
