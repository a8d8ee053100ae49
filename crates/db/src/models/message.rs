//! Contact message entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `messages` table: one contact-form submission.
///
/// Field values are stored exactly as submitted; the only mutation path
/// after creation is the read flag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new contact message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
