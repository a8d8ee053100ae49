//! Portfolio project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table: one portfolio entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub technology: String,
    pub category: String,
    pub featured: Option<bool>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
///
/// There is no update DTO: projects are insert-only (seeding plus ad hoc
/// admin inserts).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub technology: String,
    pub category: String,
    pub featured: Option<bool>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
}
