//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, technology, category, featured, github_url, live_url, image_url, created_at";

/// Provides operations for portfolio projects.
///
/// Projects are insert-only: no update or delete operation exists.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Optional fields pass through as NULL when absent. Duplicate titles
    /// are permitted; there is no uniqueness constraint.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, technology, category, featured, github_url, live_url, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.technology)
            .bind(&input.category)
            .bind(input.featured)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// List all projects in store-native order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Total number of stored projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }
}
