//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::project::{CreateProject, Project};
use folio_db::repositories::ProjectRepo;
use folio_db::seed::seed_projects;

use crate::error::AppResult;
use crate::state::AppState;

/// Validate a project submission: all four text fields are required and
/// must be non-empty after trimming. Optional fields pass through as-is.
fn validate_project(input: &CreateProject) -> Result<(), CoreError> {
    for (field, value) in [
        ("title", &input.title),
        ("description", &input.description),
        ("technology", &input.technology),
        ("category", &input.category),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{field} must not be empty"
            )));
        }
    }
    Ok(())
}

/// GET /api/v1/projects
///
/// List all projects in store-native order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
///
/// Create a project. Duplicate titles are permitted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /api/v1/projects/seed
///
/// One-shot bootstrap seeding; a no-op when the table already has rows.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let outcome = seed_projects(&state.pool).await?;
    Ok(Json(serde_json::json!({ "status": outcome.status() })))
}
