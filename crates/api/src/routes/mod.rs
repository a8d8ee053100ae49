pub mod health;
pub mod messages;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET    /messages              -> list (newest first)
/// POST   /messages              -> create (schedules notification)
/// POST   /messages/{id}/read    -> mark as read
///
/// GET    /projects              -> list
/// POST   /projects              -> create
/// POST   /projects/seed         -> one-shot bootstrap seeding
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/messages", messages::router())
        .nest("/projects", projects::router())
}
