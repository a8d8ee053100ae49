//! Route definitions for the `/messages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// POST   /{id}/read   -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list).post(messages::create))
        .route("/{id}/read", post(messages::mark_read))
}
