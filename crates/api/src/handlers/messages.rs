//! Handlers for the `/messages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::message::{CreateMessage, Message};
use folio_db::repositories::MessageRepo;
use folio_events::ContactEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Validate a contact-form submission at the API boundary.
///
/// Required fields must be present and non-empty after trimming. The email
/// field is checked for presence only: format validation is deliberately
/// left to the client, preserving the permissive contract of the original
/// contact form.
fn validate_submission(input: &CreateMessage) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if input.email.trim().is_empty() {
        return Err(CoreError::Validation("email must not be empty".to_string()));
    }
    if input.message.trim().is_empty() {
        return Err(CoreError::Validation(
            "message must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/messages
///
/// List all contact messages, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Message>>> {
    let messages = MessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// POST /api/v1/messages
///
/// Store a contact-form submission and schedule the owner notification.
///
/// The event is published only after the insert has returned: a persistence
/// failure must never produce a notification for a message that was not
/// durably stored. The publish itself is fire-and-forget; once the row
/// exists, notification outcome no longer affects this request.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    validate_submission(&input)?;

    let message = MessageRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(ContactEvent::new(
        message.name.clone(),
        message.email.clone(),
        message.message.clone(),
    ));

    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/messages/{id}/read
///
/// Mark a message as read. Idempotent; 404 if the id does not exist.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Message>> {
    let message = MessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        }))?;
    Ok(Json(message))
}
