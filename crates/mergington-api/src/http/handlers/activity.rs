//! Activity directory handlers for the REST API.

use axum::extract::State;
use axum::Json;

use mergington_types::activity::Directory;

use crate::http::error::AppError;
use crate::http::extractors::activity::ActivityName;
use crate::http::extractors::email::{JsonEmail, SignupEmail};
use crate::http::response::MessageResponse;
use crate::state::AppState;

/// GET /activities - The full directory keyed by activity name.
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<Directory>, AppError> {
    let directory = state.activity_service.list_activities().await?;
    Ok(Json(directory))
}

/// POST /activities/{activity_name}/signup - Add a student to a roster.
pub async fn sign_up(
    State(state): State<AppState>,
    ActivityName(activity_name): ActivityName,
    SignupEmail(email): SignupEmail,
) -> Result<Json<MessageResponse>, AppError> {
    let email = email.unwrap_or_default();
    let change = state
        .activity_service
        .sign_up(&activity_name, &email)
        .await?;
    Ok(Json(change.into()))
}

/// POST /activities/{activity_name}/unregister - Remove a student from a roster.
pub async fn unregister(
    State(state): State<AppState>,
    ActivityName(activity_name): ActivityName,
    JsonEmail(email): JsonEmail,
) -> Result<Json<MessageResponse>, AppError> {
    let change = state
        .activity_service
        .unregister(&activity_name, email.as_deref())
        .await?;
    Ok(Json(change.into()))
}
