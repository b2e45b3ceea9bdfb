//! Contact form handler

use axum::{body::Bytes, extract::State, Json};

use crate::domain::entities::{ContactSubmission, RelayResult};
use crate::error::{AppError, RelayResponse};
use crate::AppState;

/// POST /api/contact
///
/// Body: `{name, email, subject, message}`. Answers 200 `{success: true}`
/// once the mail transport accepted the message, otherwise 500
/// `{success: false}`. The body is parsed here rather than by the `Json`
/// extractor so malformed JSON gets the same 500 as any other failure.
pub async fn post_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RelayResponse>, AppError> {
    let submission: ContactSubmission = serde_json::from_slice(&body)
        .map_err(|e| AppError::Relay(format!("Invalid contact payload: {}", e)))?;

    match state.contact_relay.submit(&submission).await {
        RelayResult::Success => Ok(Json(RelayResponse { success: true })),
        RelayResult::Failure => Err(AppError::Relay("Contact relay failed".into())),
    }
}
