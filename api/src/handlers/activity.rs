//! GitHub activity handler

use axum::{extract::State, Json};

use crate::app::ActivityView;
use crate::AppState;

/// GET /api/github
///
/// The activity view model for the configured account. Upstream failures
/// degrade inside the view, so this always answers 200.
pub async fn get_activity(State(state): State<AppState>) -> Json<ActivityView> {
    Json(state.activity_service.build_view().await)
}
