//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod activity;
pub mod contact;

use axum::http::Uri;

use crate::error::AppError;

pub use activity::get_activity;
pub use contact::post_contact;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
