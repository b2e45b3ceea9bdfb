//! Unified error types for the portfolio API
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub API client errors (always recovered inside the activity service)
//! - `MailError`: mail transport errors (logged, never shown to the caller)
//! - `AppError`: errors that reach an HTTP handler

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("No response within {0:?}")]
    Timeout(Duration),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Outbound mail errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Message build error: {0}")]
    Message(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// A contact submission could not be relayed. The message is logged only.
    #[error("Contact relay failed: {0}")]
    Relay(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Body returned by the contact endpoint, on success and on failure
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Relay(msg) => {
                tracing::error!("Contact relay failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(RelayResponse { success: false }),
                )
                    .into_response()
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Not found".to_string(),
                    details: Some(msg),
                }),
            )
                .into_response(),
        }
    }
}
