//! Error types for the plugin server.
//!
//! # Design
//! Only the manifest responders have an HTTP error path. Unknown todo ids are
//! not errors: they come back as `null` with status 200.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got `{0}`")]
    InvalidHost(String),

    #[error("invalid CORS origin `{0}`")]
    InvalidOrigin(String),
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Unable to fetch openapi.yaml manifest")]
    OpenApiUnavailable(#[source] std::io::Error),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::OpenApiUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
