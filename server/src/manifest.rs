//! Static responders describing the service to the plugin host.
//!
//! `openapi.yaml` is read on every request so edits show up without a
//! restart. The other two files go through `ServeFile`, which infers the
//! content type and answers 404 when the file is missing.

use std::path::Path;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;

use crate::error::ServerError;
use crate::AppState;

pub const OPENAPI_FILE: &str = "openapi.yaml";
pub const PLUGIN_MANIFEST_FILE: &str = ".well-known/ai-plugin.json";
pub const ICON_FILE: &str = "icon.png";

pub fn routes(asset_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/openapi.yaml", get(openapi))
        .route_service(
            "/.well-known/ai-plugin.json",
            ServeFile::new(asset_dir.join(PLUGIN_MANIFEST_FILE)),
        )
        .route_service("/icon.png", ServeFile::new(asset_dir.join(ICON_FILE)))
}

async fn openapi(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let path = state.config.asset_dir.join(OPENAPI_FILE);
    let yaml = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("{}: {e}", path.display());
        ServerError::OpenApiUnavailable(e)
    })?;
    Ok(([(header::CONTENT_TYPE, "text/yaml")], yaml))
}
