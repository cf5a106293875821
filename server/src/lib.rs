//! HTTP service exposing an in-memory todo list to a chat plugin host.
//!
//! # Overview
//! `TodoStore` owns the collection; `app` maps the REST endpoints and the
//! plugin manifest files onto it. State is injected through `AppState`, so
//! every router built in a test gets its own store.
//!
//! # Design
//! - The store sits behind one `tokio::sync::RwLock`. Handlers finish their
//!   mutation under a single guard, so requests never observe a half-applied
//!   change.
//! - Cross-origin access is limited to GET from the local https origin and
//!   the plugin host.
//! - Every request is logged with method and URI before it reaches a handler.
//! - A trailing slash is ignored when matching routes, so `/todos/` serves
//!   the same as `/todos`.

pub mod config;
pub mod error;
pub mod manifest;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ConfigError, ServerError};
pub use store::{TodoItem, TodoStore};

pub type Db = Arc<RwLock<TodoStore>>;

/// The full service: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

#[derive(Clone)]
pub struct AppState {
    pub store: Db,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Result<App, ConfigError> {
    let cors = cors_layer(&state.config)?;

    let router = Router::new()
        .route("/", get(routes::service_info))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo).put(routes::update_todo).delete(routes::delete_todo),
        )
        .merge(manifest::routes(&state.config.asset_dir))
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(NormalizePath::trim_trailing_slash(router))
}

pub async fn run(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = app(state)?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}

fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .allowed_origins()
        .into_iter()
        .map(|origin| HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(AllowOrigin::list(origins)))
}

async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("Request received: {} {}", request.method(), request.uri());
    next.run(request).await
}
