#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use greenpoint_query::{CatalogReader, DetailResolver};
use greenpoint_store::ProjectStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;

pub use config::{validate_startup_config, ApiConfig, DEFAULT_CLIENT_ORIGIN};
pub use greenpoint_store::{LocalJsonStore, MemoryStore};
pub use middleware::request_tracing::RequestId;

pub const CRATE_NAME: &str = "greenpoint-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub catalog: CatalogReader,
    pub details: DetailResolver,
    pub api: ApiConfig,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn ProjectStore>, api: ApiConfig) -> Self {
        Self {
            catalog: CatalogReader::new(store.clone()),
            details: DetailResolver::new(store.clone()),
            store,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/api/projects", get(http::handlers::list_projects_handler))
        .route("/api/projects/:id", get(http::handlers::get_project_handler))
        .route(
            "/api/config",
            get(http::handlers::get_config_handler).post(http::handlers::post_config_handler),
        )
        .route("/uploads/*path", get(http::uploads::uploads_handler))
        .layer(from_fn_with_state(state.clone(), middleware::cors::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
