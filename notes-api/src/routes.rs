//! Route definitions.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post}
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::api_key_middleware;
use crate::handlers;
use crate::state::AppState;

/// Builds the application router.
///
/// Only `/api` routes sit behind the API key check; liveness, health and
/// metrics stay open for probes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let auth = Arc::new(state.auth.clone());

    let api = Router::new()
        .route("/process", post(handlers::process_notes))
        .layer(DefaultBodyLimit::max(state.config.limits.max_body_bytes))
        .route_layer(middleware::from_fn_with_state(auth, api_key_middleware));

    Router::new()
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
