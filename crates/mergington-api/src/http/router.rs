//! Axum router configuration with middleware.
//!
//! Routes:
//! - `GET /` redirects (307) to the bundled page at `/static/index.html`
//! - `GET /activities`, `POST /activities/{name}/signup`,
//!   `POST /activities/{name}/unregister`
//! - `GET /health`
//! - `/static/*` served from `ServerConfig::static_dir`
//!
//! Unknown paths answer 404 and known paths with the wrong method answer
//! 405, both with a `{"detail": ...}` body.
//!
//! Middleware: CORS, tracing.

use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Landing page the root path redirects to.
const INDEX_PATH: &str = "/static/index.html";

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(handlers::activity::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activity::sign_up),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activity::unregister),
        )
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
