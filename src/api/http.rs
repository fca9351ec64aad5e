//! HTTP server setup with Axum

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Request},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;

use super::error::ApiError;
use super::rest::{generate, history, stats};
use super::state::AppState;

/// JSON API routes only, with middleware and a JSON 404 fallback
pub fn create_router(state: Arc<AppState>) -> Router {
    with_middleware(api_routes(state).fallback(not_found))
}

/// Full application: API routes, generated images under `/images`, and the
/// static site from `public_dir` for everything else
pub fn create_app(state: Arc<AppState>, images_dir: &Path, public_dir: &Path) -> Router {
    let site = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    let router = api_routes(state)
        .nest_service("/images", ServeDir::new(images_dir))
        .fallback_service(site);

    with_middleware(router)
}

fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/generate-qr", post(generate::generate_qr))
        .route("/api/generate", post(generate::generate_qr))
        .route("/api/history", get(history::get_history))
        .route("/api/save-to-history", post(history::save_to_history))
        .route("/api/stats", get(stats::get_stats))
        .with_state(state)
}

fn with_middleware(router: Router) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    ApiError::Internal(detail).into_response()
}
