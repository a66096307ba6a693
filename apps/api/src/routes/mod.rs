pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::skills::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/skills", get(handlers::handle_list_skills))
        .route("/skills/:keyword", get(handlers::handle_get_skill))
        // Job descriptions of any length are accepted.
        .route(
            "/analyze-skills",
            post(handlers::handle_analyze_skills).layer(DefaultBodyLimit::disable()),
        )
        .route("/analyze-gap", post(handlers::handle_analyze_gap))
        .layer(CatchPanicLayer::custom(panic_response))
}
