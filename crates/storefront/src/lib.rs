//! Sole & Ankle Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use axum::{Router, http::Request, middleware::from_fn};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary on top of this router.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
