//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - All shoes
//! GET  /health                 - Health check
//!
//! # Sections (header navigation, all accept ?sort=newest|price)
//! GET  /sale                   - Shoes with a sale price
//! GET  /new                    - New releases
//! GET  /men                    - Men's shoes
//! GET  /women                  - Women's shoes
//! GET  /kids                   - Kids' shoes
//! GET  /collections            - Full collection
//!
//! # Shoes
//! GET  /shoe/{slug}            - Shoe detail
//!
//! # Pages
//! GET  /help                   - Help (linked from the super header)
//! ```

pub mod pages;
pub mod shoes;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the section routes router, one route per header link.
pub fn section_routes() -> Router<AppState> {
    Router::new()
        .route("/sale", get(shoes::sale))
        .route("/new", get(shoes::new_releases))
        .route("/men", get(shoes::men))
        .route("/women", get(shoes::women))
        .route("/kids", get(shoes::kids))
        .route("/collections", get(shoes::collections))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(shoes::index))
        // Header navigation sections
        .merge(section_routes())
        // Shoe detail
        .route("/shoe/{slug}", get(shoes::show))
        .route(pages::HELP_PATH, get(pages::help))
        .route("/health", get(health))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
