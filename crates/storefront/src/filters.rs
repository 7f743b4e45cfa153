//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the URL of the stylesheet.
///
/// Points at the content-hashed copy produced by `build.rs` when one exists,
/// otherwise at the plain `main.css`.
///
/// Usage in templates: `{{ ""|stylesheet_url }}`
#[askama::filter_fn]
pub fn stylesheet_url(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_url_for(env!("CSS_HASH")))
}

fn stylesheet_url_for(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}
