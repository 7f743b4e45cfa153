//! Static page route handlers.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::HeaderView;

/// Path of the help page linked from the super header.
pub const HELP_PATH: &str = "/help";

/// Help page template.
#[derive(Template)]
#[template(path = "pages/help.html")]
pub struct HelpTemplate {
    pub header: HeaderView,
    pub new_release_days: u32,
}

/// Display the help page.
///
/// # Errors
///
/// Returns `AppError::Template` if the page fails to render.
#[instrument(skip(state))]
pub async fn help(State(state): State<AppState>) -> Result<Html<String>> {
    let template = HelpTemplate {
        header: state.header(Some(HELP_PATH)),
        new_release_days: state.config().new_release_window.days(),
    };

    Ok(Html(template.render()?))
}
