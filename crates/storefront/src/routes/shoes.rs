//! Shoe grid and shoe detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State, rejection::QueryRejection};
use serde::Deserialize;
use sole_and_ankle_core::Slug;
use tracing::instrument;

use crate::catalog::{Section, SortOrder};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::views::{HeaderView, ShoeCardView};

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub sort: Option<SortOrder>,
}

/// Sort option display data for templates.
#[derive(Clone)]
pub struct SortOptionView {
    pub label: &'static str,
    pub href: String,
    pub is_selected: bool,
}

/// Shoe grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/index.html")]
pub struct ShoesIndexTemplate {
    pub header: HeaderView,
    pub heading: &'static str,
    pub sort_options: Vec<SortOptionView>,
    pub cards: Vec<ShoeCardView>,
}

/// Shoe detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/show.html")]
pub struct ShoeShowTemplate {
    pub header: HeaderView,
    pub card: ShoeCardView,
    pub release_date: String,
    pub audiences: Vec<&'static str>,
}

fn sort_options(section: Section, selected: SortOrder) -> Vec<SortOptionView> {
    [(SortOrder::Newest, "Newest Releases"), (SortOrder::Price, "Price")]
        .into_iter()
        .map(|(order, label)| SortOptionView {
            label,
            href: format!("{}?sort={}", section.path(), order.as_str()),
            is_selected: order == selected,
        })
        .collect()
}

fn render_section(
    state: &AppState,
    section: Section,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let sort = query.sort.unwrap_or_default();

    let config = state.config();
    let today = state.today();
    let window = config.new_release_window;

    let cards: Vec<ShoeCardView> = state
        .catalog()
        .section(section, sort, today, window)
        .into_iter()
        .map(|shoe| ShoeCardView::new(shoe, today, window, config.currency))
        .collect();

    tracing::debug!(
        section = section.heading(),
        sort = sort.as_str(),
        shoes = cards.len(),
        "Rendering shoe grid"
    );

    Ok(ShoesIndexTemplate {
        header: state.header(Some(section.path())),
        heading: section.heading(),
        sort_options: sort_options(section, sort),
        cards,
    })
}

/// Display every shoe.
#[instrument(skip(state, query))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::All, query)
}

/// Display shoes with a sale price.
#[instrument(skip(state, query))]
pub async fn sale(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::Sale, query)
}

/// Display shoes released within the new-release window.
#[instrument(skip(state, query))]
pub async fn new_releases(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::NewReleases, query)
}

/// Display men's shoes.
#[instrument(skip(state, query))]
pub async fn men(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::Men, query)
}

/// Display women's shoes.
#[instrument(skip(state, query))]
pub async fn women(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::Women, query)
}

/// Display kids' shoes.
#[instrument(skip(state, query))]
pub async fn kids(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::Kids, query)
}

/// Display the full collection.
#[instrument(skip(state, query))]
pub async fn collections(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ShoesIndexTemplate> {
    render_section(&state, Section::Collections, query)
}

/// Display shoe detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
) -> Result<ShoeShowTemplate> {
    let not_found = || AppError::NotFound(format!("shoe {raw_slug}"));

    let slug = Slug::parse(&raw_slug).map_err(|_| not_found())?;
    let shoe = state.catalog().find(&slug).ok_or_else(not_found)?;

    let config = state.config();
    let card = ShoeCardView::new(
        shoe,
        state.today(),
        config.new_release_window,
        config.currency,
    );

    Ok(ShoeShowTemplate {
        header: state.header(None),
        card,
        release_date: shoe.release_date.format("%B %-d, %Y").to_string(),
        audiences: shoe.audiences.iter().map(|a| a.label()).collect(),
    })
}
