//! Router tests driving the full storefront app in-process.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::Path;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use sole_and_ankle_storefront::{
    app,
    catalog::Catalog,
    config::StorefrontConfig,
    middleware::REQUEST_ID_HEADER,
    state::{AppState, Clock},
};
use tower::ServiceExt;

/// Listings dated against a fixed "today" of 2024-06-15.
const CATALOG: &str = r#"[
    {
        "slug": "cosmic-runner",
        "name": "Cosmic Runner",
        "imageSrc": "/static/images/shoes/cosmic-runner.svg",
        "price": "100",
        "salePrice": "50",
        "releaseDate": "2024-06-05",
        "numOfColors": 3,
        "audiences": ["men", "women"]
    },
    {
        "slug": "tide-walker",
        "name": "Tide Walker",
        "imageSrc": "/static/images/shoes/tide-walker.svg",
        "price": "80",
        "releaseDate": "2024-06-05",
        "numOfColors": 1,
        "audiences": ["women"]
    },
    {
        "slug": "court-classic",
        "name": "Court Classic",
        "imageSrc": "/static/images/shoes/court-classic.svg",
        "price": "60",
        "releaseDate": "2022-06-15",
        "numOfColors": 4,
        "audiences": ["kids"]
    }
]"#;

fn test_app() -> Router {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let state = AppState::with_clock(StorefrontConfig::default(), catalog, Clock::Fixed(today));
    app(state)
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// The markup of the card linking to `/shoe/{slug}`.
fn card_html<'a>(html: &'a str, slug: &str) -> &'a str {
    let href = format!("href=\"/shoe/{slug}\"");
    html.split("<a class=\"shoe-card ")
        .skip(1)
        .find(|card| card.contains(&href))
        .unwrap_or_else(|| panic!("no card for {slug}"))
}

/// `(label, path)` of every primary navigation link, in document order.
fn nav_links(html: &str) -> Vec<(String, String)> {
    html.split("class=\"main-nav__link\" href=\"")
        .skip(1)
        .map(|rest| {
            let (path, rest) = rest.split_once('"').unwrap();
            let (_, rest) = rest.split_once('>').unwrap();
            let (label, _) = rest.split_once("</a>").unwrap();
            (label.to_string(), path.to_string())
        })
        .collect()
}

fn card_order(html: &str) -> Vec<String> {
    html.split("<a class=\"shoe-card ")
        .skip(1)
        .map(|card| {
            let (_, rest) = card.split_once("href=\"/shoe/").unwrap();
            rest.split_once('"').unwrap().0.to_string()
        })
        .collect()
}

#[tokio::test]
async fn test_on_sale_card_strikes_price_and_shows_sale_price() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);

    let card = card_html(&html, "cosmic-runner");
    assert!(card.contains("shoe-card--on-sale"));
    assert!(card.contains("shoe-card__price--struck\">$100.00</del>"));
    assert!(card.contains("shoe-card__sale-price\">$50.00</span>"));
    assert!(card.contains("flag--sale\">Sale</div>"));
    assert!(!card.contains("Just released!"));
    assert!(card.contains("3 Colors"));
}

#[tokio::test]
async fn test_new_release_card() {
    let (_, html) = get("/").await;

    let card = card_html(&html, "tide-walker");
    assert!(card.contains("shoe-card--new-release"));
    assert!(card.contains("flag--new-release\">Just released!</div>"));
    assert!(card.contains("<span class=\"shoe-card__price\">$80.00</span>"));
    assert!(!card.contains("--struck"));
    assert!(!card.contains("shoe-card__sale-price"));
    assert!(card.contains("1 Color<"));
}

#[tokio::test]
async fn test_default_card() {
    let (_, html) = get("/").await;

    let card = card_html(&html, "court-classic");
    assert!(card.contains("shoe-card--default"));
    assert!(!card.contains("class=\"flag"));
    assert!(card.contains("<span class=\"shoe-card__price\">$60.00</span>"));
    assert!(!card.contains("shoe-card__sale-price"));
    assert!(card.contains("4 Colors"));
}

#[tokio::test]
async fn test_header_has_six_fixed_links_on_every_page() {
    let expected: Vec<(String, String)> = [
        ("Sale", "/sale"),
        ("New Releases", "/new"),
        ("Men", "/men"),
        ("Women", "/women"),
        ("Kids", "/kids"),
        ("Collections", "/collections"),
    ]
    .iter()
    .map(|(label, path)| ((*label).to_string(), (*path).to_string()))
    .collect();

    for uri in ["/", "/sale", "/kids", "/shoe/court-classic"] {
        let (status, html) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(nav_links(&html), expected, "{uri}");
        assert!(html.contains("Free shipping on domestic orders over $75!"));
        assert!(html.contains("class=\"super-header__link\" href=\"/help\">Help</a>"));
    }
}

#[tokio::test]
async fn test_help_page() {
    let (status, html) = get("/help").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("came out in the last 30 days"));
    assert_eq!(nav_links(&html).len(), 6);
    assert!(!html.contains("aria-current=\"page\""));
}

#[tokio::test]
async fn test_shipped_catalog_images_are_served() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = StorefrontConfig {
        static_dir: root.join("static"),
        ..StorefrontConfig::default()
    };
    let catalog = Catalog::load(&root.join("content/shoes.json")).unwrap();
    let router = app(AppState::new(config, catalog));

    let response = router
        .oneshot(
            Request::get("/static/images/shoes/cosmic-runner.svg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
}

#[tokio::test]
async fn test_current_section_marked() {
    let (_, html) = get("/women").await;
    assert!(html.contains("href=\"/women\" aria-current=\"page\""));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
}

#[tokio::test]
async fn test_sale_section() {
    let (_, html) = get("/sale").await;
    assert_eq!(card_order(&html), vec!["cosmic-runner"]);
}

#[tokio::test]
async fn test_new_section_includes_new_shoe_on_sale() {
    let (_, html) = get("/new").await;
    let mut slugs = card_order(&html);
    slugs.sort();
    assert_eq!(slugs, vec!["cosmic-runner", "tide-walker"]);

    // Still badged as a sale in the new releases grid
    let card = card_html(&html, "cosmic-runner");
    assert!(card.contains("flag--sale\">Sale</div>"));
}

#[tokio::test]
async fn test_sort_by_price() {
    let (_, html) = get("/?sort=price").await;
    assert_eq!(
        card_order(&html),
        vec!["cosmic-runner", "court-classic", "tide-walker"]
    );
}

#[tokio::test]
async fn test_sort_newest_is_default() {
    let (_, html) = get("/").await;
    assert_eq!(
        card_order(&html),
        vec!["cosmic-runner", "tide-walker", "court-classic"]
    );
}

#[tokio::test]
async fn test_unknown_sort_is_bad_request() {
    let (status, _) = get("/?sort=popularity").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_section() {
    let (status, html) = get("/men?sort=newest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card_order(&html), vec!["cosmic-runner"]);

    let catalog = Catalog::from_json("[]").unwrap();
    let state = AppState::new(StorefrontConfig::default(), catalog);
    let response = app(state)
        .oneshot(Request::get("/kids").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("No shoes here yet."));
}

#[tokio::test]
async fn test_shoe_detail() {
    let (status, html) = get("/shoe/tide-walker").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("June 5, 2024"));
    assert!(html.contains("Just released!"));
    assert!(html.contains("<dd>Women</dd>"));
}

#[tokio::test]
async fn test_unknown_shoe_is_not_found() {
    let (status, _) = get("/shoe/no-such-shoe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get("/shoe/Not%20A%20Slug").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_request_id_and_security_headers() {
    let response = test_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}
