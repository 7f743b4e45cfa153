//! Shoe listing records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slug::Slug;
use super::variant::{DisplayVariant, RecencyWindow, is_new_release};

/// Who a shoe is made for. Drives the Men / Women / Kids sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Men,
    Women,
    Kids,
}

impl Audience {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
        }
    }
}

/// A shoe as supplied by the catalog, read-only for the length of a render.
///
/// Deserializes from the camelCase JSON used by the catalog file:
///
/// ```json
/// {
///   "slug": "cosmic-runner",
///   "name": "Cosmic Runner",
///   "imageSrc": "/static/images/shoes/cosmic-runner.svg",
///   "price": "100.00",
///   "salePrice": "50.00",
///   "releaseDate": "2024-06-05",
///   "numOfColors": 3,
///   "audiences": ["men", "women"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    /// Regular price in major currency units.
    pub price: Decimal,
    /// Discounted price. Presence means the shoe is on sale.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    pub release_date: NaiveDate,
    pub num_of_colors: u32,
    #[serde(default)]
    pub audiences: Vec<Audience>,
}

impl ShoeListing {
    /// Display variant of this listing on `today`.
    #[must_use]
    pub fn variant(&self, today: NaiveDate, window: RecencyWindow) -> DisplayVariant {
        DisplayVariant::classify(self.sale_price, self.release_date, today, window)
    }

    /// Whether a sale price is set.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Whether the shoe was released within `window` of `today`.
    #[must_use]
    pub fn is_new(&self, today: NaiveDate, window: RecencyWindow) -> bool {
        is_new_release(self.release_date, today, window)
    }

    /// Price a customer pays: the sale price when set, else the regular price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether this shoe is made for `audience`.
    #[must_use]
    pub fn is_for(&self, audience: Audience) -> bool {
        self.audiences.contains(&audience)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "slug": "cosmic-runner",
        "name": "Cosmic Runner",
        "imageSrc": "/static/images/shoes/cosmic-runner.svg",
        "price": "100.00",
        "salePrice": "50.00",
        "releaseDate": "2024-06-05",
        "numOfColors": 3,
        "audiences": ["men", "kids"]
    }"#;

    #[test]
    fn test_deserialize_catalog_shape() {
        let shoe: ShoeListing = serde_json::from_str(JSON).unwrap();
        assert_eq!(shoe.slug.as_str(), "cosmic-runner");
        assert_eq!(shoe.price, Decimal::new(10_000, 2));
        assert_eq!(shoe.sale_price, Some(Decimal::new(5_000, 2)));
        assert_eq!(shoe.release_date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(shoe.num_of_colors, 3);
        assert!(shoe.is_for(Audience::Men));
        assert!(!shoe.is_for(Audience::Women));
    }

    #[test]
    fn test_optional_fields_default() {
        let shoe: ShoeListing = serde_json::from_str(
            r#"{
                "slug": "plain",
                "name": "Plain",
                "imageSrc": "/plain.jpg",
                "price": "60",
                "releaseDate": "2020-01-01",
                "numOfColors": 4
            }"#,
        )
        .unwrap();
        assert!(!shoe.is_on_sale());
        assert!(shoe.audiences.is_empty());
        assert_eq!(shoe.effective_price(), Decimal::from(60));
    }

    #[test]
    fn test_negative_color_count_rejected() {
        let result: Result<ShoeListing, _> = serde_json::from_str(
            r#"{
                "slug": "plain",
                "name": "Plain",
                "imageSrc": "/plain.jpg",
                "price": "60",
                "releaseDate": "2020-01-01",
                "numOfColors": -1
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_variant_and_effective_price() {
        let shoe: ShoeListing = serde_json::from_str(JSON).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            shoe.variant(today, RecencyWindow::default()),
            DisplayVariant::OnSale
        );
        assert!(shoe.is_new(today, RecencyWindow::default()));
        assert_eq!(shoe.effective_price(), Decimal::new(5_000, 2));
    }
}
