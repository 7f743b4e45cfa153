//! Shoe card view model.
//!
//! The variant is computed once per card; everything that differs between
//! variants comes from [`VariantStyle::of`], so templates never re-derive it.

use chrono::NaiveDate;
use sole_and_ankle_core::{
    CurrencyCode, DisplayVariant, RecencyWindow, ShoeListing, format_price, pluralize,
};

/// Flag shown over the shoe image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub text: &'static str,
    /// CSS class selecting the flag color.
    pub class: &'static str,
}

/// Per-variant presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    pub flag: Option<Flag>,
    /// Regular price is struck through and the sale price shown beside it.
    pub discounted: bool,
}

impl VariantStyle {
    /// Presentation for `variant`.
    #[must_use]
    pub const fn of(variant: DisplayVariant) -> Self {
        match variant {
            DisplayVariant::OnSale => Self {
                flag: Some(Flag {
                    text: "Sale",
                    class: "flag--sale",
                }),
                discounted: true,
            },
            DisplayVariant::NewRelease => Self {
                flag: Some(Flag {
                    text: "Just released!",
                    class: "flag--new-release",
                }),
                discounted: false,
            },
            DisplayVariant::Default => Self {
                flag: None,
                discounted: false,
            },
        }
    }
}

/// Shoe card display data for templates.
///
/// Rendered by `partials/shoe_card.html`.
#[derive(Debug, Clone)]
pub struct ShoeCardView {
    pub variant: DisplayVariant,
    pub href: String,
    pub name: String,
    pub image_src: String,
    /// Formatted regular price.
    pub price: String,
    /// Struck-through regular price (on-sale cards only).
    pub price_struck: bool,
    /// Formatted sale price (on-sale cards only).
    pub sale_price: Option<String>,
    pub flag: Option<Flag>,
    pub num_of_colors: u32,
    /// "Color" or "Colors", matching `num_of_colors`.
    pub color_label: String,
}

impl ShoeCardView {
    /// Build the card for `shoe` as of `today`.
    #[must_use]
    pub fn new(
        shoe: &ShoeListing,
        today: NaiveDate,
        window: RecencyWindow,
        currency: CurrencyCode,
    ) -> Self {
        let variant = shoe.variant(today, window);
        let style = VariantStyle::of(variant);

        let sale_price = if style.discounted {
            shoe.sale_price.map(|amount| format_price(amount, currency))
        } else {
            None
        };

        Self {
            variant,
            href: shoe.slug.detail_path(),
            name: shoe.name.clone(),
            image_src: shoe.image_src.clone(),
            price: format_price(shoe.price, currency),
            price_struck: style.discounted,
            sale_price,
            flag: style.flag,
            num_of_colors: shoe.num_of_colors,
            color_label: pluralize("Color", shoe.num_of_colors),
        }
    }

    /// Full color text, e.g. "3 Colors".
    #[must_use]
    pub fn color_text(&self) -> String {
        format!("{} {}", self.num_of_colors, self.color_label)
    }
}
