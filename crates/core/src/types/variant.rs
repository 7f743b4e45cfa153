//! Display variants for shoe cards.
//!
//! A shoe card is always in exactly one of three states. The state is
//! derived from the listing each time it is rendered and never stored.
//!
//! Classification is a strict priority list, first match wins:
//!
//! 1. A sale price is present: [`DisplayVariant::OnSale`]
//! 2. Released within the recency window: [`DisplayVariant::NewRelease`]
//! 3. Otherwise: [`DisplayVariant::Default`]
//!
//! A shoe that is both on sale and new is shown as on sale.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days after release during which a shoe counts as a new release.
pub const DEFAULT_NEW_RELEASE_DAYS: u32 = 30;

/// The span of days after a release date during which a shoe is "new".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    /// Create a window covering `days` days.
    #[must_use]
    pub const fn from_days(days: u32) -> Self {
        Self { days }
    }

    /// Length of the window in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        self.days
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::from_days(DEFAULT_NEW_RELEASE_DAYS)
    }
}

/// Whether a shoe released on `release_date` is still new on `today`.
///
/// Holds when fewer than `window.days()` whole days have elapsed. Release
/// dates in the future have a negative elapsed time and are always new.
#[must_use]
pub fn is_new_release(release_date: NaiveDate, today: NaiveDate, window: RecencyWindow) -> bool {
    let elapsed = today.signed_duration_since(release_date).num_days();
    elapsed < i64::from(window.days())
}

/// Which flag and price treatment a shoe card uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    /// A sale price is active.
    OnSale,
    /// Released within the recency window.
    NewRelease,
    /// Neither on sale nor new.
    Default,
}

impl DisplayVariant {
    /// All variants, in classification priority order.
    pub const ALL: [Self; 3] = [Self::OnSale, Self::NewRelease, Self::Default];

    /// Select the variant for a listing.
    #[must_use]
    pub fn classify(
        sale_price: Option<Decimal>,
        release_date: NaiveDate,
        today: NaiveDate,
        window: RecencyWindow,
    ) -> Self {
        if sale_price.is_some() {
            Self::OnSale
        } else if is_new_release(release_date, today, window) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    /// Badge text shown over the shoe image, if any.
    #[must_use]
    pub const fn badge(self) -> Option<&'static str> {
        match self {
            Self::OnSale => Some("Sale"),
            Self::NewRelease => Some("Just released!"),
            Self::Default => None,
        }
    }

    /// Whether the regular price is struck through and a sale price shown.
    #[must_use]
    pub const fn is_discounted(self) -> bool {
        matches!(self, Self::OnSale)
    }

    /// Stable kebab-case name, used for CSS modifiers and logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
