//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::views::HeaderView;

/// Source of "today" for new-release checks.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Current UTC date.
    System,
    /// A fixed date, for tests and previews.
    Fixed(NaiveDate),
}

impl Clock {
    /// The current date according to this clock.
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::System => Utc::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the loaded catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    clock: Clock,
}

impl AppState {
    /// Create a new application state using the system clock.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_clock(config, catalog, Clock::System)
    }

    /// Create a new application state with an explicit clock.
    #[must_use]
    pub fn with_clock(config: StorefrontConfig, catalog: Catalog, clock: Clock) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                clock,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shoe catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Today's date for new-release checks.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.inner.clock.today()
    }

    /// Header for a page served at `current_path`.
    #[must_use]
    pub fn header(&self, current_path: Option<&str>) -> HeaderView {
        HeaderView::new(&self.inner.config.promo_message, current_path)
    }
}
