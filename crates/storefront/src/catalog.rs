//! In-memory shoe catalog.
//!
//! The catalog is read from a JSON file once at startup and shared
//! read-only between handlers. Each navigation section is a filtered,
//! sorted view over the same listings.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use sole_and_ankle_core::{Audience, RecencyWindow, ShoeListing, Slug};
use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate shoe slug: {0}")]
    DuplicateSlug(Slug),
}

/// A shoe grid reachable from the header (or the home page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    All,
    Sale,
    NewReleases,
    Men,
    Women,
    Kids,
    Collections,
}

impl Section {
    /// Request path for this section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::All => "/",
            Self::Sale => "/sale",
            Self::NewReleases => "/new",
            Self::Men => "/men",
            Self::Women => "/women",
            Self::Kids => "/kids",
            Self::Collections => "/collections",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::All => "All Shoes",
            Self::Sale => "Sale",
            Self::NewReleases => "New Releases",
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
            Self::Collections => "Collections",
        }
    }

    /// Whether `shoe` belongs in this section on `today`.
    ///
    /// Sale and New Releases use the raw sale / recency checks, not the
    /// card variant, so a new shoe on sale is listed in both.
    #[must_use]
    pub fn includes(self, shoe: &ShoeListing, today: NaiveDate, window: RecencyWindow) -> bool {
        match self {
            Self::All | Self::Collections => true,
            Self::Sale => shoe.is_on_sale(),
            Self::NewReleases => shoe.is_new(today, window),
            Self::Men => shoe.is_for(Audience::Men),
            Self::Women => shoe.is_for(Audience::Women),
            Self::Kids => shoe.is_for(Audience::Kids),
        }
    }
}

/// Ordering for a shoe grid, selected with `?sort=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent release first.
    #[default]
    Newest,
    /// Lowest price paid first (sale price when set).
    Price,
}

impl SortOrder {
    /// Query string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Price => "price",
        }
    }

    fn sort(self, shoes: &mut [&ShoeListing]) {
        match self {
            Self::Newest => shoes.sort_by(|a, b| {
                b.release_date
                    .cmp(&a.release_date)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            Self::Price => shoes.sort_by(|a, b| {
                a.effective_price()
                    .cmp(&b.effective_price())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
    }
}

/// Shoe catalog store that holds all listings in memory.
#[derive(Debug, Clone)]
pub struct Catalog {
    shoes: Arc<Vec<ShoeListing>>,
    by_slug: Arc<HashMap<Slug, usize>>,
}

impl Catalog {
    /// Load the catalog from a JSON array of listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid listing
    /// array, or contains two listings with the same slug.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            shoes = catalog.len(),
            "Loaded shoe catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid listing array or has
    /// duplicate slugs.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let shoes: Vec<ShoeListing> = serde_json::from_str(raw)?;
        Self::from_listings(shoes)
    }

    /// Build a catalog from already-parsed listings.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateSlug` if two listings share a slug.
    pub fn from_listings(shoes: Vec<ShoeListing>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(shoes.len());
        for (index, shoe) in shoes.iter().enumerate() {
            if by_slug.insert(shoe.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(shoe.slug.clone()));
            }
        }

        Ok(Self {
            shoes: Arc::new(shoes),
            by_slug: Arc::new(by_slug),
        })
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    /// Whether the catalog has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Look up a listing by slug.
    #[must_use]
    pub fn find(&self, slug: &Slug) -> Option<&ShoeListing> {
        self.by_slug
            .get(slug)
            .and_then(|&index| self.shoes.get(index))
    }

    /// Listings in `section`, ordered by `sort`.
    #[must_use]
    pub fn section(
        &self,
        section: Section,
        sort: SortOrder,
        today: NaiveDate,
        window: RecencyWindow,
    ) -> Vec<&ShoeListing> {
        let mut shoes: Vec<&ShoeListing> = self
            .shoes
            .iter()
            .filter(|shoe| section.includes(shoe, today, window))
            .collect();
        sort.sort(&mut shoes);
        shoes
    }
}
