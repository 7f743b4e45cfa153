//! Core types for Sole & Ankle.
//!
//! This module provides type-safe wrappers for the shoe catalog domain.

pub mod price;
pub mod shoe;
pub mod slug;
pub mod variant;

pub use price::{CurrencyCode, CurrencyCodeError, Price, format_price};
pub use shoe::{Audience, ShoeListing};
pub use slug::{Slug, SlugError};
pub use variant::{DEFAULT_NEW_RELEASE_DAYS, DisplayVariant, RecencyWindow, is_new_release};
