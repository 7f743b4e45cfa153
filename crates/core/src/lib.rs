//! Sole & Ankle Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! shoe listings, prices, and the rules that decide how a shoe card is
//! displayed.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no clock access. Callers pass "today" in explicitly, which keeps every
//! rule here deterministic and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Slugs, prices, shoe listings, display variants
//! - [`format`] - Display text helpers (pluralization)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod types;

pub use format::pluralize;
pub use types::*;
