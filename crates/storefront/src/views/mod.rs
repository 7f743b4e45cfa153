//! Display data shared by page templates.

pub mod header;
pub mod shoe_card;

pub use header::{HeaderView, NAV_LINKS, NavLink, NavLinkView};
pub use shoe_card::{Flag, ShoeCardView, VariantStyle};
