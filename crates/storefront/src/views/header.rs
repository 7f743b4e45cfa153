//! Site header: super header, logo, primary navigation.

/// A navigation entry in the main header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Primary navigation, in display order. The first entry gets the accent color.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "Sale",
        path: "/sale",
    },
    NavLink {
        label: "New Releases",
        path: "/new",
    },
    NavLink {
        label: "Men",
        path: "/men",
    },
    NavLink {
        label: "Women",
        path: "/women",
    },
    NavLink {
        label: "Kids",
        path: "/kids",
    },
    NavLink {
        label: "Collections",
        path: "/collections",
    },
];

/// Navigation link display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub path: &'static str,
    /// Set on the link for the page being viewed (`aria-current="page"`).
    pub is_current: bool,
}

/// Header display data for templates.
///
/// Rendered by `partials/header.html`, which every page includes.
#[derive(Debug, Clone)]
pub struct HeaderView {
    pub promo_message: String,
    pub links: Vec<NavLinkView>,
}

impl HeaderView {
    /// Build the header for a page served at `current_path`.
    #[must_use]
    pub fn new(promo_message: &str, current_path: Option<&str>) -> Self {
        let links = NAV_LINKS
            .iter()
            .map(|link| NavLinkView {
                label: link.label,
                path: link.path,
                is_current: current_path == Some(link.path),
            })
            .collect();

        Self {
            promo_message: promo_message.to_string(),
            links,
        }
    }
}
