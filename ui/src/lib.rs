//! Shared UI crate for the Campus Issue Tracker landing site. Components,
//! navigation logic and localized copy live here; platform crates only add a
//! router and a session.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Link rendering hook for platform routers (components/nav_builder.rs)
    pub mod nav_builder;
    pub use nav_builder::{link_to, register_nav, NavBuilder};

    mod logo;
    pub use logo::Logo;

    mod nav_link;
    pub use nav_link::NavLink;

    mod menus;
    pub use menus::{DesktopMenu, MobileMenu};

    mod navbar;
    pub use navbar::Navbar;

    mod hero;
    pub use hero::Hero;

    mod landing;
    pub use landing::LandingPage;
}

/// Shared theme stylesheet; desktop embeds the same file inline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
