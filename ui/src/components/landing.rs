use dioxus::prelude::*;

use super::hero::Hero;
use super::navbar::Navbar;
use crate::core::{AuthView, Location, SiteConfig, Theme};

const BACKDROP_GRID: Asset = asset!("/assets/images/backdrop-grid.svg");
const BACKDROP_GLOW: Asset = asset!("/assets/images/backdrop-glow.svg");

/// Landing page: decorative backdrop, navbar, hero and the caller's footer.
#[component]
pub fn LandingPage(
    auth: AuthView,
    location: Location,
    #[props(default)] config: SiteConfig,
    on_login: EventHandler<()>,
    on_logout: EventHandler<()>,
    footer: Element,
) -> Element {
    let theme = config.theme;

    rsx! {
        div { class: "landing landing--{theme.as_str()}",
            div { class: "landing__backdrop", aria_hidden: "true",
                img { class: "landing__layer landing__layer--grid", src: BACKDROP_GRID, alt: "" }
                if theme == Theme::Full {
                    img { class: "landing__layer landing__layer--glow", src: BACKDROP_GLOW, alt: "" }
                }
            }

            Navbar {
                auth: auth,
                location: location,
                config: config.clone(),
                on_logout: on_logout,
            }

            main { class: "landing__content",
                Hero { theme: theme, on_login: on_login }
            }

            {footer}
        }
    }
}
