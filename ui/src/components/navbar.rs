use dioxus::prelude::*;
use tracing::trace;

use super::logo::Logo;
use super::menus::{DesktopMenu, MobileMenu};
use crate::core::window_events::{self, use_window_events, WindowEvent};
use crate::core::{AuthView, Location, NavbarState, SiteConfig, Viewport};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header: logo plus the menu variant that fits the current viewport.
///
/// Menu-open and scrolled flags are local to this instance. The window
/// listener is held by a hook and released when the navbar unmounts.
#[component]
pub fn Navbar(
    auth: AuthView,
    location: Location,
    #[props(default)] config: SiteConfig,
    on_logout: EventHandler<()>,
) -> Element {
    let breakpoint = config.mobile_breakpoint_px;
    let mut state = use_signal(NavbarState::default);
    let viewport = use_signal(move || {
        window_events::last_width()
            .map(|width| Viewport::from_width(width, breakpoint))
            .unwrap_or_default()
    });

    use_window_events(move |event| {
        let mut state = state;
        let mut viewport = viewport;
        match event {
            WindowEvent::Scroll { offset } => {
                let mut next = *state.peek();
                if next.observe_scroll(*offset) {
                    state.set(next);
                }
            }
            WindowEvent::Resize { width } => {
                let measured = Viewport::from_width(*width, breakpoint);
                if *viewport.peek() != measured {
                    viewport.set(measured);
                }
                if measured == Viewport::Desktop && state.peek().is_menu_open {
                    state.with_mut(NavbarState::close_menu);
                }
            }
            WindowEvent::Hash { .. } => {}
        }
    });

    let snapshot = state();
    let current_viewport = viewport();
    trace!(?snapshot, viewport = ?current_viewport, "navbar render");

    let class = format!(
        "navbar navbar--{}{}",
        config.theme.as_str(),
        if snapshot.is_scrolled { " navbar--scrolled" } else { "" }
    );
    let toggle_label = t!("nav-menu-toggle");
    let toggle_class = if snapshot.is_menu_open {
        "navbar__toggle navbar__toggle--open"
    } else {
        "navbar__toggle"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "{class}",
            div { class: "navbar__inner",
                Logo { theme: config.theme }

                if let Some(name) = auth.display_name() {
                    span { class: "navbar__user", {t!("nav-signed-in-as", name = name)} }
                }

                if current_viewport == Viewport::Desktop {
                    DesktopMenu {
                        auth: auth.clone(),
                        location: location.clone(),
                        source: config.menu_source,
                        on_logout: on_logout,
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "{toggle_class}",
                        aria_label: "{toggle_label}",
                        aria_controls: "mobile-menu",
                        aria_expanded: "{snapshot.is_menu_open}",
                        onclick: move |_| state.with_mut(NavbarState::toggle_menu),
                        span { class: "navbar__toggle-bar" }
                        span { class: "navbar__toggle-bar" }
                        span { class: "navbar__toggle-bar" }
                    }
                    MobileMenu {
                        auth: auth.clone(),
                        location: location.clone(),
                        source: config.menu_source,
                        open: snapshot.is_menu_open,
                        on_select: move |_| state.with_mut(NavbarState::close_menu),
                        on_logout: on_logout,
                    }
                }
            }
        }
    }
}
