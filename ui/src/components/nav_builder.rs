use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform hook for rendering links.
///
/// The shared crate only knows paths as strings. A platform crate registers a
/// `NavBuilder` whose `link` turns a target into its router's `Link` (so
/// `ui` never names the platform `Route` enum) and falls back to a plain
/// anchor for targets the router does not own, such as `#features`.
///
/// Example (in platform crate):
/// ```ignore
/// fn nav_link(to: &str, class: &str, children: Element) -> Element {
///     match to.parse::<Route>() {
///         Ok(route) => rsx!(Link { to: route, class: class.to_string(), {children} }),
///         Err(_) => rsx!(a { href: "{to}", class: "{class}", {children} }),
///     }
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder every link renders as a plain anchor.
pub struct NavBuilder {
    pub link: fn(to: &str, class: &str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Renders a link to `to` through the registered builder.
pub fn link_to(to: &str, class: &str, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(to, class, children),
        None => rsx! {
            a { href: "{to}", class: "{class}", {children} }
        },
    }
}
