use dioxus::prelude::*;

use super::nav_builder::link_to;
use crate::core::Location;

const LINK_CLASS: &str = "nav-link";
const ACTIVE_LINK_CLASS: &str = "nav-link nav-link--active";

/// A single menu anchor, styled active when `location` matches `to`.
///
/// `on_select` fires after the click reaches the link; the mobile menu uses
/// it to close itself.
#[component]
pub fn NavLink(
    to: String,
    label: String,
    location: Location,
    on_select: Option<EventHandler<()>>,
) -> Element {
    let class = if location.is_active(&to) {
        ACTIVE_LINK_CLASS
    } else {
        LINK_CLASS
    };

    rsx! {
        li {
            class: "nav-item",
            onclick: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(());
                }
            },
            {link_to(&to, class, rsx! { "{label}" })}
        }
    }
}
