use dioxus::prelude::*;

use super::nav_builder::link_to;
use crate::core::Theme;
use crate::t;

const LOGO_SVG: Asset = asset!("/assets/images/logo.svg");

/// Brand mark linking home. The compact theme drops the wordmark.
#[component]
pub fn Logo(#[props(default)] theme: Theme) -> Element {
    let home_label = t!("logo-home-label");
    let name = t!("brand-name");
    let show_wordmark = theme == Theme::Full;

    let mark = rsx! {
        img { class: "logo__mark", src: LOGO_SVG, alt: "{home_label}" }
        if show_wordmark {
            span { class: "logo__wordmark", aria_hidden: "true", "{name}" }
        }
    };

    rsx! {
        div { class: "navbar__brand", {link_to("/", "logo", mark)} }
    }
}
