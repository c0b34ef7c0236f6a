use dioxus::prelude::*;

use crate::core::nav::display_label;
use crate::t;

/// Placeholder for routed pages that live outside the landing site.
#[component]
pub fn SectionPage(path: String) -> Element {
    let title = display_label(&path);

    rsx! {
        section { class: "page page-section",
            h1 { "{title}" }
            p { {t!("section-placeholder")} }
        }
    }
}
