use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { id: "contact", class: "site-footer",
            p { class: "site-footer__contact", {t!("footer-contact")} }
            p { class: "site-footer__rights", "© " {t!("footer-rights")} }
        }
    }
}
