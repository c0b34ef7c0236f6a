use dioxus::prelude::*;

use super::nav_builder::link_to;
use crate::core::Theme;
use crate::t;

const HERO_ART: Asset = asset!("/assets/images/hero-campus.svg");

#[component]
pub fn Hero(#[props(default)] theme: Theme, on_login: EventHandler<()>) -> Element {
    let learn_more = rsx! { {t!("hero-cta-learn")} };

    rsx! {
        section { id: "hero", class: "hero hero--{theme.as_str()}",
            div { class: "hero__copy",
                p { class: "hero__eyebrow", {t!("hero-eyebrow")} }
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__tagline", {t!("hero-tagline")} }
                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| on_login.call(()),
                        {t!("hero-cta-report")}
                    }
                    {link_to("#features", "button button--ghost", learn_more)}
                }
            }
            if theme == Theme::Full {
                img { class: "hero__art", src: HERO_ART, alt: "", aria_hidden: "true" }
            }
        }

        Highlights {}
        About {}
    }
}

#[component]
fn Highlights() -> Element {
    let cards = [
        (t!("highlight-report-title"), t!("highlight-report-body")),
        (t!("highlight-track-title"), t!("highlight-track-body")),
        (t!("highlight-notify-title"), t!("highlight-notify-body")),
    ];

    rsx! {
        section { id: "features", class: "highlights",
            h2 { class: "highlights__title", {t!("highlights-title")} }
            ul { class: "highlights__grid",
                for (title, body) in cards {
                    li { key: "{title}", class: "highlight",
                        h3 { class: "highlight__title", "{title}" }
                        p { class: "highlight__body", "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { {t!("about-title")} }
            p { {t!("about-body")} }
        }
    }
}
