use dioxus::prelude::*;

use crate::t;

/// Demo sign-in form. The platform's auth collaborator decides what a
/// submitted name means.
#[component]
pub fn LoginPage(on_sign_in: EventHandler<String>) -> Element {
    let mut name = use_signal(String::new);
    let ready = !name().trim().is_empty();

    rsx! {
        section { class: "page page-login",
            h1 { {t!("login-title")} }
            form {
                class: "login-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let entered = name().trim().to_string();
                    if !entered.is_empty() {
                        on_sign_in.call(entered);
                    }
                },
                label { r#for: "login-name", {t!("login-name-label")} }
                input {
                    id: "login-name",
                    r#type: "text",
                    autocomplete: "name",
                    placeholder: t!("login-name-placeholder"),
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: !ready,
                    {t!("login-submit")}
                }
            }
        }
    }
}
