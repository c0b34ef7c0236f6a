use dioxus::prelude::*;

use super::nav_link::NavLink;
use crate::core::nav::{menu_action, menu_items};
use crate::core::{AuthView, Location, MenuAction, MenuSource};
use crate::t;

/// Inline menu for wide viewports.
#[component]
pub fn DesktopMenu(
    auth: AuthView,
    location: Location,
    #[props(default)] source: MenuSource,
    on_logout: EventHandler<()>,
) -> Element {
    let signed_in = auth.is_authenticated();
    let items = menu_items(signed_in, source);

    rsx! {
        nav { class: "menu menu--desktop", aria_label: t!("nav-primary-label"),
            ul { class: "menu__items",
                for item in items {
                    NavLink {
                        key: "{item.path}",
                        to: item.path.clone(),
                        label: item.label.clone(),
                        location: location.clone(),
                    }
                }
                {render_action(menu_action(signed_in), location.clone(), on_logout, None)}
            }
        }
    }
}

/// Drop-down menu for narrow viewports. Every selection, including the
/// login/logout action, is reported through `on_select`.
#[component]
pub fn MobileMenu(
    auth: AuthView,
    location: Location,
    #[props(default)] source: MenuSource,
    open: bool,
    on_select: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let signed_in = auth.is_authenticated();
    let items = menu_items(signed_in, source);
    let class = if open {
        "menu menu--mobile menu--open"
    } else {
        "menu menu--mobile"
    };

    rsx! {
        nav {
            id: "mobile-menu",
            class: "{class}",
            aria_label: t!("nav-primary-label"),
            hidden: !open,
            ul { class: "menu__items",
                for item in items {
                    NavLink {
                        key: "{item.path}",
                        to: item.path.clone(),
                        label: item.label.clone(),
                        location: location.clone(),
                        on_select: Some(on_select),
                    }
                }
                {render_action(menu_action(signed_in), location.clone(), on_logout, Some(on_select))}
            }
        }
    }
}

fn render_action(
    action: MenuAction,
    location: Location,
    on_logout: EventHandler<()>,
    on_select: Option<EventHandler<()>>,
) -> Element {
    match action {
        MenuAction::Login { path } => rsx! {
            NavLink {
                to: path.to_string(),
                label: t!("nav-login"),
                location: location,
                on_select: on_select,
            }
        },
        MenuAction::Logout => rsx! {
            li { class: "nav-item",
                button {
                    r#type: "button",
                    class: "button button--ghost menu__logout",
                    onclick: move |_| {
                        on_logout.call(());
                        if let Some(handler) = on_select {
                            handler.call(());
                        }
                    },
                    {t!("nav-logout")}
                }
            }
        },
    }
}
