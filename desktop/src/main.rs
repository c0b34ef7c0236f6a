#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;
use tracing::info;

use ui::components::{register_nav, LandingPage, NavBuilder, Navbar};
use ui::core::window_events::{use_location, use_window_event_source};
use ui::core::{AuthView, Location, SiteConfig, User};
use ui::views::{LoginPage, SectionPage, SiteFooter};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[layout(DesktopShell)]
        #[route("/login")]
        Login {},
        #[route("/:section")]
        Section { section: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Campus Issue Tracker – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(to: &str, class: &str, children: Element) -> Element {
    if !to.starts_with('#') {
        if let Ok(route) = to.parse::<Route>() {
            return rsx!(Link { to: route, class: class.to_string(), {children} });
        }
    }
    rsx!(a { href: "{to}", class: "{class}", {children} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });
    use_window_event_source();

    let session = use_signal(AuthView::signed_out);
    use_context_provider(|| session);
    use_context_provider(SiteConfig::load);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

fn use_current_location() -> Location {
    use_location(use_route::<Route>().to_string())
}

fn sign_out(mut session: Signal<AuthView>, nav: Navigator) {
    info!("signed out");
    session.set(AuthView::signed_out());
    nav.push(Route::Home {});
}

#[component]
fn Home() -> Element {
    let session = use_context::<Signal<AuthView>>();
    let config = use_context::<SiteConfig>();
    let location = use_current_location();
    let nav = navigator();

    rsx! {
        LandingPage {
            auth: session(),
            location: location,
            config: config,
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_logout: move |_| sign_out(session, nav),
            footer: rsx! { SiteFooter {} },
        }
    }
}

/// A desktop-specific shell around routed pages, so the shared `Navbar`
/// can be paired with the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let session = use_context::<Signal<AuthView>>();
    let config = use_context::<SiteConfig>();
    let location = use_current_location();
    let nav = navigator();

    rsx! {
        Navbar {
            auth: session(),
            location: location,
            config: config,
            on_logout: move |_| sign_out(session, nav),
        }
        main { class: "shell__content", Outlet::<Route> {} }
        SiteFooter {}
    }
}

#[component]
fn Login() -> Element {
    let mut session = use_context::<Signal<AuthView>>();
    let nav = navigator();

    rsx! {
        LoginPage {
            on_sign_in: move |name: String| {
                info!(user = %name, "signed in");
                session.set(AuthView::signed_in(User { display_name: name }));
                nav.push(Route::Section { section: "dashboard".to_string() });
            },
        }
    }
}

#[component]
fn Section(section: String) -> Element {
    rsx! {
        SectionPage { path: format!("/{section}") }
    }
}
