//! Presentation logic shared by every component: navigation, navbar state,
//! window events, session view and site configuration.

pub mod auth;
pub mod config;
pub mod nav;
pub mod navbar_state;
pub mod window_events;

pub use auth::{AuthView, User};
pub use config::{ConfigError, SiteConfig, Theme};
pub use nav::{Location, MenuAction, MenuSource, NavItem};
pub use navbar_state::{NavbarState, Viewport};
