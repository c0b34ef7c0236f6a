//! Navigation descriptors, menu derivation and active-state resolution.
//!
//! Everything here is plain data so the menus can be reasoned about (and
//! tested) without a renderer.

use serde::{Deserialize, Serialize};

/// Label used for the root path instead of an empty string.
pub const HOME_LABEL: &str = "Home";

/// Target of the guest "Login" action.
pub const LOGIN_PATH: &str = "/login";

const MEMBER_PATHS: &[&str] = &["/dashboard", "/profile", "/settings"];
const GUEST_ROUTE_PATHS: &[&str] = &["/", "/features", "/about", "/contact"];
const GUEST_ANCHOR_PATHS: &[&str] = &["/", "#features", "#about", "#contact"];

/// A navigable destination shown in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: String,
}

impl NavItem {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let label = display_label(&path);
        Self { path, label }
    }
}

/// Where guest menu entries point: separate routes or in-page anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSource {
    #[default]
    Routes,
    Anchors,
}

impl MenuSource {
    fn guest_paths(self) -> &'static [&'static str] {
        match self {
            Self::Routes => GUEST_ROUTE_PATHS,
            Self::Anchors => GUEST_ANCHOR_PATHS,
        }
    }
}

/// Trailing entry of every menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Login { path: &'static str },
    Logout,
}

/// Turns a path into its menu label.
///
/// `/` becomes [`HOME_LABEL`]; otherwise one leading `/` (or `#` for anchors)
/// is dropped and the first remaining character is uppercased.
pub fn display_label(path: &str) -> String {
    if path == "/" {
        return HOME_LABEL.to_string();
    }

    let trimmed = path
        .strip_prefix('/')
        .or_else(|| path.strip_prefix('#'))
        .unwrap_or(path);

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered navigation items for the given authentication flag.
pub fn menu_items(is_authenticated: bool, source: MenuSource) -> Vec<NavItem> {
    let paths = if is_authenticated {
        MEMBER_PATHS
    } else {
        source.guest_paths()
    };
    paths.iter().copied().map(NavItem::new).collect()
}

pub fn menu_action(is_authenticated: bool) -> MenuAction {
    if is_authenticated {
        MenuAction::Logout
    } else {
        MenuAction::Login { path: LOGIN_PATH }
    }
}

/// Current router location as seen by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    pub hash: Option<String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        Self {
            pathname: pathname.into(),
            hash: (!hash.is_empty()).then_some(hash),
        }
    }

    /// Exact match against either the pathname or the hash fragment.
    pub fn is_active(&self, target: &str) -> bool {
        self.pathname == target || self.hash.as_deref() == Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn root_path_is_labelled_home() {
        assert_eq!(display_label("/"), "Home");
    }

    #[test]
    fn label_strips_slash_and_capitalizes_first_letter_only() {
        assert_eq!(display_label("/dashboard"), "Dashboard");
        assert_eq!(display_label("/myIssues"), "MyIssues");
        assert_eq!(display_label("#contact"), "Contact");
        assert_eq!(display_label("plain"), "Plain");
    }

    #[test]
    fn guest_menu_lists_public_pages_in_order() {
        let items = menu_items(false, MenuSource::Routes);
        assert_eq!(labels(&items), ["Home", "Features", "About", "Contact"]);
        assert_eq!(items[1].path, "/features");
    }

    #[test]
    fn member_menu_lists_account_pages_in_order() {
        let items = menu_items(true, MenuSource::Routes);
        assert_eq!(labels(&items), ["Dashboard", "Profile", "Settings"]);
    }

    #[test]
    fn anchor_source_only_changes_guest_targets() {
        let guest = menu_items(false, MenuSource::Anchors);
        let paths: Vec<_> = guest.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["/", "#features", "#about", "#contact"]);
        assert_eq!(labels(&guest), ["Home", "Features", "About", "Contact"]);

        assert_eq!(
            menu_items(true, MenuSource::Anchors),
            menu_items(true, MenuSource::Routes)
        );
    }

    #[test]
    fn trailing_action_follows_auth_flag() {
        assert_eq!(menu_action(true), MenuAction::Logout);
        assert_eq!(menu_action(false), MenuAction::Login { path: "/login" });
    }

    #[test]
    fn active_when_pathname_matches() {
        let here = Location::new("/dashboard", "");
        assert!(here.is_active("/dashboard"));

        let home = Location::new("/", "");
        assert!(!home.is_active("/dashboard"));
    }

    #[test]
    fn active_when_hash_matches() {
        let here = Location::new("/", "#features");
        assert!(here.is_active("#features"));
        assert!(!here.is_active("#about"));
    }

    #[test]
    fn path_and_hash_links_can_be_active_together() {
        let here = Location::new("/", "#features");
        assert!(here.is_active("/"));
        assert!(here.is_active("#features"));
    }

    #[test]
    fn matching_is_exact() {
        let here = Location::new("/dashboard/issues", "");
        assert!(!here.is_active("/dashboard"));
        assert!(!Location::new("/Dashboard", "").is_active("/dashboard"));
    }

    #[test]
    fn empty_hash_is_absent() {
        let here = Location::new("/about", "");
        assert_eq!(here.hash, None);
        assert!(!here.is_active(""));
    }
}
