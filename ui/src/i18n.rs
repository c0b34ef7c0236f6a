//! Localization for `campus-ui`.
//!
//! Static copy (brand, hero, menu actions, pages) is looked up through the
//! [`t!`](crate::t) macro, which routes `fl!` through the shared [`LOADER`].
//! Navigation item labels are *not* translated: they are derived from their
//! paths (see [`crate::core::nav::display_label`]).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/campus-ui.ftl   (fallback/reference)
//!   es-ES/campus-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let login = t!("nav-login");
//! ```
//!
//! Desktop builds ask the OS for the preferred locales; web builds read
//! `navigator.languages`. Assets are always embedded on WASM.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro; expands to `fl!(&*LOADER, ...)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "campus-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn every_locale_file_uses_the_loader_domain() {
        let files: Vec<_> = Localizations::iter().collect();
        for locale in ["en-US", "es-ES"] {
            let expected = format!("{locale}/{DOMAIN}.ftl");
            assert!(files.iter().any(|f| **f == *expected), "missing {expected}");
        }
    }

    #[test]
    fn i18n_toml_names_the_loader_domain() {
        let toml = include_str!("../i18n.toml");
        let declared = toml
            .lines()
            .find_map(|line| line.trim().strip_prefix("domain"))
            .and_then(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"'));
        assert_eq!(declared, Some(DOMAIN));
    }

    #[test]
    fn brand_lookup_works() {
        init();
        let s = fl!(&*LOADER, "brand-name");
        assert_eq!(s, "Campus Issue Tracker");
    }

    #[test]
    fn init_is_idempotent() {
        init();
        let before = fl!(&*LOADER, "nav-logout");
        init();
        assert_eq!(fl!(&*LOADER, "nav-logout"), before);
    }
}
