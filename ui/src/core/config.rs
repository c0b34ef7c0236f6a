//! Site configuration embedded at build time from `assets/site.json`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::nav::MenuSource;
use super::navbar_state::DEFAULT_MOBILE_BREAKPOINT_PX;

const SITE_CONFIG_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown theme `{0}` (expected `compact` or `full`)")]
    UnknownTheme(String),
    #[error("unknown menu source `{0}` (expected `routes` or `anchors`)")]
    UnknownMenuSource(String),
    #[error("mobile breakpoint must be a positive width, got {0}")]
    InvalidBreakpoint(f64),
}

/// Visual variant shared by the navbar, hero and landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Compact,
    #[default]
    Full,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }
}

impl FromStr for MenuSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "routes" => Ok(Self::Routes),
            "anchors" => Ok(Self::Anchors),
            other => Err(ConfigError::UnknownMenuSource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: Theme,
    pub menu_source: MenuSource,
    pub mobile_breakpoint_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            menu_source: MenuSource::default(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl SiteConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_breakpoint_px));
        }
        Ok(self)
    }

    /// Embedded config, with `CAMPUS_THEME` and `CAMPUS_MENU_SOURCE` (read at
    /// compile time) overriding their fields. Invalid input is logged and
    /// replaced by defaults.
    pub fn load() -> Self {
        let config = Self::from_json(SITE_CONFIG_JSON).unwrap_or_else(|err| {
            warn!(%err, "falling back to default site config");
            Self::default()
        });
        config.with_overrides(option_env!("CAMPUS_THEME"), option_env!("CAMPUS_MENU_SOURCE"))
    }

    /// Applies raw override values; one that fails to parse leaves its field
    /// unchanged.
    pub fn with_overrides(mut self, theme: Option<&str>, menu_source: Option<&str>) -> Self {
        if let Some(raw) = theme {
            match raw.parse() {
                Ok(theme) => self.theme = theme,
                Err(err) => warn!(%err, "ignoring CAMPUS_THEME override"),
            }
        }
        if let Some(raw) = menu_source {
            match raw.parse() {
                Ok(source) => self.menu_source = source,
                Err(err) => warn!(%err, "ignoring CAMPUS_MENU_SOURCE override"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        assert!(SiteConfig::from_json(SITE_CONFIG_JSON).is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "theme": "compact" }"#).unwrap();
        assert_eq!(config.theme, Theme::Compact);
        assert_eq!(config.menu_source, MenuSource::Routes);
        assert_eq!(config.mobile_breakpoint_px, DEFAULT_MOBILE_BREAKPOINT_PX);
    }

    #[test]
    fn anchors_menu_source_parses() {
        let config = SiteConfig::from_json(r#"{ "menu_source": "anchors" }"#).unwrap();
        assert_eq!(config.menu_source, MenuSource::Anchors);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "theme": "neon" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = "neon".parse::<Theme>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme(ref t) if t == "neon"));
    }

    #[test]
    fn non_positive_breakpoint_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "mobile_breakpoint_px": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBreakpoint(_)));
    }

    #[test]
    fn theme_parsing_ignores_case_and_padding() {
        assert_eq!(" Compact ".parse::<Theme>().unwrap(), Theme::Compact);
        assert_eq!("FULL".parse::<Theme>().unwrap(), Theme::Full);
        assert_eq!("anchors".parse::<MenuSource>().unwrap(), MenuSource::Anchors);
    }

    #[test]
    fn overrides_replace_their_fields() {
        let config = SiteConfig::default().with_overrides(Some("compact"), Some(" Anchors "));
        assert_eq!(config.theme, Theme::Compact);
        assert_eq!(config.menu_source, MenuSource::Anchors);
        assert_eq!(config.mobile_breakpoint_px, DEFAULT_MOBILE_BREAKPOINT_PX);
    }

    #[test]
    fn bad_override_keeps_configured_value() {
        let base = SiteConfig::from_json(r#"{ "menu_source": "anchors" }"#).unwrap();
        let config = base.clone().with_overrides(Some("neon"), Some("sitemap"));
        assert_eq!(config, base);
        assert!(matches!(
            "sitemap".parse::<MenuSource>(),
            Err(ConfigError::UnknownMenuSource(raw)) if raw == "sitemap"
        ));
    }

    #[test]
    fn no_overrides_is_identity() {
        let base = SiteConfig::from_json(SITE_CONFIG_JSON).unwrap();
        assert_eq!(base.clone().with_overrides(None, None), base);
    }
}
