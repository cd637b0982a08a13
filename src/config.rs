//! Navigation configuration.
//!
//! Handles loading, validating, and merging `nav.toml`. Stock defaults are the
//! base layer; a user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [search]
//! label = "Search"           # Screen-reader text and aria-label of the search icon
//! href = "/search"           # Target of the search affordance
//!
//! [nav]
//! class = "header-nav"       # CSS class on the <nav> element
//! aria_label = "Main"        # Accessible name of the <nav> landmark
//!
//! [routes]
//! home_slug = "home"         # Page with this slug resolves to "/"
//!
//! [routes.collections]
//! pages = "/{slug}"          # Path pattern per collection
//! posts = "/posts/{slug}"
//! ```
//!
//! Collections without a pattern route to `/{collection}/{slug}`.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILENAME: &str = "nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Navigation configuration loaded from `nav.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Trailing search affordance.
    pub search: SearchConfig,
    /// Attributes of the `<nav>` wrapper emitted by the HTML adapter.
    pub nav: NavMarkupConfig,
    /// How internal references become paths.
    pub routes: RoutesConfig,
}

impl NavConfig {
    /// Validate values that serde can't check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search.label must not be empty".into(),
            ));
        }
        if self.search.href.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search.href must not be empty".into(),
            ));
        }
        if self.nav.class.trim().is_empty() {
            return Err(ConfigError::Validation("nav.class must not be empty".into()));
        }
        for (collection, pattern) in &self.routes.collections {
            if !pattern.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "routes.collections.{collection} must start with '/'"
                )));
            }
            if !pattern.contains("{slug}") && !pattern.contains("{id}") {
                return Err(ConfigError::Validation(format!(
                    "routes.collections.{collection} must contain {{slug}} or {{id}}"
                )));
            }
        }
        Ok(())
    }
}

/// The icon-only search link appended to every navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub label: String,
    pub href: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            label: "Search".to_string(),
            href: "/search".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavMarkupConfig {
    pub class: String,
    pub aria_label: String,
}

impl Default for NavMarkupConfig {
    fn default() -> Self {
        Self {
            class: "header-nav".to_string(),
            aria_label: "Main".to_string(),
        }
    }
}

/// Routing rules for internal references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    /// Slug of the page served at `/`.
    pub home_slug: String,
    /// Path pattern per collection slug. `{slug}` and `{id}` are substituted.
    pub collections: BTreeMap<String, String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        let mut collections = BTreeMap::new();
        collections.insert("pages".to_string(), "/{slug}".to_string());
        collections.insert("posts".to_string(), "/posts/{slug}".to_string());
        Self {
            home_slug: "home".to_string(),
            collections,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `nav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `nav.toml` in the given directory, on top of stock defaults.
///
/// A site's `nav.toml` only names what differs from the stock setup: usually a
/// route pattern for one of its collections, or the search label in the site's
/// language. Every key it leaves out keeps its stock value, so adding a
/// collection to `[routes.collections]` does not drop `pages` or `posts`.
pub fn load_config(dir: &Path) -> Result<NavConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `nav.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# cms-nav configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Search affordance (always rendered last, icon only)
# ---------------------------------------------------------------------------
[search]
# Screen-reader text and aria-label.
label = "Search"
# Where the search icon links to.
href = "/search"

# ---------------------------------------------------------------------------
# <nav> wrapper
# ---------------------------------------------------------------------------
[nav]
class = "header-nav"
aria_label = "Main"

# ---------------------------------------------------------------------------
# Internal reference routing
# ---------------------------------------------------------------------------
[routes]
# The page with this slug is served at "/".
home_slug = "home"

# Path pattern per collection. {slug} and {id} are substituted.
# Collections not listed here route to /<collection>/{slug}.
[routes.collections]
pages = "/{slug}"
posts = "/posts/{slug}"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = NavConfig::default();
        assert_eq!(config.search.label, "Search");
        assert_eq!(config.search.href, "/search");
        assert_eq!(config.nav.class, "header-nav");
        assert_eq!(config.routes.home_slug, "home");
        assert_eq!(config.routes.collections["pages"], "/{slug}");
    }

    #[test]
    fn parse_partial_config() {
        let config: NavConfig = toml::from_str(
            r#"
[search]
label = "Find"
"#,
        )
        .unwrap();
        assert_eq!(config.search.label, "Find");
        assert_eq!(config.search.href, "/search");
        assert_eq!(config.nav.aria_label, "Main");
    }

    #[test]
    fn site_nav_toml_only_overrides_what_it_names() {
        let config = load_config(&crate::test_helpers::fixture_path("")).unwrap();
        assert_eq!(config.search.label, "Search the site");
        assert_eq!(config.search.href, "/search");
        assert_eq!(config.routes.collections["posts"], "/blog/{slug}");
        assert_eq!(config.routes.collections["pages"], "/{slug}");
        assert_eq!(config.routes.home_slug, "home");
        assert_eq!(config.nav, NavMarkupConfig::default());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn load_config_merges_collections_over_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
[routes.collections]
posts = "/blog/{slug}"
products = "/shop/{id}"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.routes.collections["posts"], "/blog/{slug}");
        assert_eq!(config.routes.collections["products"], "/shop/{id}");
        // Stock pattern preserved
        assert_eq!(config.routes.collections["pages"], "/{slug}");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "not toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<NavConfig, _> = toml::from_str(
            r#"
[search]
lable = "Find"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<NavConfig, _> = toml::from_str("[footer]\nclass = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_search_label() {
        let mut config = NavConfig::default();
        config.search.label = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.label"));
    }

    #[test]
    fn validate_route_pattern_needs_leading_slash() {
        let mut config = NavConfig::default();
        config
            .routes
            .collections
            .insert("posts".into(), "blog/{slug}".into());
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_route_pattern_needs_placeholder() {
        let mut config = NavConfig::default();
        config
            .routes
            .collections
            .insert("posts".into(), "/blog".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{slug} or {id}"));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[search]\nhref = \"\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[routes.collections]
pages = "/{slug}"
posts = "/posts/{slug}"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[routes.collections]
posts = "/blog/{slug}"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let collections = merged.get("routes").unwrap().get("collections").unwrap();
        assert_eq!(collections.get("pages").unwrap().as_str(), Some("/{slug}"));
        assert_eq!(
            collections.get("posts").unwrap().as_str(),
            Some("/blog/{slug}")
        );
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: NavConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("search").is_some());
        assert!(val.get("nav").is_some());
        assert!(val.get("routes").is_some());
    }
}
