//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `ORGTREE_*` prefix, `__` as section separator

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// How the team structure is drawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// One line per employee: indent units, bullet, name
    #[default]
    Indent,
    /// Box-drawing tree
    Tree,
}

impl FromStr for DisplayStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indent" => Ok(DisplayStyle::Indent),
            "tree" => Ok(DisplayStyle::Tree),
            other => Err(ApplicationError::Config {
                message: format!("unknown display style '{other}' (expected 'indent' or 'tree')"),
            }),
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStyle::Indent => write!(f, "indent"),
            DisplayStyle::Tree => write!(f, "tree"),
        }
    }
}

/// Rendering settings for "Print Team Structure".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// One indent unit, repeated once per level
    pub indent: String,
    /// Marker printed before each name
    pub bullet: String,
    /// Line printed when there is no team lead yet
    pub empty_marker: String,
    pub style: DisplayStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            bullet: "-".into(),
            empty_marker: "(empty team)".into(),
            style: DisplayStyle::Indent,
        }
    }
}

/// Raw display config for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub indent: Option<String>,
    pub bullet: Option<String>,
    pub empty_marker: Option<String>,
    pub style: Option<DisplayStyle>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub confirm_replace: Option<bool>,
    pub display: RawDisplayConfig,
}

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Ask before replacing an existing team lead
    pub confirm_replace: bool,
    pub display: DisplayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_replace: true,
            display: DisplayConfig::default(),
        }
    }
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let base = &self.display;
        let display = &overlay.display;
        Self {
            confirm_replace: overlay.confirm_replace.unwrap_or(self.confirm_replace),
            display: DisplayConfig {
                indent: display.indent.clone().unwrap_or_else(|| base.indent.clone()),
                bullet: display.bullet.clone().unwrap_or_else(|| base.bullet.clone()),
                empty_marker: display
                    .empty_marker
                    .clone()
                    .unwrap_or_else(|| base.empty_marker.clone()),
                style: display.style.unwrap_or(base.style),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `ORGTREE_*` prefix
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), config_file)
    }

    /// Same as [`Settings::load`] with the global config location given explicitly.
    ///
    /// A missing global file is skipped, a missing explicit file is an error.
    pub fn load_from(global: Option<&Path>, config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("Loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        let env = Config::builder()
            .add_source(
                Environment::with_prefix("ORGTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;
        Self::apply_overrides(current, &env)
    }

    /// Apply explicit overrides (environment variables) on top of the file layers.
    pub fn apply_overrides(mut settings: Self, config: &Config) -> ApplicationResult<Self> {
        if let Ok(val) = config.get_bool("confirm_replace") {
            settings.confirm_replace = val;
        }
        if let Ok(val) = config.get_string("display.indent") {
            settings.display.indent = val;
        }
        if let Ok(val) = config.get_string("display.bullet") {
            settings.display.bullet = val;
        }
        if let Ok(val) = config.get_string("display.empty_marker") {
            settings.display.empty_marker = val;
        }
        if let Ok(val) = config.get_string("display.style") {
            settings.display.style = val.parse()?;
        }
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write [`Settings::template`] to `path`, creating parent directories.
    pub fn write_template(path: &Path, force: bool) -> ApplicationResult<()> {
        if path.exists() && !force {
            return Err(ApplicationError::Config {
                message: format!("config already exists: {} (use --force)", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
        }
        std::fs::write(path, Self::template()).with_path_context("write config", path)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# orgtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/orgtree/orgtree.toml
#   File:   orgtree --config <FILE>
#   Env:    ORGTREE_* environment variables, e.g. ORGTREE_DISPLAY__BULLET="*"

# Ask before replacing an existing team lead
# confirm_replace = true

[display]
# One indent unit, repeated per level
# indent = "  "

# Marker printed before each name
# bullet = "-"

# Printed when no team lead is set
# empty_marker = "(empty team)"

# "indent" or "tree" (tree labels each employee with its slot, e.g. "L: Bob")
# style = "indent"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert!(settings.confirm_replace);
        assert_eq!(settings.display.indent, "  ");
        assert_eq!(settings.display.bullet, "-");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let raw: RawSettings = toml::from_str(
            r#"
[display]
bullet = "*"
"#,
        )
        .unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged.display.bullet, "*");
        assert_eq!(merged.display.indent, "  ");
        assert_eq!(merged.display.empty_marker, "(empty team)");
        assert!(merged.confirm_replace);
    }

    #[test]
    fn given_override_when_applying_then_replaces_value() {
        let config = Config::builder()
            .set_override("display.style", "tree")
            .unwrap()
            .set_override("confirm_replace", false)
            .unwrap()
            .build()
            .unwrap();
        let settings = Settings::apply_overrides(Settings::default(), &config).unwrap();
        assert_eq!(settings.display.style, DisplayStyle::Tree);
        assert!(!settings.confirm_replace);
    }

    #[test]
    fn given_unknown_style_override_when_applying_then_config_error() {
        let config = Config::builder()
            .set_override("display.style", "zigzag")
            .unwrap()
            .build()
            .unwrap();
        let err = Settings::apply_overrides(Settings::default(), &config).unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn given_defaults_when_serialized_then_round_trips_through_toml() {
        let toml = Settings::default().to_toml().unwrap();
        let back: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(back, Settings::default());
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.confirm_replace.is_none());
        assert!(raw.display.style.is_none());
    }
}
