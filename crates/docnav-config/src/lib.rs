//! Navigation configuration for docnav.
//!
//! Parses `docnav.toml` files with serde and provides auto-discovery of the
//! config file in parent directories.
//!
//! The file holds two top-level arrays of tables, in render order:
//!
//! ```toml
//! [[navbar]]
//! label = "Guías"
//! target = "/guias/"
//! active_match = "/(primeros-pasos|guias)/"
//!
//! [[sidebar]]
//! label = "Golang"
//! collapsed = true
//!
//! [[sidebar.items]]
//! label = "Introducción"
//! target = "/guias/programacion/introduction"
//! ```
//!
//! This crate only parses. Semantic checks (empty labels, empty sections,
//! invalid patterns) happen when `docnav-model` builds the navigation model.
//!
//! ## Environment Variable Expansion
//!
//! `label` and `target` values support `${VAR}` and `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docnav.toml";

/// Navigation configuration as written by site authors.
///
/// Unknown top-level keys are rejected, so a misspelled `[[sidebars]]`
/// cannot silently drop the sidebar.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Top navigation bar entries, rendered left to right.
    pub navbar: Vec<NavEntryConfig>,
    /// Sidebar sections, rendered top to bottom.
    pub sidebar: Vec<SidebarSectionConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// One navbar entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntryConfig {
    /// Display text.
    pub label: String,
    /// Absolute URL or site-relative path.
    pub target: String,
    /// Regular expression that marks the entry active instead of the
    /// prefix rule.
    #[serde(default)]
    pub active_match: Option<String>,
}

/// One collapsible sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSectionConfig {
    /// Section heading.
    pub label: String,
    /// Whether the section starts collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Leaf links. Left empty here so the model reports the section by name.
    #[serde(default)]
    pub items: Vec<SidebarItemConfig>,
}

/// Leaf link inside a sidebar section.
///
/// Sidebar links have no `active_match`; the key is rejected at parse time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarItemConfig {
    /// Display text.
    pub label: String,
    /// Absolute URL or site-relative path.
    pub target: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navbar[0].target`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the explicit file is missing or
    /// discovery finds nothing, and parse/expansion errors otherwise.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                Self::discover_from(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };

        Self::load_from_file(&path)
    }

    /// Parse configuration from TOML text and expand environment references.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::EnvVar` for unset variables.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            navbar = config.navbar.len(),
            sidebar = config.sidebar.len(),
            "Loaded navigation config"
        );

        Ok(config)
    }

    /// Expand environment variable references in labels and targets.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (i, entry) in self.navbar.iter_mut().enumerate() {
            expand::expand_in_place(&mut entry.label, || format!("navbar[{i}].label"))?;
            expand::expand_in_place(&mut entry.target, || format!("navbar[{i}].target"))?;
        }

        for (i, section) in self.sidebar.iter_mut().enumerate() {
            expand::expand_in_place(&mut section.label, || format!("sidebar[{i}].label"))?;
            for (j, item) in section.items.iter_mut().enumerate() {
                expand::expand_in_place(&mut item.label, || {
                    format!("sidebar[{i}].items[{j}].label")
                })?;
                expand::expand_in_place(&mut item.target, || {
                    format!("sidebar[{i}].items[{j}].target")
                })?;
            }
        }

        Ok(())
    }
}
