//! Configuration management for the application.
//!
//! This module handles loading and validating the catalog layout in TOML
//! format. Every value has a default, so the file is optional.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_GEOMETRY_TOOL};
use crate::models::{CapabilityKind, CatalogSpec};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of one catalog, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Display name (e.g., "STIR")
    pub name: String,
    /// Catalog JSON document (e.g., "data/stir/stir-database.json")
    pub database: PathBuf,
    /// Directory of icon files (e.g., "data/stir/icons")
    pub icons_dir: PathBuf,
    /// Capability map carried by entries ("platforms" or "browsers")
    pub capability: CapabilityKind,
}

impl CatalogConfig {
    /// Resolves relative paths against `root`.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> CatalogSpec {
        CatalogSpec::new(
            self.name.clone(),
            root.join(&self.database),
            root.join(&self.icons_dir),
            self.capability,
        )
    }

    /// The STIR catalog.
    #[must_use]
    pub fn stir() -> Self {
        Self {
            name: "STIR".to_string(),
            database: PathBuf::from("data/stir/stir-database.json"),
            icons_dir: PathBuf::from("data/stir/icons"),
            capability: CapabilityKind::Platforms,
        }
    }

    /// The BEIR catalog.
    #[must_use]
    pub fn beir() -> Self {
        Self {
            name: "BEIR".to_string(),
            database: PathBuf::from("data/beir/beir-database.json"),
            icons_dir: PathBuf::from("data/beir/icons"),
            capability: CapabilityKind::Browsers,
        }
    }
}

/// Application configuration.
///
/// # Validation
///
/// - at least one catalog must be configured
/// - catalog names must be non-empty and unique
/// - `geometry_tool` must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// External command probed for pixel dimensions
    #[serde(default = "default_geometry_tool")]
    pub geometry_tool: String,
    /// Catalogs processed in order
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<CatalogConfig>,
}

fn default_geometry_tool() -> String {
    DEFAULT_GEOMETRY_TOOL.to_string()
}

fn default_catalogs() -> Vec<CatalogConfig> {
    vec![CatalogConfig::stir(), CatalogConfig::beir()]
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry_tool: default_geometry_tool(),
            catalogs: default_catalogs(),
        }
    }

    /// Gets the path of the config file inside a repository root.
    #[must_use]
    pub fn config_file_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Otherwise `<root>/icondex.toml` is used
    /// when present, and defaults apply when it is not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = Self::config_file_path(root);
                if !path.exists() {
                    tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                    return Ok(Self::new());
                }
                path
            }
        };

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(
            "Loaded {} catalog(s) from {}",
            config.catalogs.len(),
            config_path.display()
        );

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.geometry_tool.trim().is_empty() {
            anyhow::bail!("geometry_tool cannot be empty");
        }

        if self.catalogs.is_empty() {
            anyhow::bail!("At least one catalog must be configured");
        }

        let mut seen = HashSet::new();
        for catalog in &self.catalogs {
            if catalog.name.trim().is_empty() {
                anyhow::bail!("Catalog name cannot be empty");
            }
            if !seen.insert(catalog.name.as_str()) {
                anyhow::bail!("Duplicate catalog name: {}", catalog.name);
            }
        }

        Ok(())
    }

    /// Resolves every catalog against `root`, in configured order.
    #[must_use]
    pub fn resolve_catalogs(&self, root: &Path) -> Vec<CatalogSpec> {
        self.catalogs.iter().map(|c| c.resolve(root)).collect()
    }

    /// Finds a catalog by name (case-insensitive).
    #[must_use]
    pub fn catalog(&self, name: &str) -> Option<&CatalogConfig> {
        self.catalogs
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
