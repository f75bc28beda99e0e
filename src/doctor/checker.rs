//! Environment checking for the icon catalogs.
//!
//! This module detects the optional geometry-inspection tool and verifies
//! that every configured catalog document and icon directory exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use icondex::config::Config;
//! use icondex::doctor::{DependencyChecker, ToolStatus};
//! use std::path::Path;
//!
//! let config = Config::new();
//! let catalogs = config.resolve_catalogs(Path::new("."));
//! let checker = DependencyChecker::new(&config.geometry_tool);
//!
//! for status in checker.check_all(&catalogs) {
//!     match status.status {
//!         ToolStatus::Available => println!("✓ {}: {}", status.name, status.message),
//!         ToolStatus::Missing => println!("✗ {}: {}", status.name, status.message),
//!         ToolStatus::Unknown => println!("? {}: {}", status.name, status.message),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing geometry tool is reported but is never required
//! - Command execution errors return `ToolStatus::Unknown` with error details
//! - All methods are non-panicking and return structured results

use crate::imaging::IdentifyCommand;
use crate::models::CatalogSpec;
use serde::Serialize;

/// Status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// Present and working
    Available,
    /// Not found
    Missing,
    /// Could not determine status
    Unknown,
}

/// Result of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyStatus {
    /// Name of the checked item (e.g., "Geometry tool", "STIR database")
    pub name: String,
    /// Status of the item
    pub status: ToolStatus,
    /// Version string if detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Human-readable message about the status
    pub message: String,
    /// Whether a missing item fails the run
    pub required: bool,
}

impl DependencyStatus {
    /// Creates a new status.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: ToolStatus,
        version: Option<String>,
        message: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            version,
            message: message.into(),
            required,
        }
    }

    /// Creates a status for an available item.
    #[must_use]
    pub fn available(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Available, None, message, true)
    }

    /// Creates a status for a missing item.
    #[must_use]
    pub fn missing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Missing, None, message, true)
    }

    /// Creates a status for an unknown state.
    #[must_use]
    pub fn unknown(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Unknown, None, message, true)
    }

    /// Marks the item optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Returns true if the item is required and missing.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.required && self.status == ToolStatus::Missing
    }
}

/// Checker for the catalog environment.
pub struct DependencyChecker {
    geometry_tool: String,
}

impl DependencyChecker {
    /// Creates a checker probing for `geometry_tool`.
    #[must_use]
    pub fn new(geometry_tool: impl Into<String>) -> Self {
        Self {
            geometry_tool: geometry_tool.into(),
        }
    }

    /// Runs every check: geometry tool first, then each catalog's database
    /// and icon directory.
    pub fn check_all(&self, catalogs: &[CatalogSpec]) -> Vec<DependencyStatus> {
        let mut statuses = vec![self.check_geometry_tool()];
        for catalog in catalogs {
            statuses.push(Self::check_database(catalog));
            statuses.push(Self::check_icons_dir(catalog));
        }
        statuses
    }

    /// Checks whether the geometry tool is on `PATH` and reports its version.
    pub fn check_geometry_tool(&self) -> DependencyStatus {
        let name = "Geometry tool";
        let Some(tool) = IdentifyCommand::detect(&self.geometry_tool) else {
            return DependencyStatus::missing(
                name,
                format!(
                    "'{}' not found in PATH. Dimension checks will be skipped",
                    self.geometry_tool
                ),
            )
            .optional();
        };

        match tool.version() {
            Ok(Some(version)) => {
                let mut status = DependencyStatus::available(
                    name,
                    format!("'{}' found, version {version}", tool.program()),
                );
                status.version = Some(version);
                status.optional()
            }
            Ok(None) => DependencyStatus::unknown(
                name,
                format!("'{}' found but could not parse version", tool.program()),
            )
            .optional(),
            Err(e) => DependencyStatus::unknown(name, format!("Error checking: {e}")).optional(),
        }
    }

    /// Checks that a catalog document exists and is a file.
    pub fn check_database(catalog: &CatalogSpec) -> DependencyStatus {
        let name = format!("{} database", catalog.name);
        let path = &catalog.database;

        if !path.exists() {
            DependencyStatus::missing(name, format!("File does not exist: {}", path.display()))
        } else if !path.is_file() {
            DependencyStatus::missing(name, format!("Path is not a file: {}", path.display()))
        } else {
            DependencyStatus::available(name, format!("Found at {}", path.display()))
        }
    }

    /// Checks that a catalog's icon directory exists and is a directory.
    pub fn check_icons_dir(catalog: &CatalogSpec) -> DependencyStatus {
        let name = format!("{} icons", catalog.name);
        let path = &catalog.icons_dir;

        if !path.exists() {
            DependencyStatus::missing(
                name,
                format!("Directory does not exist: {}", path.display()),
            )
        } else if !path.is_dir() {
            DependencyStatus::missing(
                name,
                format!("Path is not a directory: {}", path.display()),
            )
        } else {
            DependencyStatus::available(name, format!("Found at {}", path.display()))
        }
    }
}
