//! Shared types for the command handlers.

use crate::config::Config;
use crate::models::CatalogSpec;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every check passed
    Success = 0,
    /// A check failed or the command could not run
    Failure = 1,
}

impl ExitCode {
    /// Numeric value passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Checks ran and reported failures
    Validation,
    /// Files could not be read or written
    Io,
    /// A catalog root is malformed
    Structural,
}

/// Error returned from a command's `execute()`.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a structural failure.
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Structural,
            message: message.into(),
        }
    }

    /// Creates a validation failure whose report was already printed.
    #[must_use]
    pub const fn reported() -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: String::new(),
        }
    }

    /// Returns true if there is nothing left to print.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.message.is_empty()
    }

    /// Exit code for this error. Every failure exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation | CliErrorKind::Io | CliErrorKind::Structural => {
                ExitCode::Failure
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    /// Repository root the catalog paths are relative to
    pub root: PathBuf,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Creates a context.
    pub fn new(root: impl Into<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_path,
        }
    }

    /// Loads the configuration for this root.
    pub fn load_config(&self) -> CliResult<Config> {
        Config::load(&self.root, self.config_path.as_deref())
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
    }

    /// Loads the configuration and resolves every catalog against the root.
    pub fn catalogs(&self) -> CliResult<(Config, Vec<CatalogSpec>)> {
        let config = self.load_config()?;
        let specs = config.resolve_catalogs(&self.root);
        Ok((config, specs))
    }

    /// Repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_every_error_kind_exits_with_one() {
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(CliError::io("x").exit_code().code(), 1);
        assert_eq!(CliError::structural("x").exit_code().code(), 1);
        assert!(CliError::reported().is_reported());
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_context_resolves_default_catalogs() {
        let temp_dir = TempDir::new().unwrap();
        let context = Context::new(temp_dir.path(), None);
        let (config, specs) = context.catalogs().unwrap();

        assert_eq!(config.geometry_tool, "identify");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "STIR");
        assert!(specs[0].database.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_context_reports_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "geometry_tool = [").unwrap();

        let err = Context::new(temp_dir.path(), Some(path))
            .load_config()
            .unwrap_err();
        assert!(err.message.contains("Failed to load configuration"));
    }
}
