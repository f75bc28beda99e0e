//! Environment validation.
//!
//! This module provides tools to check that the optional geometry tool is
//! available and that the configured catalogs are laid out on disk.

pub mod checker;
pub mod formatter;

// Re-export commonly used types
pub use checker::{DependencyChecker, DependencyStatus, ToolStatus};
pub use formatter::{DoctorFormatter, OutputFormat};
