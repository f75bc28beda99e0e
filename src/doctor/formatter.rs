//! Output formatting for environment check results.
//!
//! Terminal output lists every check with a ✓/✗/⚠ marker, a summary line
//! and, for a missing geometry tool, a platform-specific install hint.
//! JSON output carries the same information for scripts.

use crate::constants::{APP_BINARY_NAME, APP_NAME, CONFIG_FILE_NAME};
use crate::doctor::{DependencyStatus, ToolStatus};
use serde::Serialize;
use std::fmt::Write;

/// Output format for doctor results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// Machine-readable JSON output
    Json,
}

/// Platform used to pick install hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS
    MacOs,
    /// Linux
    Linux,
    /// Windows
    Windows,
    /// Unknown platform
    Unknown,
}

impl Platform {
    /// Detects the current platform from OS configuration.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// Returns the platform name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Windows => "Windows",
            Self::Unknown => "Unknown",
        }
    }

    const fn imagemagick_hint(self) -> &'static str {
        match self {
            Self::MacOs => "brew install imagemagick",
            Self::Linux => "sudo apt-get install imagemagick  (Debian/Ubuntu)",
            Self::Windows => "winget install ImageMagick.ImageMagick",
            Self::Unknown => "Install ImageMagick from https://imagemagick.org",
        }
    }
}

/// JSON output structure for doctor results.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Overall status ("ready", "missing_required" or "warnings")
    pub status: &'static str,
    /// Number of available items
    pub passed: usize,
    /// Number of missing required items
    pub failed: usize,
    /// Number of missing optional or undetermined items
    pub warnings: usize,
    /// Individual results
    pub checks: &'a [DependencyStatus],
    /// Platform information
    pub platform: &'static str,
}

/// Formatter for environment check results.
pub struct DoctorFormatter {
    format: OutputFormat,
    platform: Platform,
}

impl Default for DoctorFormatter {
    fn default() -> Self {
        Self::with_format(OutputFormat::Terminal)
    }
}

impl DoctorFormatter {
    /// Creates a formatter with the given output format and detected platform.
    #[must_use]
    pub const fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            platform: Platform::detect(),
        }
    }

    /// Creates a terminal formatter for a fixed platform.
    #[must_use]
    pub const fn with_platform(platform: Platform) -> Self {
        Self {
            format: OutputFormat::Terminal,
            platform,
        }
    }

    /// Formats check results.
    pub fn format_results(&self, statuses: &[DependencyStatus]) -> String {
        match self.format {
            OutputFormat::Terminal => self.format_terminal(statuses),
            OutputFormat::Json => self.format_json(statuses),
        }
    }

    fn counts(statuses: &[DependencyStatus]) -> (usize, usize, usize) {
        let passed = statuses
            .iter()
            .filter(|s| s.status == ToolStatus::Available)
            .count();
        let failed = statuses.iter().filter(|s| s.is_blocking()).count();
        (passed, failed, statuses.len() - passed - failed)
    }

    fn format_terminal(&self, statuses: &[DependencyStatus]) -> String {
        let mut output = String::new();

        let title = format!("{APP_NAME} Environment Status");
        let _ = writeln!(output, "{title}");
        let _ = writeln!(output, "{}\n", "═".repeat(title.chars().count()));

        let (passed, failed, warnings) = Self::counts(statuses);

        for status in statuses {
            let (symbol, status_text) = match status.status {
                ToolStatus::Available => ("✓", "OK"),
                ToolStatus::Missing if status.required => ("✗", "MISSING"),
                ToolStatus::Missing => ("⚠", "SKIPPED"),
                ToolStatus::Unknown => ("⚠", "UNKNOWN"),
            };

            let name_width: usize = 24;
            let dots = ".".repeat(name_width.saturating_sub(status.name.len()));
            let _ = write!(output, "{symbol} {}{dots} {status_text}", status.name);
            if let Some(version) = &status.version {
                let _ = write!(output, " (v{version})");
            }
            output.push('\n');

            if status.status != ToolStatus::Available {
                let _ = writeln!(output, "    {}", status.message);
                if !status.required && status.status == ToolStatus::Missing {
                    let _ = writeln!(output, "    Install: {}", self.platform.imagemagick_hint());
                }
            }
        }

        output.push_str("\n───────────────────────────────\n");
        let _ = write!(output, "Summary: {passed} passed");
        if failed > 0 {
            let _ = write!(output, ", {failed} failed");
        }
        if warnings > 0 {
            let _ = write!(output, ", {warnings} warnings");
        }
        output.push('\n');

        if failed > 0 {
            output.push_str("\n✗ Catalog files are missing\n");
            let _ = writeln!(
                output,
                "  Fix the paths in {CONFIG_FILE_NAME} and run '{APP_BINARY_NAME} doctor' again."
            );
        } else if warnings > 0 {
            output.push_str("\n⚠ Catalogs are ready; dimension checks will be skipped\n");
        } else {
            output.push_str("\n✓ Everything is ready!\n");
        }

        output
    }

    fn format_json(&self, statuses: &[DependencyStatus]) -> String {
        let (passed, failed, warnings) = Self::counts(statuses);

        let status = if failed > 0 {
            "missing_required"
        } else if warnings > 0 {
            "warnings"
        } else {
            "ready"
        };

        let json_output = JsonOutput {
            status,
            passed,
            failed,
            warnings,
            checks: statuses,
            platform: self.platform.name(),
        };

        serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Failed to serialize JSON output"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DependencyStatus> {
        vec![
            DependencyStatus::missing("Geometry tool", "'identify' not found in PATH").optional(),
            DependencyStatus::available("STIR database", "Found at data/stir/stir-database.json"),
            DependencyStatus::missing("STIR icons", "Directory does not exist: data/stir/icons"),
        ]
    }

    #[test]
    fn test_terminal_output_marks_required_and_optional() {
        let output = DoctorFormatter::with_platform(Platform::Linux).format_results(&sample());

        assert!(output.contains("⚠ Geometry tool"));
        assert!(output.contains("SKIPPED"));
        assert!(output.contains("Install: sudo apt-get install imagemagick"));
        assert!(output.contains("✓ STIR database"));
        assert!(output.contains("✗ STIR icons"));
        assert!(output.contains("Summary: 1 passed, 1 failed, 1 warnings"));
        assert!(output.contains("Catalog files are missing"));
        assert!(output.contains("run 'icondex doctor' again"));
    }

    #[test]
    fn test_json_output() {
        let output = DoctorFormatter::with_format(OutputFormat::Json).format_results(&sample());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["status"], "missing_required");
        assert_eq!(value["passed"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["checks"][0]["status"], "missing");
        assert_eq!(value["checks"][0]["required"], false);
    }

    #[test]
    fn test_all_ready() {
        let statuses = vec![DependencyStatus::available("STIR database", "ok")];
        let output = DoctorFormatter::with_platform(Platform::MacOs).format_results(&statuses);
        assert!(output.starts_with("Icondex Environment Status\n"));
        assert!(output.contains("Everything is ready!"));
    }
}
