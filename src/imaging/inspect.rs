//! Reading pixel dimensions of icon files.
//!
//! # Example
//!
//! ```rust,no_run
//! use icondex::imaging::{GeometryInspector, IdentifyCommand};
//! use std::path::Path;
//!
//! // Probe once; absence of the tool disables geometry checks
//! if let Some(tool) = IdentifyCommand::detect("identify") {
//!     let (width, height) = tool.dimensions(Path::new("icons/app.png")).unwrap();
//!     println!("{width}x{height}");
//! }
//! ```

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Source of pixel dimensions for an image file.
pub trait GeometryInspector {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns `(width, height)` in pixels.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32)>;
}

/// External geometry-inspection command (ImageMagick `identify` or compatible).
///
/// Invoked as `<program> -format %wx%h <file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyCommand {
    program: String,
}

impl IdentifyCommand {
    /// Wraps a program without probing for it.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Probes the host for `program` and returns it if present.
    #[must_use]
    pub fn detect(program: &str) -> Option<Self> {
        if command_exists(program) {
            tracing::debug!("Found geometry tool '{program}'");
            Some(Self::new(program))
        } else {
            tracing::debug!("Geometry tool '{program}' not found");
            None
        }
    }

    /// Program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the program with `-version` and returns the reported version.
    pub fn version(&self) -> Result<Option<String>> {
        let output = Command::new(&self.program)
            .arg("-version")
            .output()
            .context(format!("Failed to execute '{}'", self.program))?;

        // Some builds print the banner to stderr
        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).to_string()
        } else {
            stdout.to_string()
        };

        Ok(parse_version(&text))
    }
}

impl GeometryInspector for IdentifyCommand {
    fn name(&self) -> &str {
        &self.program
    }

    fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        let output = Command::new(&self.program)
            .args(["-format", "%wx%h"])
            .arg(path)
            .output()
            .context(format!("Failed to execute '{}'", self.program))?;

        if !output.status.success() {
            anyhow::bail!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_dimensions(&stdout)
            .with_context(|| format!("Unexpected output from '{}': {}", self.program, stdout.trim()))
    }
}

/// Reads dimensions by decoding the image header in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodedDimensions;

impl GeometryInspector for DecodedDimensions {
    fn name(&self) -> &str {
        "image decoder"
    }

    fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        image::image_dimensions(path)
            .context(format!("Failed to read image dimensions: {}", path.display()))
    }
}

/// Checks whether `program` resolves on `PATH` using the host's lookup command.
#[must_use]
pub fn command_exists(program: &str) -> bool {
    let probe = if cfg!(windows) { "where" } else { "which" };
    Command::new(probe)
        .arg(program)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Parses `WxH` output, ignoring surrounding whitespace.
fn parse_dimensions(output: &str) -> Option<(u32, u32)> {
    let (width, height) = output.trim().split_once('x')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

/// Extracts a version like `7.1.1-15` from an `identify -version` banner.
///
/// Examples:
/// - "Version: ImageMagick 7.1.1-15 Q16-HDRI ..." -> Some("7.1.1-15")
/// - "GraphicsMagick 1.3.42 2023-09-23 Q16" -> Some("1.3.42")
fn parse_version(output: &str) -> Option<String> {
    let first_line = output.lines().next()?;
    first_line
        .split_whitespace()
        .find(|word| {
            let core = word.split('-').next().unwrap_or_default();
            let parts: Vec<&str> = core.split('.').collect();
            parts.len() >= 2
                && parts
                    .iter()
                    .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        })
        .map(String::from)
}
