//! In-place geometry normalization of icon files.
//!
//! Runs the same existence/format checks as the icon checker and then
//! repairs every present PNG: non-square images are padded onto a
//! transparent square canvas, and squares outside `[32, 256]` are scaled
//! to the target size. Failures are recorded per file and never stop the
//! batch.

use crate::constants::{is_valid_icon_size, DEFAULT_TARGET_SIZE};
use crate::imaging::{fit_contain, pad_to_square, replace_file, DecodedDimensions, GeometryInspector};
use crate::models::{CatalogDocument, CatalogSpec};
use crate::validator::icons::{has_png_extension, missing_icon_dirs};
use crate::validator::report::{format_issue_list, Issue, IssueKind};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// Already square and in range; the file was not touched
    AlreadyValid,
    /// The file was rewritten
    Resized {
        /// Edge length after padding, if padding happened
        squared_to: Option<u32>,
        /// Edge length after scaling, if scaling happened
        scaled_to: Option<u32>,
    },
}

/// Overall verdict of a normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeVerdict {
    /// Every error was a missing file; present files are fixed
    MissingOnly {
        /// Number of missing files
        missing: usize,
    },
    /// At least one file was rewritten
    Resized,
    /// Nothing failed and nothing needed rewriting
    AllValid,
    /// None of the above
    Failed,
}

impl NormalizeVerdict {
    /// Returns true for every verdict except [`NormalizeVerdict::Failed`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Counters and issues collected across all catalogs.
#[derive(Debug, Clone, Default)]
pub struct NormalizeSummary {
    /// Icon directories that do not exist; when non-empty nothing else ran
    pub missing_dirs: Vec<(String, PathBuf)>,
    /// Catalogs that could not be loaded; when non-empty no file was touched
    pub load_errors: Vec<(String, String)>,
    /// Files left untouched
    pub already_valid: usize,
    /// Files rewritten
    pub resized: usize,
    /// Missing files, wrong formats and processing failures
    pub error_count: usize,
    /// Entries whose file does not exist
    pub missing: Vec<Issue>,
    /// Wrong formats and processing failures
    pub failures: Vec<Issue>,
}

impl NormalizeSummary {
    /// Applies the pass/fail policy.
    ///
    /// Success when every error is a missing file, or when anything was
    /// resized, or when nothing failed at all. This is more lenient than the
    /// icon checker: a missing file alone does not fail the run.
    #[must_use]
    pub fn verdict(&self) -> NormalizeVerdict {
        let missing = self.missing.len();
        if !self.missing_dirs.is_empty() || !self.load_errors.is_empty() {
            NormalizeVerdict::Failed
        } else if missing > 0 && self.error_count == missing {
            NormalizeVerdict::MissingOnly { missing }
        } else if self.resized > 0 {
            NormalizeVerdict::Resized
        } else if self.error_count == 0 {
            NormalizeVerdict::AllValid
        } else {
            NormalizeVerdict::Failed
        }
    }

    /// Formats the summary for the diagnostic stream.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        for (catalog, dir) in &self.missing_dirs {
            let _ = writeln!(message, "❌ {catalog} icons directory not found: {}", dir.display());
        }
        if !self.missing_dirs.is_empty() {
            return message;
        }

        for (catalog, err) in &self.load_errors {
            let _ = writeln!(
                message,
                "❌ Error during icon validation and resizing ({catalog}): {err}"
            );
        }
        if !self.load_errors.is_empty() {
            return message;
        }

        message.push_str(&format_issue_list("Missing icon files", &self.missing));

        message.push_str("\n=== Results ===\n");
        let _ = writeln!(message, "✅ Already valid icons: {}", self.already_valid);
        let _ = writeln!(message, "🔄 Resized icons: {}", self.resized);
        let _ = writeln!(message, "❌ Failed/missing icons: {}", self.error_count);

        match self.verdict() {
            NormalizeVerdict::MissingOnly { missing } => {
                message.push_str(
                    "\n✅ All available icons have been validated and resized successfully\n",
                );
                let _ = writeln!(
                    message,
                    "   Note: {missing} icons were missing and need to be added"
                );
            }
            NormalizeVerdict::Resized => message.push_str("\n✅ Successfully resized some icons\n"),
            NormalizeVerdict::AllValid => {
                message.push_str("\n✅ All icons are already valid, no changes needed\n");
            }
            NormalizeVerdict::Failed => {
                message.push_str("\n❌ Icon validation and resizing failed\n");
            }
        }

        message
    }
}

/// Repairs icon geometry in place.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    target_size: u32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SIZE)
    }
}

impl Normalizer {
    /// Creates a normalizer scaling out-of-range icons to `target_size`.
    #[must_use]
    pub const fn new(target_size: u32) -> Self {
        Self { target_size }
    }

    /// Edge length out-of-range icons are scaled to.
    #[must_use]
    pub const fn target_size(&self) -> u32 {
        self.target_size
    }

    /// Normalizes every catalog in order.
    pub fn run(&self, specs: &[CatalogSpec]) -> NormalizeSummary {
        let mut summary = NormalizeSummary {
            missing_dirs: missing_icon_dirs(specs),
            ..NormalizeSummary::default()
        };
        if !summary.missing_dirs.is_empty() {
            return summary;
        }

        // Load everything before touching any file
        let mut documents = Vec::with_capacity(specs.len());
        for spec in specs {
            match CatalogDocument::load(&spec.database) {
                Ok(document) => documents.push((spec, document)),
                Err(err) => summary.load_errors.push((spec.name.clone(), err.to_string())),
            }
        }
        if !summary.load_errors.is_empty() {
            return summary;
        }

        for (spec, document) in &documents {
            println!("\n=== Processing {} icons ===", spec.name);
            self.process_catalog(spec, document, &mut summary);
        }

        summary
    }

    /// Processes one loaded catalog, accumulating into `summary`.
    pub fn process_catalog(
        &self,
        spec: &CatalogSpec,
        document: &CatalogDocument,
        summary: &mut NormalizeSummary,
    ) {
        for record in document.records() {
            let Some(icon_path) = record.icon_path() else {
                continue;
            };
            let path = spec.resolve_icon(icon_path);
            let label = record.label();

            if !path.exists() {
                summary.missing.push(Issue::new(
                    IssueKind::MissingFile,
                    &spec.name,
                    &label,
                    path.display().to_string(),
                ));
                summary.error_count += 1;
                continue;
            }

            if !has_png_extension(&path) {
                let issue = Issue::new(IssueKind::Format, &spec.name, &label, "Icon must be PNG format");
                eprintln!("❌ {issue}");
                summary.failures.push(issue);
                summary.error_count += 1;
                continue;
            }

            match self.normalize_file(&path) {
                Ok(NormalizeOutcome::AlreadyValid) => summary.already_valid += 1,
                Ok(NormalizeOutcome::Resized { .. }) => summary.resized += 1,
                Err(err) => {
                    eprintln!("Error resizing {}: {err:#}", path.display());
                    summary.failures.push(Issue::new(
                        IssueKind::Processing,
                        &spec.name,
                        &label,
                        format!("{err:#}"),
                    ));
                    summary.error_count += 1;
                }
            }
        }
    }

    /// Normalizes a single PNG in place.
    pub fn normalize_file(&self, path: &Path) -> Result<NormalizeOutcome> {
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
        println!(
            "Resizing icon: {} to {}x{}",
            path.display(),
            self.target_size,
            self.target_size
        );

        let (width, height) = DecodedDimensions.dimensions(path)?;
        if width == height && is_valid_icon_size(width) {
            println!("✓ {file_name} already valid ({width}x{height})");
            return Ok(NormalizeOutcome::AlreadyValid);
        }

        let mut squared_to = None;
        if width != height {
            let img = image::open(path).context(format!("Failed to decode {}", path.display()))?;
            let square = pad_to_square(&img);
            replace_file(path, &square)?;
            let edge = width.max(height);
            squared_to = Some(edge);
            println!("Made {file_name} square ({edge}x{edge})");
        }

        let mut scaled_to = None;
        let (edge, _) = DecodedDimensions.dimensions(path)?;
        if !is_valid_icon_size(edge) {
            let img = image::open(path).context(format!("Failed to decode {}", path.display()))?;
            let fitted = fit_contain(&img, self.target_size);
            replace_file(path, &fitted)?;
            scaled_to = Some(self.target_size);
            println!(
                "Resized {file_name} to {}x{}",
                self.target_size, self.target_size
            );
        }

        tracing::debug!("{}: squared_to={squared_to:?} scaled_to={scaled_to:?}", path.display());

        Ok(NormalizeOutcome::Resized {
            squared_to,
            scaled_to,
        })
    }
}
