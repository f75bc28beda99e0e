//! Existence and format checking of referenced icon files.
//!
//! For every entry with an `icon_path`, the basename is resolved inside the
//! catalog's icon directory. Missing files and non-PNG extensions are
//! recorded. When a geometry inspector is available, every existing file is
//! additionally checked for being square and within the accepted size range.

use crate::constants::{is_valid_icon_size, ICON_EXTENSION, MAX_ICON_SIZE, MIN_ICON_SIZE};
use crate::imaging::GeometryInspector;
use crate::models::{CatalogDocument, CatalogSpec};
use crate::validator::report::{format_issue_list, Issue, IssueKind};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Returns true if the file extension is `png` in any letter case.
#[must_use]
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ICON_EXTENSION))
}

/// Returns the geometry violation for a `width`×`height` icon, if any.
///
/// Squareness is checked first; size is only checked on square icons.
#[must_use]
pub fn geometry_violation(width: u32, height: u32) -> Option<String> {
    if width != height {
        Some(format!("Icon should be square (is {width}x{height})"))
    } else if !is_valid_icon_size(width) {
        Some(format!(
            "Icon should be between {MIN_ICON_SIZE}px and {MAX_ICON_SIZE}px (is {width}x{height})"
        ))
    } else {
        None
    }
}

/// Check results for one catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogIconReport {
    /// Catalog name
    pub catalog: String,
    /// Entries whose file does not exist
    pub missing: Vec<Issue>,
    /// Wrong extension and geometry violations
    pub format: Vec<Issue>,
    /// Files whose dimensions could not be read
    pub uninspected: Vec<PathBuf>,
}

impl CatalogIconReport {
    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.format.is_empty()
    }
}

/// Check results across all catalogs.
#[derive(Debug, Clone, Default)]
pub struct IconCheckReport {
    /// Icon directories that do not exist; when non-empty nothing else ran
    pub missing_dirs: Vec<(String, PathBuf)>,
    /// Catalog files that could not be loaded
    pub load_errors: Vec<(String, String)>,
    /// Per-catalog results, in order
    pub catalogs: Vec<CatalogIconReport>,
    /// Whether geometry checks ran
    pub geometry_checked: bool,
}

impl IconCheckReport {
    /// All missing-file issues in catalog order.
    pub fn missing(&self) -> impl Iterator<Item = &Issue> {
        self.catalogs.iter().flat_map(|c| c.missing.iter())
    }

    /// All format and geometry issues in catalog order.
    pub fn format_errors(&self) -> impl Iterator<Item = &Issue> {
        self.catalogs.iter().flat_map(|c| c.format.iter())
    }

    /// Missing plus format issues.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.missing().count() + self.format_errors().count()
    }

    /// Returns true when every directory and catalog loaded and nothing was recorded.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing_dirs.is_empty()
            && self.load_errors.is_empty()
            && self.catalogs.iter().all(CatalogIconReport::passed)
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
            let _ = writeln!(message, "❌ Error during icon validation ({catalog}): {err}");
        }

        let missing: Vec<Issue> = self.missing().cloned().collect();
        let format: Vec<Issue> = self.format_errors().cloned().collect();
        message.push_str(&format_issue_list("Missing icon files", &missing));
        message.push_str(&format_issue_list("Icon format errors", &format));

        if self.passed() {
            message.push_str("✅ All icon validations passed\n");
        } else {
            let _ = writeln!(
                message,
                "❌ Icon validation failed with {} errors",
                self.error_count() + self.load_errors.len()
            );
        }

        message
    }
}

/// Strict existence/format checker.
pub struct IconChecker<'a> {
    inspector: Option<&'a dyn GeometryInspector>,
}

impl<'a> IconChecker<'a> {
    /// Creates a checker. `None` skips geometry checks.
    #[must_use]
    pub fn new(inspector: Option<&'a dyn GeometryInspector>) -> Self {
        Self { inspector }
    }

    /// Checks every catalog in order.
    ///
    /// All icon directories must exist before any entry is inspected.
    pub fn run(&self, specs: &[CatalogSpec]) -> IconCheckReport {
        let mut report = IconCheckReport {
            geometry_checked: self.inspector.is_some(),
            ..IconCheckReport::default()
        };

        report.missing_dirs = missing_icon_dirs(specs);
        if !report.missing_dirs.is_empty() {
            return report;
        }

        for spec in specs {
            match CatalogDocument::load(&spec.database) {
                Ok(document) => report.catalogs.push(self.check_catalog(spec, &document)),
                Err(err) => report.load_errors.push((spec.name.clone(), err.to_string())),
            }
        }

        report
    }

    /// Checks one loaded catalog.
    #[must_use]
    pub fn check_catalog(&self, spec: &CatalogSpec, document: &CatalogDocument) -> CatalogIconReport {
        tracing::info!("Checking {} icons", spec.name);
        let mut report = CatalogIconReport {
            catalog: spec.name.clone(),
            ..CatalogIconReport::default()
        };

        let mut existing = Vec::new();

        for record in document.records() {
            let Some(icon_path) = record.icon_path() else {
                continue;
            };
            let path = spec.resolve_icon(icon_path);
            let label = record.label();

            if !path.exists() {
                report.missing.push(Issue::new(
                    IssueKind::MissingFile,
                    &spec.name,
                    &label,
                    path.display().to_string(),
                ));
                continue;
            }

            if !has_png_extension(&path) {
                report.format.push(Issue::new(
                    IssueKind::Format,
                    &spec.name,
                    &label,
                    "Icon must be PNG format",
                ));
            }

            existing.push((label, path));
        }

        if let Some(inspector) = self.inspector {
            tracing::debug!("Checking {} dimensions with {}", spec.name, inspector.name());
            for (label, path) in existing {
                match inspector.dimensions(&path) {
                    Ok((width, height)) => {
                        if let Some(message) = geometry_violation(width, height) {
                            report
                                .format
                                .push(Issue::new(IssueKind::Geometry, &spec.name, label, message));
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Could not check dimensions for {}: {err:#}", path.display());
                        report.uninspected.push(path);
                    }
                }
            }
        }

        report
    }
}

/// Returns `(catalog, dir)` for every icon directory that does not exist.
#[must_use]
pub fn missing_icon_dirs(specs: &[CatalogSpec]) -> Vec<(String, PathBuf)> {
    specs
        .iter()
        .filter(|spec| !spec.icons_dir.is_dir())
        .map(|spec| (spec.name.clone(), spec.icons_dir.clone()))
        .collect()
}
