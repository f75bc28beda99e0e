//! Schema validation of catalog documents.
//!
//! Each entry is checked against the fixed field schema, identifiers are
//! checked for duplicates, and a per-catalog report is produced. A catalog
//! whose root is not `{ "icons": [...] }` aborts the run.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use crate::constants::{ICON_ID_PATTERN, ICON_PATH_PREFIX};
use crate::models::{CatalogDocument, CatalogSpec, IconRecord};
use crate::validator::report::{Issue, IssueKind};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ICON_ID_PATTERN).expect("id pattern is a valid regex"))
}

/// Returns true if `id` matches `^[a-z0-9-]+$`.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id_pattern().is_match(id)
}

/// Schema issues of a single entry.
#[derive(Debug, Clone)]
pub struct EntryIssues {
    /// 1-based position in the catalog
    pub position: usize,
    /// Entry label (name, id or "unknown")
    pub label: String,
    /// Issues found on the entry
    pub issues: Vec<Issue>,
}

/// Schema validation result for one catalog.
#[derive(Debug, Clone)]
pub struct CatalogSchemaReport {
    /// Catalog name
    pub catalog: String,
    /// Number of entries checked
    pub icon_count: usize,
    /// Entries with at least one issue, in document order
    pub entries: Vec<EntryIssues>,
    /// Every occurrence of an id after its first
    pub duplicates: Vec<Issue>,
    /// Read or parse failure that prevented validation
    pub load_error: Option<String>,
}

impl CatalogSchemaReport {
    fn new(catalog: &str) -> Self {
        Self {
            catalog: catalog.to_string(),
            icon_count: 0,
            entries: Vec::new(),
            duplicates: Vec::new(),
            load_error: None,
        }
    }

    /// Entry issues plus duplicates.
    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.entries.iter().map(|e| e.issues.len()).sum::<usize>() + self.duplicates.len()
    }

    /// Returns true if the catalog loaded and has no errors.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.load_error.is_none() && self.total_errors() == 0
    }

    /// Formats the report for the diagnostic stream.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if let Some(err) = &self.load_error {
            message.push_str(&format!(
                "❌ Error reading or parsing {} database: {}\n",
                self.catalog, err
            ));
            return message;
        }

        for entry in &self.entries {
            message.push_str(&format!(
                "❌ Issues with {} icon #{} ({}):\n",
                self.catalog, entry.position, entry.label
            ));
            for issue in &entry.issues {
                message.push_str(&format!("   - {issue}\n"));
            }
        }

        if !self.duplicates.is_empty() {
            message.push_str(&format!(
                "❌ Duplicate IDs found in {} database:\n",
                self.catalog
            ));
            for dup in &self.duplicates {
                message.push_str(&format!("   - {dup}\n"));
            }
        }

        if self.passed() {
            message.push_str(&format!(
                "✅ {} database validation passed ({} icons)\n",
                self.catalog, self.icon_count
            ));
        } else {
            message.push_str(&format!(
                "❌ {} database validation failed with {} errors\n",
                self.catalog,
                self.total_errors()
            ));
        }

        message
    }
}

/// Result of validating a list of catalogs.
#[derive(Debug, Default)]
pub struct SchemaRun {
    /// Reports for every catalog processed, in order
    pub reports: Vec<CatalogSchemaReport>,
    /// Catalog whose root structure was malformed; processing stopped there
    pub aborted: Option<String>,
}

impl SchemaRun {
    /// Returns true if no catalog aborted and every report passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.aborted.is_none() && self.reports.iter().all(CatalogSchemaReport::passed)
    }
}

/// Validates catalog entries against the field schema.
pub struct SchemaValidator<'a> {
    spec: &'a CatalogSpec,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for one catalog.
    #[must_use]
    pub const fn new(spec: &'a CatalogSpec) -> Self {
        Self { spec }
    }

    /// Loads and validates every catalog in order.
    ///
    /// Read and parse failures fail only their catalog. A malformed root
    /// stops the run before later catalogs are touched.
    pub fn run(specs: &'a [CatalogSpec]) -> SchemaRun {
        let mut run = SchemaRun::default();

        for spec in specs {
            tracing::info!("Validating {} database", spec.name);
            match CatalogDocument::load(&spec.database) {
                Ok(document) => run.reports.push(Self::new(spec).validate(&document)),
                Err(err) if err.is_structural() => {
                    tracing::error!("{} has a malformed root: {err}", spec.database.display());
                    run.aborted = Some(spec.name.clone());
                    break;
                }
                Err(err) => {
                    let mut report = CatalogSchemaReport::new(&spec.name);
                    report.load_error = Some(err.to_string());
                    run.reports.push(report);
                }
            }
        }

        run
    }

    /// Validates an already-loaded document.
    #[must_use]
    pub fn validate(&self, document: &CatalogDocument) -> CatalogSchemaReport {
        let mut report = CatalogSchemaReport::new(&self.spec.name);
        report.icon_count = document.len();

        let mut seen: HashSet<String> = HashSet::new();

        for (index, record) in document.records().enumerate() {
            if let Some(id) = record.id_text() {
                if !seen.insert(id.clone()) {
                    report.duplicates.push(Issue::new(
                        IssueKind::DuplicateId,
                        &self.spec.name,
                        id,
                        "Duplicate ID",
                    ));
                }
            }

            let issues = self.check_entry(&record);
            if !issues.is_empty() {
                report.entries.push(EntryIssues {
                    position: index + 1,
                    label: record.label_or("unknown"),
                    issues,
                });
            }
        }

        tracing::debug!(
            "{}: {} entries, {} errors",
            self.spec.name,
            report.icon_count,
            report.total_errors()
        );

        report
    }

    /// Checks one entry and returns its schema issues.
    #[must_use]
    pub fn check_entry(&self, record: &IconRecord<'_>) -> Vec<Issue> {
        let mut messages = Vec::new();
        let id = record.id_text();
        let label = record.label();
        let id_or_unknown = id.clone().unwrap_or_else(|| "unknown icon".to_string());

        // Required fields
        if id.is_none() {
            messages.push("Missing 'id' field".to_string());
        }
        if record.field("name").is_none() {
            messages.push(format!("Missing 'name' field for {id_or_unknown}"));
        }
        for field in ["category", "icon_path"] {
            if record.field(field).is_none() {
                messages.push(format!("Missing '{field}' field for {label}"));
            }
        }

        // Capability map
        let kind = self.spec.capability;
        match record.capability_map(kind) {
            None => messages.push(format!("Missing '{}' field for {label}", kind.field())),
            Some(map) => {
                for key in kind.keys() {
                    if !matches!(map.get(*key), Some(Value::Bool(_))) {
                        messages.push(format!(
                            "'{}.{key}' must be a boolean for {label}",
                            kind.field()
                        ));
                    }
                }
            }
        }

        // Field formats
        if let Some(raw_id) = record.field("id") {
            let valid = raw_id.as_str().is_some_and(is_valid_id);
            if !valid {
                messages.push(format!(
                    "'id' must be lowercase with hyphens for spaces: {}",
                    id.as_deref().unwrap_or_default()
                ));
            }
        }

        if let Some(path) = record.field("icon_path") {
            let prefixed = path
                .as_str()
                .is_some_and(|p| p.starts_with(ICON_PATH_PREFIX));
            if !prefixed {
                let shown = path.as_str().map_or_else(|| path.to_string(), str::to_string);
                messages.push(format!(
                    "'icon_path' must start with '{ICON_PATH_PREFIX}': {shown}"
                ));
            }
        }

        messages
            .into_iter()
            .map(|message| Issue::new(IssueKind::Schema, &self.spec.name, &label, message))
            .collect()
    }
}
