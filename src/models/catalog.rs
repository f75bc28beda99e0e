//! Catalog documents and the raw entry view used by the validators.
//!
//! Catalogs are loaded as untyped JSON so that malformed entries can be
//! reported field by field instead of failing deserialization wholesale.

use crate::models::{CapabilityKind, IconEntry};
use serde_json::Value;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A named catalog and where its data lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSpec {
    /// Display name (e.g., "STIR", "BEIR")
    pub name: String,
    /// Path to the catalog JSON document
    pub database: PathBuf,
    /// Directory holding the icon files referenced by the catalog
    pub icons_dir: PathBuf,
    /// Capability map carried by each entry
    pub capability: CapabilityKind,
}

impl CatalogSpec {
    /// Creates a new catalog spec.
    pub fn new(
        name: impl Into<String>,
        database: impl Into<PathBuf>,
        icons_dir: impl Into<PathBuf>,
        capability: CapabilityKind,
    ) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
            icons_dir: icons_dir.into(),
            capability,
        }
    }

    /// Resolves an entry's `icon_path` to a file inside `icons_dir`.
    ///
    /// Only the final path component is used; any directories encoded in
    /// `icon_path` are ignored.
    #[must_use]
    pub fn resolve_icon(&self, icon_path: &str) -> PathBuf {
        let file_name = Path::new(icon_path)
            .file_name()
            .map_or_else(|| OsString::from(icon_path), OsStr::to_os_string);
        self.icons_dir.join(file_name)
    }
}

/// Failure to turn a file into a [`CatalogDocument`].
#[derive(Debug)]
pub enum CatalogLoadError {
    /// File could not be read
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// File is not valid JSON
    Parse(serde_json::Error),
    /// Document has no `icons` array at its root
    Structure,
}

impl CatalogLoadError {
    /// Structural errors abort the whole schema run.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structure)
    }
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "Invalid JSON: {err}"),
            Self::Structure => f.write_str("missing or invalid \"icons\" array"),
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Structure => None,
        }
    }
}

/// A loaded catalog: the ordered entries of its `icons` array.
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    /// Raw entries in document order
    pub entries: Vec<Value>,
}

impl CatalogDocument {
    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogLoadError> {
        let root: Value = serde_json::from_str(content).map_err(CatalogLoadError::Parse)?;
        match root {
            Value::Object(mut map) => match map.remove("icons") {
                Some(Value::Array(entries)) => Ok(Self { entries }),
                _ => Err(CatalogLoadError::Structure),
            },
            _ => Err(CatalogLoadError::Structure),
        }
    }

    /// Iterates entries as [`IconRecord`] views.
    pub fn records(&self) -> impl Iterator<Item = IconRecord<'_>> {
        self.entries.iter().map(IconRecord::new)
    }

    /// Deserializes entries into [`IconEntry`] values.
    ///
    /// Entries that do not deserialize are skipped with a warning.
    #[must_use]
    pub fn typed_entries(&self) -> Vec<IconEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                match serde_json::from_value::<IconEntry>(raw.clone()) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!("Skipping icon #{}: {e}", index + 1);
                        None
                    }
                }
            })
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Borrowed view over one raw catalog entry.
///
/// Accessors treat `null`, `false`, `0` and `""` as absent.
#[derive(Debug, Clone, Copy)]
pub struct IconRecord<'a> {
    raw: &'a Value,
}

impl<'a> IconRecord<'a> {
    /// Wraps a raw entry.
    #[must_use]
    pub const fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Raw field value, if present and truthy.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.raw.get(name).filter(|value| is_truthy(value))
    }

    /// Field as a non-empty string.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Identifier rendered as text, for non-string ids too.
    #[must_use]
    pub fn id_text(&self) -> Option<String> {
        self.field("id").map(render)
    }

    /// `name`, else `id`, else `fallback`.
    #[must_use]
    pub fn label_or(&self, fallback: &str) -> String {
        self.field("name")
            .or_else(|| self.field("id"))
            .map_or_else(|| fallback.to_string(), render)
    }

    /// Display label used in reports.
    #[must_use]
    pub fn label(&self) -> String {
        self.label_or("unknown icon")
    }

    /// Non-empty `icon_path`.
    #[must_use]
    pub fn icon_path(&self) -> Option<&'a str> {
        self.text("icon_path")
    }

    /// The capability map object, if present.
    #[must_use]
    pub fn capability_map(&self, kind: CapabilityKind) -> Option<&'a Value> {
        self.field(kind.field())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
