//! Typed catalog entries for read-only consumers.

use crate::models::CapabilityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One icon record of a catalog.
///
/// # Validation
///
/// Typed entries are only produced for records that deserialize; schema
/// problems are reported by the schema validator working on raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// Unique identifier (lowercase alphanumerics and hyphens)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Free-form grouping key
    pub category: String,
    /// Path of the icon file, starting with `icons/`
    pub icon_path: String,
    /// Desktop platform support (STIR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<BTreeMap<String, bool>>,
    /// Browser support (BEIR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browsers: Option<BTreeMap<String, bool>>,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IconEntry {
    /// Capability map of the given kind.
    #[must_use]
    pub const fn capabilities(&self, kind: CapabilityKind) -> Option<&BTreeMap<String, bool>> {
        match kind {
            CapabilityKind::Platforms => self.platforms.as_ref(),
            CapabilityKind::Browsers => self.browsers.as_ref(),
        }
    }

    /// Returns true if the entry declares support for `key`.
    #[must_use]
    pub fn supports(&self, kind: CapabilityKind, key: &str) -> bool {
        self.capabilities(kind)
            .and_then(|map| map.get(key))
            .copied()
            .unwrap_or(false)
    }
}

/// Search/category/capability filter over a catalog's entries.
///
/// An entry matches when all three hold:
/// - the search term is a case-insensitive substring of the name or description
/// - the category is `None` or equal to the entry's category
/// - at least one selected capability key is `true` on the entry
#[derive(Debug, Clone)]
pub struct EntryFilter {
    /// Lowercased search term
    search: String,
    /// Required category, `None` for all
    category: Option<String>,
    /// Capability map kind of the catalog being filtered
    kind: CapabilityKind,
    /// Selected capability keys
    selected: Vec<String>,
}

impl EntryFilter {
    /// Creates a filter that matches every entry with any supported capability.
    #[must_use]
    pub fn new(kind: CapabilityKind) -> Self {
        Self {
            search: String::new(),
            category: None,
            kind,
            selected: kind.keys().iter().map(ToString::to_string).collect(),
        }
    }

    /// Restricts matches to entries whose name or description contains `term`.
    pub fn with_search(mut self, term: impl AsRef<str>) -> Self {
        self.search = term.as_ref().to_lowercase();
        self
    }

    /// Restricts matches to a category; `"all"` clears the restriction.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| c != "all");
        self
    }

    /// Replaces the selected capability keys. An empty list keeps the defaults.
    pub fn with_capabilities(mut self, keys: Vec<String>) -> Self {
        if !keys.is_empty() {
            self.selected = keys;
        }
        self
    }

    /// Checks a single entry.
    #[must_use]
    pub fn matches(&self, entry: &IconEntry) -> bool {
        let matches_search = entry.name.to_lowercase().contains(&self.search)
            || entry
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&self.search));

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| c == entry.category);

        let matches_capability = self
            .selected
            .iter()
            .any(|key| entry.supports(self.kind, key));

        matches_search && matches_category && matches_capability
    }

    /// Filters entries, keeping document order.
    pub fn apply<'a>(&self, entries: &'a [IconEntry]) -> Vec<&'a IconEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, category: &str, windows: bool, linux: bool) -> IconEntry {
        let mut platforms = BTreeMap::new();
        platforms.insert("windows".to_string(), windows);
        platforms.insert("mac".to_string(), false);
        platforms.insert("linux".to_string(), linux);
        IconEntry {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            icon_path: format!("icons/{id}.png"),
            platforms: Some(platforms),
            browsers: None,
            description: None,
        }
    }

    #[test]
    fn test_default_filter_requires_some_support() {
        let filter = EntryFilter::new(CapabilityKind::Platforms);
        assert!(filter.matches(&entry("a", "Alpha", "dev", true, false)));
        assert!(!filter.matches(&entry("b", "Beta", "dev", false, false)));
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let mut described = entry("ed", "Editor", "dev", true, true);
        described.description = Some("A Text editing TOOL".to_string());

        let filter = EntryFilter::new(CapabilityKind::Platforms).with_search("tool");
        assert!(filter.matches(&described));
        assert!(!filter.matches(&entry("x", "Other", "dev", true, true)));

        let filter = EntryFilter::new(CapabilityKind::Platforms).with_search("EDIT");
        assert!(filter.matches(&described));
    }

    #[test]
    fn test_category_all_means_any() {
        let e = entry("a", "Alpha", "media", true, true);
        let all = EntryFilter::new(CapabilityKind::Platforms).with_category(Some("all".into()));
        let dev = EntryFilter::new(CapabilityKind::Platforms).with_category(Some("dev".into()));
        assert!(all.matches(&e));
        assert!(!dev.matches(&e));
    }

    #[test]
    fn test_capability_selection_is_any_of() {
        let entries = vec![
            entry("w", "Win only", "dev", true, false),
            entry("l", "Linux only", "dev", false, true),
        ];
        let filter = EntryFilter::new(CapabilityKind::Platforms)
            .with_capabilities(vec!["linux".to_string()]);
        let matched = filter.apply(&entries);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "l");
    }

    #[test]
    fn test_entry_deserializes_with_browsers() {
        let entry: IconEntry = serde_json::from_str(
            r#"{"id":"ext","name":"Ext","category":"tools","icon_path":"icons/ext.png",
                "browsers":{"chrome":true,"firefox":false}}"#,
        )
        .unwrap();
        assert!(entry.supports(CapabilityKind::Browsers, "chrome"));
        assert!(!entry.supports(CapabilityKind::Browsers, "firefox"));
        assert!(!entry.supports(CapabilityKind::Platforms, "linux"));
    }
}
