//! Capability maps: which platforms or browsers an icon supports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of capability map a catalog carries on each entry.
///
/// STIR entries describe desktop platforms, BEIR entries describe browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// `platforms` map with `windows`, `mac` and `linux` flags
    Platforms,
    /// `browsers` map with `chrome` and `firefox` flags
    Browsers,
}

impl CapabilityKind {
    /// JSON field holding the map on each entry.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Platforms => "platforms",
            Self::Browsers => "browsers",
        }
    }

    /// Keys that must be present (and boolean) in the map.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Platforms => &["windows", "mac", "linux"],
            Self::Browsers => &["chrome", "firefox"],
        }
    }

    /// Returns true if `key` is one of this map's keys.
    #[must_use]
    pub fn has_key(self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_keys() {
        assert_eq!(CapabilityKind::Platforms.keys(), &["windows", "mac", "linux"]);
        assert_eq!(CapabilityKind::Browsers.keys(), &["chrome", "firefox"]);
        assert!(CapabilityKind::Browsers.has_key("firefox"));
        assert!(!CapabilityKind::Browsers.has_key("linux"));
    }

    #[test]
    fn test_capability_serde_lowercase() {
        let kind: CapabilityKind = serde_json::from_str("\"browsers\"").unwrap();
        assert_eq!(kind, CapabilityKind::Browsers);
        assert_eq!(
            serde_json::to_string(&CapabilityKind::Platforms).unwrap(),
            "\"platforms\""
        );
        assert!(serde_json::from_str::<CapabilityKind>("\"devices\"").is_err());
    }
}
