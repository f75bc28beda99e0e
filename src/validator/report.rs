//! Issues collected by the validation passes.

use std::fmt;

/// Types of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Missing or malformed entry field
    Schema,
    /// Identifier already used by an earlier entry
    DuplicateId,
    /// Referenced icon file does not exist
    MissingFile,
    /// Icon file is not a PNG
    Format,
    /// Icon is not square or outside the accepted size range
    Geometry,
    /// Image could not be decoded, composited, resized or written
    Processing,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => write!(f, "Schema"),
            Self::DuplicateId => write!(f, "Duplicate ID"),
            Self::MissingFile => write!(f, "Missing File"),
            Self::Format => write!(f, "Format"),
            Self::Geometry => write!(f, "Geometry"),
            Self::Processing => write!(f, "Processing"),
        }
    }
}

/// One recorded problem, attributed to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Type of issue
    pub kind: IssueKind,
    /// Catalog name (e.g., "STIR")
    pub catalog: String,
    /// Entry label or identifier the issue is about
    pub subject: String,
    /// Human-readable detail
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(
        kind: IssueKind,
        catalog: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            catalog: catalog.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            // Missing files carry the resolved path as their message
            IssueKind::MissingFile => {
                write!(f, "{}: {} ({})", self.catalog, self.subject, self.message)
            }
            IssueKind::DuplicateId => write!(f, "{}", self.subject),
            IssueKind::Schema => write!(f, "{}", self.message),
            _ => write!(f, "{}: {} - {}", self.catalog, self.subject, self.message),
        }
    }
}

/// Formats a titled bullet list, or nothing for an empty list.
#[must_use]
pub fn format_issue_list(title: &str, issues: &[Issue]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if issues.is_empty() {
        return out;
    }
    let _ = writeln!(out, "❌ {title}:");
    for issue in issues {
        let _ = writeln!(out, "   - {issue}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_per_kind() {
        let missing = Issue::new(
            IssueKind::MissingFile,
            "STIR",
            "Visual Studio",
            "data/stir/icons/vs.png",
        );
        assert_eq!(missing.to_string(), "STIR: Visual Studio (data/stir/icons/vs.png)");

        let format = Issue::new(
            IssueKind::Format,
            "BEIR",
            "uBlock",
            "Icon must be PNG format",
        );
        assert_eq!(format.to_string(), "BEIR: uBlock - Icon must be PNG format");

        let dup = Issue::new(IssueKind::DuplicateId, "STIR", "vs-code", "duplicate id");
        assert_eq!(dup.to_string(), "vs-code");
    }

    #[test]
    fn test_format_issue_list() {
        assert!(format_issue_list("Missing icon files", &[]).is_empty());

        let issues = vec![Issue::new(IssueKind::Geometry, "STIR", "A", "Icon should be square (is 10x20)")];
        let out = format_issue_list("Icon format errors", &issues);
        assert!(out.starts_with("❌ Icon format errors:\n"));
        assert!(out.contains("   - STIR: A - Icon should be square (is 10x20)"));
    }
}
