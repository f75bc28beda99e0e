//! Catalog validation passes.
//!
//! Three independent, sequential passes over the configured catalogs:
//! schema validation of the JSON documents, existence/format checking of
//! the referenced icon files, and in-place normalization of icon geometry.

pub mod icons;
pub mod normalizer;
pub mod report;
pub mod schema;

// Re-export validator types
pub use icons::{CatalogIconReport, IconCheckReport, IconChecker};
pub use normalizer::{NormalizeOutcome, NormalizeSummary, NormalizeVerdict, Normalizer};
pub use report::{Issue, IssueKind};
pub use schema::{CatalogSchemaReport, SchemaRun, SchemaValidator};
