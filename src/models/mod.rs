//! Data models for icon catalogs and their entries.
//!
//! This module contains the core data structures shared by the validators,
//! the normalizer and the read-only catalog browser.
//! Models are independent of reporting and command-line concerns.

pub mod capability;
pub mod catalog;
pub mod icon_entry;

// Re-export all model types
pub use capability::CapabilityKind;
pub use catalog::{CatalogDocument, CatalogLoadError, CatalogSpec, IconRecord};
pub use icon_entry::{EntryFilter, IconEntry};
