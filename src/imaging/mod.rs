//! Image inspection and geometry repair.
//!
//! Dimensions come either from an optional external command (probed once at
//! startup) or from decoding the file in-process. Repairs always decode
//! in-process.

pub mod inspect;
pub mod transform;

// Re-export imaging types
pub use inspect::{DecodedDimensions, GeometryInspector, IdentifyCommand};
pub use transform::{fit_contain, pad_to_square, replace_file};
