//! Application-wide constants.
//!
//! This module defines the fixed values shared by the validators, the
//! normalizer and the command-line surface.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Icondex";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "icondex";

/// Name of the optional configuration file looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "icondex.toml";

/// Smallest accepted icon edge, in pixels (inclusive).
pub const MIN_ICON_SIZE: u32 = 32;

/// Largest accepted icon edge, in pixels (inclusive).
pub const MAX_ICON_SIZE: u32 = 256;

/// Edge length the normalizer scales out-of-range icons to.
pub const DEFAULT_TARGET_SIZE: u32 = 128;

/// Every `icon_path` in a catalog must start with this prefix.
pub const ICON_PATH_PREFIX: &str = "icons/";

/// Pattern an icon `id` must match.
pub const ICON_ID_PATTERN: &str = "^[a-z0-9-]+$";

/// External command used to read pixel dimensions when available.
pub const DEFAULT_GEOMETRY_TOOL: &str = "identify";

/// Extension (compared case-insensitively) every icon file must carry.
pub const ICON_EXTENSION: &str = "png";

/// Returns true when `edge` lies within `[MIN_ICON_SIZE, MAX_ICON_SIZE]`.
#[must_use]
pub const fn is_valid_icon_size(edge: u32) -> bool {
    edge >= MIN_ICON_SIZE && edge <= MAX_ICON_SIZE
}
