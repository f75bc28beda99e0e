//! CLI command handlers.
//!
//! Each subcommand is a clap `Args` struct with an `execute()` method that
//! prints its report and returns a [`CliResult`].

pub mod check_icons;
pub mod common;
pub mod doctor;
pub mod list;
pub mod normalize;
pub mod validate_json;

// Re-export types used by main.rs and tests
pub use check_icons::CheckIconsArgs;
pub use common::{CliError, CliResult, Context, ExitCode};
pub use doctor::DoctorArgs;
pub use list::ListArgs;
pub use normalize::NormalizeArgs;
pub use validate_json::ValidateJsonArgs;
