//! In-place normalization command for icon files.

use crate::cli::common::{CliError, CliResult, Context};
use crate::constants::{is_valid_icon_size, DEFAULT_TARGET_SIZE};
use crate::validator::Normalizer;
use clap::Args;

/// Pad non-square icons and rescale out-of-range icons in place
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Edge length for icons outside 32..=256 (invalid values fall back to 128)
    #[arg(long, value_name = "N")]
    pub size: Option<String>,
}

impl NormalizeArgs {
    /// Resolves `--size`, warning and falling back to the default when invalid.
    #[must_use]
    pub fn target_size(&self) -> u32 {
        let Some(raw) = self.size.as_deref() else {
            return DEFAULT_TARGET_SIZE;
        };

        match parse_target_size(raw) {
            Some(size) => size,
            None => {
                eprintln!(
                    "Invalid size specified. Using default size of {DEFAULT_TARGET_SIZE}px"
                );
                DEFAULT_TARGET_SIZE
            }
        }
    }

    /// Execute the normalize command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        let target_size = self.target_size();
        let (_, specs) = context.catalogs()?;

        println!("Validating and resizing icon files to {target_size}x{target_size}...");

        let summary = Normalizer::new(target_size).run(&specs);
        let verdict = summary.verdict();
        let message = summary.format_message();

        if verdict.is_success() {
            print!("{message}");
            Ok(())
        } else {
            eprint!("{message}");
            Err(CliError::reported())
        }
    }
}

/// Parses a size the way a lenient integer prefix parse would ("64px" is 64).
///
/// Returns `None` unless the value lies in `32..=256`.
#[must_use]
pub fn parse_target_size(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|size| is_valid_icon_size(*size))
}
