//! Schema validation command for the catalog documents.

use crate::cli::common::{CliError, CliResult, Context};
use crate::validator::SchemaValidator;
use clap::Args;

/// Validate every catalog document against the entry schema
#[derive(Debug, Clone, Args)]
pub struct ValidateJsonArgs {}

impl ValidateJsonArgs {
    /// Execute the validate-json command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        let (_, specs) = context.catalogs()?;

        let run = SchemaValidator::run(&specs);
        for report in &run.reports {
            println!("Validating {} database...", report.catalog);
            print!("{}", report.format_message());
        }

        if let Some(catalog) = &run.aborted {
            println!("Validating {catalog} database...");
            return Err(CliError::structural(format!(
                "❌ Invalid {catalog} database structure: missing or invalid \"icons\" array"
            )));
        }

        if run.passed() {
            println!("✅ All database validations passed");
            Ok(())
        } else {
            Err(CliError::validation("❌ Database validation failed"))
        }
    }
}
