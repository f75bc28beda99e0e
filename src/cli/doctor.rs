//! Doctor command for environment checking.

use crate::cli::common::{CliError, CliResult, Context};
use crate::doctor::{DependencyChecker, DoctorFormatter, OutputFormat};
use clap::Args;

/// Check the geometry tool and the catalog layout on disk
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        let (config, specs) = context.catalogs()?;

        let checker = DependencyChecker::new(&config.geometry_tool);
        let statuses = checker.check_all(&specs);

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Terminal
        };

        let formatter = DoctorFormatter::with_format(format);
        println!("{}", formatter.format_results(&statuses));

        // A missing geometry tool never fails the run
        if statuses.iter().any(|s| s.is_blocking()) {
            Err(CliError::reported())
        } else {
            Ok(())
        }
    }
}
