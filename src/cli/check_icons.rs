//! Existence and format check for icon files.

use crate::cli::common::{CliError, CliResult, Context};
use crate::imaging::{GeometryInspector, IdentifyCommand};
use crate::validator::IconChecker;
use clap::Args;

/// Check that every referenced icon exists, is a PNG and has valid geometry
#[derive(Debug, Clone, Args)]
pub struct CheckIconsArgs {
    /// Skip dimension checks even if the geometry tool is installed
    #[arg(long)]
    pub no_geometry: bool,
}

impl CheckIconsArgs {
    /// Execute the check-icons command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        let (config, specs) = context.catalogs()?;

        println!("Validating icon files...");

        // Probe once for the whole run
        let tool = if self.no_geometry {
            None
        } else {
            IdentifyCommand::detect(&config.geometry_tool)
        };
        match &tool {
            Some(tool) => println!("{} found, checking icon dimensions...", tool.program()),
            None if self.no_geometry => println!("Dimension checks disabled"),
            None => println!(
                "{} not found, skipping dimension checks",
                config.geometry_tool
            ),
        }

        let inspector = tool.as_ref().map(|t| t as &dyn GeometryInspector);
        let report = IconChecker::new(inspector).run(&specs);

        let message = report.format_message();
        if report.passed() {
            print!("{message}");
            Ok(())
        } else {
            eprint!("{message}");
            Err(CliError::reported())
        }
    }
}
