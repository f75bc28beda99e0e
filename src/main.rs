//! Icondex - icon catalog validation and normalization
//!
//! Runs the schema, existence/format and normalization passes over the STIR
//! and BEIR catalogs and reports the result through the exit code.
//!
//! # Usage
//!
//! ```bash
//! # Check both catalog documents
//! icondex validate-json
//!
//! # Check icon files, using a repository elsewhere
//! icondex --root ../stir-beir check-icons
//!
//! # Repair icon geometry, scaling out-of-range icons to 96px
//! icondex normalize --size 96
//! ```

use clap::{Parser, Subcommand};
use icondex::cli::{
    CheckIconsArgs, CliResult, Context, DoctorArgs, ExitCode, ListArgs, NormalizeArgs,
    ValidateJsonArgs,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Icondex - validate and normalize the STIR and BEIR icon catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository root the catalog paths are relative to
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <root>/icondex.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the catalog documents against the entry schema
    ValidateJson(ValidateJsonArgs),
    /// Check that icon files exist, are PNGs and have valid dimensions
    CheckIcons(CheckIconsArgs),
    /// Pad and rescale icon files in place
    Normalize(NormalizeArgs),
    /// List and filter catalog entries
    List(ListArgs),
    /// Check the geometry tool and catalog layout
    Doctor(DoctorArgs),
}

impl Command {
    fn execute(&self, context: &Context) -> CliResult<()> {
        match self {
            Self::ValidateJson(args) => args.execute(context),
            Self::CheckIcons(args) => args.execute(context),
            Self::Normalize(args) => args.execute(context),
            Self::List(args) => args.execute(context),
            Self::Doctor(args) => args.execute(context),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Reports go to stdout; logs share stderr with diagnostics
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let context = Context::new(cli.root, cli.config);

    let code = match cli.command.execute(&context) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("{e}");
            }
            e.exit_code()
        }
    };

    std::process::exit(code.code());
}
