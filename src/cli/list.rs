//! Catalog listing command.
//!
//! Filters one catalog by search term, category and capability, the way the
//! catalog browser page does.

use crate::cli::common::{CliError, CliResult, Context};
use crate::models::{CatalogDocument, CatalogSpec, EntryFilter, IconEntry};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;

/// List catalog entries matching a filter
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Catalog to list (case-insensitive, e.g. STIR)
    #[arg(short, long, value_name = "NAME", default_value = "STIR")]
    pub catalog: String,

    /// Case-insensitive substring of the name or description
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Category to keep ("all" for any)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Capability key to accept (repeatable; defaults to every key)
    #[arg(long = "capability", value_name = "KEY")]
    pub capabilities: Vec<String>,

    /// Print the sorted categories of every catalog instead of entries
    #[arg(long)]
    pub categories: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ListIconsResponse<'a> {
    catalog: &'a str,
    icons: Vec<&'a IconEntry>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<String>,
    count: usize,
}

fn load_entries(spec: &CatalogSpec) -> CliResult<Vec<IconEntry>> {
    let document = CatalogDocument::load(&spec.database)
        .map_err(|e| CliError::io(format!("Failed to load {} database: {e}", spec.name)))?;
    Ok(document.typed_entries())
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, context: &Context) -> CliResult<()> {
        if self.categories {
            return self.list_categories(context);
        }

        let config = context.load_config()?;
        let catalog = config.catalog(&self.catalog).ok_or_else(|| {
            CliError::validation(format!("Unknown catalog: {}", self.catalog))
        })?;
        let spec = catalog.resolve(context.root());

        for key in &self.capabilities {
            if !spec.capability.has_key(key) {
                return Err(CliError::validation(format!(
                    "Unknown {} key '{key}'. Expected one of: {}",
                    spec.capability,
                    spec.capability.keys().join(", ")
                )));
            }
        }

        let entries = load_entries(&spec)?;
        let filter = EntryFilter::new(spec.capability)
            .with_search(&self.search)
            .with_category(self.category.clone())
            .with_capabilities(self.capabilities.clone());
        let matches = filter.apply(&entries);

        let response = ListIconsResponse {
            catalog: &spec.name,
            count: matches.len(),
            icons: matches,
        };

        if self.json {
            println!("{}", to_json(&response)?);
        } else if response.count == 0 {
            println!("No icons match the current filters.");
        } else {
            println!("{} icons ({}):", response.catalog, response.count);
            println!();
            for entry in &response.icons {
                let supported: Vec<&str> = spec
                    .capability
                    .keys()
                    .iter()
                    .copied()
                    .filter(|key| entry.supports(spec.capability, key))
                    .collect();
                println!(
                    "  {:<24} {:<28} {:<16} {}",
                    entry.id,
                    entry.name,
                    entry.category,
                    supported.join(",")
                );
            }
        }

        Ok(())
    }

    fn list_categories(&self, context: &Context) -> CliResult<()> {
        let (_, specs) = context.catalogs()?;

        let mut categories = BTreeSet::new();
        for spec in &specs {
            for entry in load_entries(spec)? {
                categories.insert(entry.category);
            }
        }

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories: categories.into_iter().collect(),
        };

        if self.json {
            println!("{}", to_json(&response)?);
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            for category in &response.categories {
                println!("  {category}");
            }
        }

        Ok(())
    }
}
