//! Headless taxonomy listing.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_registry, CliError, CliResult};
use crate::models::TaxonomyEntry;

/// List the category and technology taxonomy
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Path to a registry file (JSON or TOML); defaults to the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the categories command
#[derive(Debug, Serialize)]
struct CategoriesResponse<'a> {
    categories: &'a [TaxonomyEntry],
    technologies: &'a [TaxonomyEntry],
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let registry = load_registry(self.registry.as_deref())?;
        let taxonomy = &registry.taxonomy;

        if self.json {
            let response = CategoriesResponse {
                categories: &taxonomy.categories,
                technologies: &taxonomy.technologies,
            };
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Categories ({}):", taxonomy.categories.len());
        println!();
        for entry in &taxonomy.categories {
            println!("  {:<20} {:<24} {}", entry.id, entry.name, entry.count);
        }

        println!();
        println!("Technologies ({}):", taxonomy.technologies.len());
        println!();
        for entry in &taxonomy.technologies {
            println!("  {:<20} {:<24} {}", entry.id, entry.name, entry.count);
        }

        Ok(())
    }
}
