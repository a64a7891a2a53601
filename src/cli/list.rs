//! Headless template listing.
//!
//! Runs the same filter pipeline as the TUI grid, printing matches as a
//! table or as JSON for scripting.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_registry, CliError, CliResult};
use crate::filter::{self, Selection};
use crate::models::{normalize_tag, TemplateRecord};

/// List templates matching the given filters
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Path to a registry file (JSON or TOML); defaults to the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Category to filter by; repeat for an OR across categories
    #[arg(short, long, value_name = "ID")]
    pub category: Vec<String>,

    /// Search string matched against titles and descriptions
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the list command
#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    count: usize,
    templates: Vec<&'a TemplateRecord>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let registry = load_registry(self.registry.as_deref())?;

        let selection = Selection {
            categories: self.category.iter().map(|c| normalize_tag(c)).collect(),
            query: self.search.clone().unwrap_or_default(),
        };

        let matches = filter::filter(&registry.templates, &selection);
        let response = ListResponse {
            count: matches.len(),
            templates: matches,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No matching templates found.");
        } else {
            println!("Templates ({}):", response.count);
            println!();
            for record in response.templates {
                println!(
                    "  {:<20} {:<28} {}",
                    record.id,
                    record.title,
                    record.categories.join(", ")
                );
            }
        }

        Ok(())
    }
}
