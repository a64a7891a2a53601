//! Template registry: the static, ordered list of records plus taxonomy.
//!
//! The registry is loaded once before first render, either from the
//! embedded dataset or from an external TOML/JSON file, and is read-only
//! afterwards. Taxonomy counts are display values; when a source omits
//! them they get derived from the actual records at load time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{normalize_tag, Taxonomy, TemplateRecord};

/// Registry file schema (embedded dataset and external files share it).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    version: Option<String>,
    templates: Vec<TemplateRecord>,
    #[serde(default)]
    taxonomy: Taxonomy,
}

/// The template registry consumed by the filter engine and the UI.
#[derive(Debug, Clone)]
pub struct Registry {
    /// All template records, in catalog order
    pub templates: Vec<TemplateRecord>,
    /// Category/technology entries for the filter controls
    pub taxonomy: Taxonomy,
}

impl Registry {
    /// Loads the dataset embedded in the binary at compile time.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("data/templates.json");
        let file: RegistryFile =
            serde_json::from_str(json_data).context("Failed to parse embedded templates.json")?;
        Self::from_file(file)
    }

    /// Loads a registry from an external TOML or JSON file.
    ///
    /// The format is chosen by extension; anything that is not `.json`
    /// is parsed as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry file: {}", path.display()))?;

        let file: RegistryFile = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse JSON registry: {}", path.display()))?
        } else {
            toml::from_str(&data)
                .with_context(|| format!("Failed to parse TOML registry: {}", path.display()))?
        };

        Self::from_file(file)
    }

    /// Validates records and fills in derived taxonomy counts.
    fn from_file(file: RegistryFile) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &file.templates {
            record.validate()?;
            if !seen.insert(record.id.clone()) {
                anyhow::bail!("Duplicate template ID '{}'", record.id);
            }
        }

        let mut taxonomy = file.taxonomy;
        derive_counts(&mut taxonomy.categories, &file.templates, |r| &r.categories);
        derive_counts(&mut taxonomy.technologies, &file.templates, |r| {
            &r.technologies
        });

        Ok(Self {
            templates: file.templates,
            taxonomy,
        })
    }

    /// Number of records in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Fills in zero counts with the number of records carrying the tag.
///
/// An explicit non-zero count from a registry file is kept as-is: it is
/// a display value owned by the data source.
fn derive_counts<F>(entries: &mut [crate::models::TaxonomyEntry], records: &[TemplateRecord], tags: F)
where
    F: Fn(&TemplateRecord) -> &Vec<String>,
{
    for entry in entries.iter_mut() {
        if entry.count == 0 {
            entry.count = records
                .iter()
                .filter(|r| tags(r).iter().any(|t| normalize_tag(t) == entry.id))
                .count();
        }
    }
}
