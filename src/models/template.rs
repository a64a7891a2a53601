//! Template record type and tag normalization.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One catalog entry describing a demoable website starter template.
///
/// Records are immutable for the session and owned exclusively by the
/// registry. Category and technology tags are stored display-cased
/// (e.g. "Landing Page"); matching against selection ids goes through
/// [`normalize_tag`].
///
/// # Validation
///
/// - ID must be kebab-case (lowercase, digits, hyphens, no leading or
///   trailing hyphen) and unique within a registry
/// - Title must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Unique identifier in kebab-case (e.g. "minimal-blog")
    pub id: String,
    /// Display title (e.g. "Minimal Blog")
    pub title: String,
    /// Short description shown on the card
    #[serde(default)]
    pub description: String,
    /// Preview image reference; empty means "use the placeholder"
    #[serde(default)]
    pub image: String,
    /// Category tags, display-cased (e.g. "Landing Page")
    #[serde(default)]
    pub categories: Vec<String>,
    /// Technology tags (e.g. "Tailwind CSS")
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live preview URL
    pub demo_url: String,
    /// Source code URL
    pub source_url: String,
}

impl TemplateRecord {
    /// Validates a record after deserialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not kebab-case or the title is empty.
    pub fn validate(&self) -> Result<()> {
        Self::validate_id(&self.id)?;

        if self.title.trim().is_empty() {
            anyhow::bail!("Template '{}' has an empty title", self.id);
        }

        Ok(())
    }

    /// Validates record ID format (kebab-case).
    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Template ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Template ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Template ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }
}

/// Normalizes a display-cased tag to its identifier form.
///
/// Lowercases the tag and collapses every whitespace run into a single
/// hyphen, so "Landing Page" and "landing  page" both become
/// "landing-page". This is the matching key for category filters.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut in_space = false;

    for c in tag.trim().chars() {
        if c.is_whitespace() {
            in_space = true;
        } else {
            if in_space {
                out.push('-');
                in_space = false;
            }
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> TemplateRecord {
        TemplateRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            categories: vec![],
            technologies: vec![],
            demo_url: "https://example.com/demo".to_string(),
            source_url: "https://example.com/source".to_string(),
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(record("minimal-blog", "Minimal Blog").validate().is_ok());
        assert!(record("saas2", "SaaS Starter").validate().is_ok());
    }

    #[test]
    fn test_invalid_ids() {
        assert!(record("", "x").validate().is_err());
        assert!(record("Minimal-Blog", "x").validate().is_err());
        assert!(record("has space", "x").validate().is_err());
        assert!(record("-leading", "x").validate().is_err());
        assert!(record("trailing-", "x").validate().is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(record("ok-id", "  ").validate().is_err());
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("Landing Page"), "landing-page");
        assert_eq!(normalize_tag("E-commerce"), "e-commerce");
        assert_eq!(normalize_tag("Blog"), "blog");
        assert_eq!(normalize_tag("  App   Router  "), "app-router");
        assert_eq!(normalize_tag("already-normal"), "already-normal");
    }
}
