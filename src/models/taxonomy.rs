//! Category and technology taxonomy used to build the filter controls.

use serde::{Deserialize, Serialize};

/// One taxonomy entry (a category or a technology tag).
///
/// The `count` is a display value attached to the filter control; when a
/// registry file omits it, the registry derives it from the actual data
/// at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Identifier in kebab-case (e.g. "landing-page")
    pub id: String,
    /// Display name (e.g. "Landing Page")
    pub name: String,
    /// Number of templates shown next to the control
    #[serde(default)]
    pub count: usize,
}

/// The fixed set of category and technology entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Category filter entries, in display order
    #[serde(default)]
    pub categories: Vec<TaxonomyEntry>,
    /// Technology entries, in display order
    #[serde(default)]
    pub technologies: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Looks up the display name for a category id.
    ///
    /// Returns `None` for unknown ids; callers render nothing in that
    /// case rather than failing.
    #[must_use]
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

/// Human-readable label for a category identifier.
///
/// Capitalizes the first character and replaces every hyphen with a
/// space: "landing-page" becomes "Landing page". Used for the grid
/// header when filters are active.
#[must_use]
pub fn display_label(id: &str) -> String {
    let spaced = id.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
