//! Selection state and the filter engine.
//!
//! The selection (active category ids plus the search string) is owned by
//! the page-level state; sidebar, filter panel, and search bar all mutate
//! it through the operations here and the next frame recomputes the
//! filtered list. Filtering itself is a pure function over the registry.

use crate::models::{normalize_tag, taxonomy, TemplateRecord};

/// The current filter configuration: active categories plus search text.
///
/// Category ids are kept in insertion order for the active-filter badge
/// row, but matching is membership-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Active category ids (kebab-case)
    pub categories: Vec<String>,
    /// Current search string
    pub query: String,
}

impl Selection {
    /// Creates an empty selection (matches everything).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
            query: String::new(),
        }
    }

    /// Toggles a category id: removes it if present, appends it otherwise.
    pub fn toggle_category(&mut self, id: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == id) {
            self.categories.remove(pos);
        } else {
            self.categories.push(id.to_string());
        }
    }

    /// Whether a category id is currently active.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c == id)
    }

    /// Clears all active categories.
    ///
    /// The search string is left alone; it is edited and cleared
    /// through the search bar only.
    pub fn reset(&mut self) {
        self.categories.clear();
    }

    /// Whether no filter is active at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.query.is_empty()
    }

    /// Appends a character to the search string.
    pub fn query_push(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Removes the last character from the search string.
    pub fn query_pop(&mut self) {
        self.query.pop();
    }

    /// Clears the search string only.
    pub fn query_clear(&mut self) {
        self.query.clear();
    }

    /// Human-readable label of the active category selection.
    ///
    /// Capitalized, hyphens replaced with spaces, comma-joined
    /// ("Landing page, Blog"). Empty when no category is active.
    #[must_use]
    pub fn label(&self) -> String {
        self.categories
            .iter()
            .map(|id| taxonomy::display_label(id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Filters the registry down to records matching the selection.
///
/// A record passes when both predicates hold:
///
/// - **Category match**: the selection has no categories, or at least one
///   of the record's categories, normalized via
///   [`normalize_tag`](crate::models::normalize_tag), is among the
///   selected ids.
/// - **Search match**: the query is empty, or the lowercased query is a
///   substring of the lowercased title or description.
///
/// Order is preserved from the source slice; the result is always a
/// subsequence of it. Pure and total: empty inputs broaden the match.
#[must_use]
pub fn filter<'a>(records: &'a [TemplateRecord], selection: &Selection) -> Vec<&'a TemplateRecord> {
    let query = selection.query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let matches_category = selection.categories.is_empty()
                || record
                    .categories
                    .iter()
                    .any(|cat| selection.is_active(&normalize_tag(cat)));

            let matches_search = query.is_empty()
                || record.title.to_lowercase().contains(&query)
                || record.description.to_lowercase().contains(&query);

            matches_category && matches_search
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, description: &str, categories: &[&str]) -> TemplateRecord {
        TemplateRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: String::new(),
            categories: categories.iter().map(ToString::to_string).collect(),
            technologies: vec![],
            demo_url: "https://example.com/demo".to_string(),
            source_url: "https://example.com/source".to_string(),
        }
    }

    fn registry() -> Vec<TemplateRecord> {
        vec![
            record("minimal-blog", "Minimal Blog", "A clean blog starter", &["Blog"]),
            record(
                "shop-starter",
                "Shop Starter",
                "Storefront with cart",
                &["E-commerce"],
            ),
            record(
                "launch-kit",
                "Launch Kit",
                "Landing page with pricing section",
                &["Landing Page", "SaaS"],
            ),
        ]
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let records = registry();
        let selection = Selection::new();
        let filtered = filter(&records, &selection);

        assert_eq!(filtered.len(), records.len());
        for (got, want) in filtered.iter().zip(records.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_category_match_is_normalization_insensitive() {
        let records = registry();
        let mut selection = Selection::new();
        selection.toggle_category("landing-page");

        let filtered = filter(&records, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "launch-kit");
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let records = registry();

        let mut selection = Selection::new();
        selection.query = "shop".to_string();
        let by_title = filter(&records, &selection);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "shop-starter");

        selection.query = "pricing".to_string();
        let by_description = filter(&records, &selection);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "launch-kit");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = registry();
        let mut selection = Selection::new();
        selection.query = "MINIMAL".to_string();

        let filtered = filter(&records, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "minimal-blog");
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let records = registry();
        let mut selection = Selection::new();
        selection.toggle_category("blog");
        selection.query = "shop".to_string();

        assert!(filter(&records, &selection).is_empty());
    }

    #[test]
    fn test_result_preserves_registry_order() {
        let records = registry();
        let mut selection = Selection::new();
        selection.toggle_category("blog");
        selection.toggle_category("e-commerce");

        let filtered = filter(&records, &selection);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["minimal-blog", "shop-starter"]);
    }

    #[test]
    fn test_filter_is_idempotent_over_inputs() {
        let records = registry();
        let mut selection = Selection::new();
        selection.toggle_category("saas");

        let first = filter(&records, &selection);
        let second = filter(&records, &selection);
        let first_ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut selection = Selection::new();
        selection.toggle_category("blog");
        selection.toggle_category("saas");
        let before = selection.clone();

        selection.toggle_category("dashboard");
        selection.toggle_category("dashboard");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_reset_clears_categories_but_keeps_query() {
        let mut selection = Selection::new();
        selection.toggle_category("blog");
        selection.query = "shop".to_string();

        selection.reset();
        assert!(selection.categories.is_empty());
        assert_eq!(selection.query, "shop");
        assert!(!selection.is_empty());

        selection.query_clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_query_editing() {
        let mut selection = Selection::new();
        selection.query_push('s');
        selection.query_push('h');
        selection.query_push('o');
        selection.query_push('p');
        assert_eq!(selection.query, "shop");

        selection.query_pop();
        assert_eq!(selection.query, "sho");

        selection.query_clear();
        assert!(selection.query.is_empty());
    }

    #[test]
    fn test_selection_label() {
        let mut selection = Selection::new();
        assert_eq!(selection.label(), "");

        selection.toggle_category("landing-page");
        selection.toggle_category("blog");
        assert_eq!(selection.label(), "Landing page, Blog");
    }
}
