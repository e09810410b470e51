//! # Category Grouper
//!
//! Partitions a filtered product subset into per-category groups for the
//! homepage sections.
//!
//! ## Grouping Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Category Grouper                                    │
//! │                                                                         │
//! │  All            one group per category label; a product with k         │
//! │                 labels appears in k groups                              │
//! │  Category(L)    single group, keyed by the label's casing ON THE       │
//! │                 PRODUCT (not the query's casing); empty match =>        │
//! │                 empty mapping, no empty group key                       │
//! │  Search(T)      single synthetic "Search Results" group                 │
//! │                                                                         │
//! │  Group values keep source order; display keys iterate in              │
//! │  lexicographic order.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::directive::Directive;
use crate::types::Product;

/// Display key of the synthetic group produced under a search directive.
pub const SEARCH_RESULTS_LABEL: &str = "Search Results";

// =============================================================================
// Category Groups
// =============================================================================

/// Products grouped by category label for display.
///
/// Backed by a `BTreeMap` so iterating the keys IS the sorted display
/// order; each group's products keep source (catalog) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryGroups {
    groups: BTreeMap<String, Vec<Product>>,
}

impl CategoryGroups {
    /// Display labels in lexicographic order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The products under a display label, in source order.
    pub fn get(&self, label: &str) -> Option<&[Product]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Iterates (label, products) in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Product])> {
        self.groups
            .iter()
            .map(|(label, products)| (label.as_str(), products.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group was produced (e.g. a category match came up empty).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, label: &str, product: Product) {
        self.groups.entry(label.to_string()).or_default().push(product);
    }
}

// =============================================================================
// Grouping
// =============================================================================

/// Groups an already-filtered product subset under the active directive.
///
/// Products are redistributed by reference-of-record (cloned), never
/// mutated.
pub fn group_by_category(filtered: &[Product], directive: &Directive) -> CategoryGroups {
    let mut groups = CategoryGroups::default();

    match directive {
        Directive::All => {
            for product in filtered {
                for label in &product.categories {
                    groups.push(label, product.clone());
                }
            }
        }

        Directive::Category(label) => {
            // The single display key takes the casing of the first matching
            // product's own label; the mapping stays empty when nothing
            // matched.
            let display_label = filtered
                .iter()
                .find_map(|product| product.matching_category(label))
                .map(str::to_string);

            if let Some(display_label) = display_label {
                for product in filtered {
                    if product.has_category(label) {
                        groups.push(&display_label, product.clone());
                    }
                }
            }
        }

        Directive::Search(_) => {
            for product in filtered {
                groups.push(SEARCH_RESULTS_LABEL, product.clone());
            }
        }
    }

    groups
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_catalog;

    fn product(id: &str, name: &str, categories: &[&str]) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price_cents: 500,
            regular_price_cents: None,
            photo_url: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_all_mode_inserts_once_per_category() {
        let catalog = vec![
            product("1", "Rose Serum", &["Serum"]),
            product("2", "Night Cream", &["Cream", "Serum"]),
        ];

        let groups = group_by_category(&catalog, &Directive::All);

        assert_eq!(groups.len(), 2);
        let labels: Vec<&str> = groups.labels().collect();
        assert_eq!(labels, vec!["Cream", "Serum"]);

        // Product 2 appears in both of its category groups
        assert_eq!(groups.get("Cream").unwrap().len(), 1);
        assert_eq!(groups.get("Serum").unwrap().len(), 2);

        // Total memberships = sum of category label counts, nothing dropped
        let memberships: usize = groups.iter().map(|(_, products)| products.len()).sum();
        let expected: usize = catalog.iter().map(|p| p.categories.len()).sum();
        assert_eq!(memberships, expected);
    }

    #[test]
    fn test_group_values_keep_catalog_order() {
        let catalog = vec![
            product("2", "Night Cream", &["Serum"]),
            product("1", "Rose Serum", &["Serum"]),
        ];

        let groups = group_by_category(&catalog, &Directive::All);
        let ids: Vec<&str> = groups.get("Serum").unwrap().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_category_mode_uses_product_casing_for_key() {
        let catalog = vec![product("1", "Rose Serum", &["Serum"])];
        let directive = Directive::Category("serum".to_string());

        let filtered = filter_catalog(&catalog, &directive);
        let groups = group_by_category(&filtered, &directive);

        // Key is "Serum" (the product's casing), not "serum" (the query's)
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.labels().next(), Some("Serum"));
        assert_eq!(groups.get("Serum").unwrap()[0].id, "1");
        assert!(groups.get("serum").is_none());
    }

    #[test]
    fn test_category_mode_empty_match_creates_no_key() {
        let catalog = vec![product("1", "Rose Serum", &["Serum"])];
        let directive = Directive::Category("Toner".to_string());

        let filtered = filter_catalog(&catalog, &directive);
        let groups = group_by_category(&filtered, &directive);

        assert!(groups.is_empty());
        assert_eq!(groups.labels().count(), 0);
    }

    #[test]
    fn test_search_mode_collapses_into_synthetic_group() {
        let catalog = vec![
            product("1", "Rose Serum", &["Serum"]),
            product("2", "Rose Toner", &["Toner"]),
        ];
        let directive = Directive::Search("rose".to_string());

        let filtered = filter_catalog(&catalog, &directive);
        let groups = group_by_category(&filtered, &directive);

        assert_eq!(groups.len(), 1);
        let results = groups.get(SEARCH_RESULTS_LABEL).unwrap();
        assert_eq!(results.len(), 2);
        // Filter order preserved
        assert_eq!(results[0].id, "1");
        assert_eq!(results[1].id, "2");
    }

    #[test]
    fn test_end_to_end_scenario() {
        // The canonical two-product walkthrough: Rose Serum + Ocean Toner
        let catalog = vec![
            product("1", "Rose Serum", &["Serum"]),
            product("2", "Ocean Toner", &["Toner"]),
        ];

        // Category("serum") -> {"Serum": [1]}
        let directive = Directive::Category("serum".to_string());
        let groups = group_by_category(&filter_catalog(&catalog, &directive), &directive);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("Serum").unwrap()[0].id, "1");

        // Search("rose") -> {"Search Results": [1]}
        let directive = Directive::Search("rose".to_string());
        let groups = group_by_category(&filter_catalog(&catalog, &directive), &directive);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(SEARCH_RESULTS_LABEL).unwrap()[0].id, "1");

        // All -> {"Serum": [1], "Toner": [2]} with sorted display keys
        let directive = Directive::All;
        let groups = group_by_category(&filter_catalog(&catalog, &directive), &directive);
        let labels: Vec<&str> = groups.labels().collect();
        assert_eq!(labels, vec!["Serum", "Toner"]);
        assert_eq!(groups.get("Serum").unwrap()[0].id, "1");
        assert_eq!(groups.get("Toner").unwrap()[0].id, "2");
    }
}
