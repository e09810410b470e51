//! # Catalog Filter
//!
//! Applies the active query directive to the full product catalog.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Filter                                      │
//! │                                                                         │
//! │  raw catalog ──► filter_catalog(directive) ──► matching subset          │
//! │                                                                         │
//! │  All            every product passes, source order                      │
//! │  Category(L)    any category label == L (case-insensitive, no          │
//! │                 substring matching)                                     │
//! │  Search(T)      lowercased name OR description contains the            │
//! │                 lowercased, percent-decoded T                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and deterministic: same catalog + same directive = same subset.

use crate::directive::Directive;
use crate::types::Product;

/// Returns the subset of `catalog` matching `directive`, in source order.
pub fn filter_catalog(catalog: &[Product], directive: &Directive) -> Vec<Product> {
    match directive {
        Directive::All => catalog.to_vec(),

        Directive::Category(label) => catalog
            .iter()
            .filter(|product| product.has_category(label))
            .cloned()
            .collect(),

        Directive::Search(_) => {
            // search_text is Some by construction for the Search variant
            let needle = directive.search_text().unwrap_or_default().to_lowercase();
            catalog
                .iter()
                .filter(|product| product.matches_text(&needle))
                .cloned()
                .collect()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
