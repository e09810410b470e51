//! # Query Directive
//!
//! The single active catalog query mode, read from the page's query
//! parameters.
//!
//! ## Directive Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Directive Resolution                                 │
//! │                                                                         │
//! │  Query string                 Directive                                 │
//! │  ────────────                 ─────────                                 │
//! │  (none)                       All                                       │
//! │  ?category=Serum              Category("Serum")                         │
//! │  ?product=rose%20serum        Search("rose%20serum")                    │
//! │  ?category=Serum&product=x    Search("x")        <- search wins         │
//! │                                                                         │
//! │  Search text stays percent-encoded inside the directive; decoding       │
//! │  happens at match time, with a literal fallback when the encoding       │
//! │  is malformed.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The active catalog query mode. Exactly one directive is honored at a
/// time; free-text search takes precedence over a category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum Directive {
    /// No directive - the full catalog, grouped by every category.
    #[default]
    All,

    /// Keep products carrying this category label (case-insensitive match).
    Category(String),

    /// Keep products whose name or description contains this text.
    /// Stored as received from the query string (possibly percent-encoded).
    Search(String),
}

impl Directive {
    /// Builds the directive from the two optional query parameters.
    ///
    /// ## Precedence
    /// - `product` (search text) wins when both are present
    /// - Blank or whitespace-only parameters count as absent
    pub fn from_params(category: Option<&str>, product: Option<&str>) -> Self {
        let product = product.map(str::trim).filter(|p| !p.is_empty());
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        if let Some(text) = product {
            return Directive::Search(text.to_string());
        }
        if let Some(label) = category {
            return Directive::Category(label.to_string());
        }
        Directive::All
    }

    /// Returns true when no directive is active.
    pub fn is_all(&self) -> bool {
        matches!(self, Directive::All)
    }

    /// The decoded search text, when this directive is a search.
    ///
    /// Malformed percent-encoding falls back to the literal raw string -
    /// a bad query parameter must never take the pipeline down.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Directive::Search(raw) => Some(decode_search_text(raw)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::All => write!(f, "all"),
            Directive::Category(label) => write!(f, "category:{}", label),
            Directive::Search(text) => write!(f, "search:{}", text),
        }
    }
}

/// Percent-decodes search text, falling back to the raw literal when the
/// encoding is malformed (invalid UTF-8 after decoding).
pub fn decode_search_text(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

// =============================================================================
// Navigation Links
// =============================================================================

/// Builds the outgoing link for a category card.
///
/// The category label is deliberately left un-encoded - the canonical
/// directive encoding for the `category` parameter is the raw label.
pub fn category_link(label: &str) -> String {
    format!("?category={}", label)
}

/// Builds the outgoing link for a product search.
///
/// Search text IS percent-encoded; `Directive::search_text` undoes it.
pub fn search_link(text: &str) -> String {
    format!("?product={}", urlencoding::encode(text))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_is_all() {
        assert_eq!(Directive::from_params(None, None), Directive::All);
        assert!(Directive::from_params(None, None).is_all());
    }

    #[test]
    fn test_blank_params_count_as_absent() {
        assert_eq!(Directive::from_params(Some(""), Some("  ")), Directive::All);
    }

    #[test]
    fn test_category_param() {
        let directive = Directive::from_params(Some("Serum"), None);
        assert_eq!(directive, Directive::Category("Serum".to_string()));
    }

    #[test]
    fn test_search_wins_over_category() {
        let directive = Directive::from_params(Some("Serum"), Some("rose"));
        assert_eq!(directive, Directive::Search("rose".to_string()));
    }

    #[test]
    fn test_search_text_is_decoded() {
        let directive = Directive::Search("rose%20serum".to_string());
        assert_eq!(directive.search_text(), Some("rose serum".to_string()));
    }

    #[test]
    fn test_malformed_search_text_falls_back_to_literal() {
        // %FF decodes to a byte that is not valid UTF-8
        let directive = Directive::Search("rose%FF".to_string());
        assert_eq!(directive.search_text(), Some("rose%FF".to_string()));
    }

    #[test]
    fn test_category_link_is_not_encoded() {
        assert_eq!(
            category_link("Cream & Moisturizers"),
            "?category=Cream & Moisturizers"
        );
    }

    #[test]
    fn test_search_link_round_trips_through_directive() {
        let link = search_link("rose serum");
        assert_eq!(link, "?product=rose%20serum");

        let raw = link.trim_start_matches("?product=");
        let directive = Directive::from_params(None, Some(raw));
        assert_eq!(directive.search_text(), Some("rose serum".to_string()));
    }
}
