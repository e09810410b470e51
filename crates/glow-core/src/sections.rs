//! # Curated Sections
//!
//! Derives the randomized promotional rows (trending / special /
//! best-selling) from the full, unfiltered catalog.
//!
//! ## Selection Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Section Selector                                    │
//! │                                                                         │
//! │  raw catalog ──► shuffle ──► first 8 ──► trending                       │
//! │  raw catalog ──► shuffle ──► first 4 ──► special                        │
//! │  raw catalog ──► shuffle ──► first 8 ──► best selling                   │
//! │                                                                         │
//! │  • One INDEPENDENT permutation per section                              │
//! │  • Recomputed on every catalog load, never persisted                    │
//! │  • Catalogs smaller than a slice return what there is                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The random source is a parameter, not an ambient call - callers own the
//! RNG, tests seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::{BEST_SELLING_LIMIT, SPECIAL_LIMIT, TRENDING_LIMIT};

// =============================================================================
// Section Limits
// =============================================================================

/// Upper bounds for each curated section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SectionLimits {
    pub trending: usize,
    pub special: usize,
    pub best_selling: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        SectionLimits {
            trending: TRENDING_LIMIT,
            special: SPECIAL_LIMIT,
            best_selling: BEST_SELLING_LIMIT,
        }
    }
}

// =============================================================================
// Curated Sections
// =============================================================================

/// The three promotional product rows on the homepage.
///
/// Derived only when no directive is active; independent of filtering and
/// grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CuratedSections {
    /// "Trending Now" row, at most 8 products.
    pub trending: Vec<Product>,

    /// "Special For You" row, at most 4 products.
    pub special: Vec<Product>,

    /// "Best Selling" row, at most 8 products.
    pub best_selling: Vec<Product>,
}

/// Selects the curated sections with the default limits.
pub fn select_sections<R: Rng + ?Sized>(catalog: &[Product], rng: &mut R) -> CuratedSections {
    select_sections_with(catalog, SectionLimits::default(), rng)
}

/// Selects the curated sections with explicit limits.
///
/// Each section draws from its own uniform permutation of the catalog, so
/// trending and best-selling diverge even though they share a bound.
pub fn select_sections_with<R: Rng + ?Sized>(
    catalog: &[Product],
    limits: SectionLimits,
    rng: &mut R,
) -> CuratedSections {
    CuratedSections {
        trending: draw(catalog, limits.trending, rng),
        special: draw(catalog, limits.special, rng),
        best_selling: draw(catalog, limits.best_selling, rng),
    }
}

/// Uniformly shuffles a copy of the catalog and keeps the first `limit`
/// products. Smaller catalogs yield everything available.
fn draw<R: Rng + ?Sized>(catalog: &[Product], limit: usize, rng: &mut R) -> Vec<Product> {
    let mut pool = catalog.to_vec();
    pool.shuffle(rng);
    pool.truncate(limit);
    pool
}

// =============================================================================
// Unit Tests
// =============================================================================
