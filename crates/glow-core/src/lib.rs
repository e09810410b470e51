//! # glow-core: Pure Homepage Logic for Glow Storefront
//!
//! This crate is the **heart** of the Glow storefront. It contains the
//! catalog query & presentation pipeline as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Glow Storefront Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Frontend (web)                            │   │
//! │  │   Hero slideshow ──► Category grid ──► Product rows ──► Cart   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  glow-engine (pipeline)                         │   │
//! │  │    HomepageController, SlideshowDriver, config                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ glow-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────────┐  │   │
//! │  │   │ directive │ │  filter   │ │   group   │ │   sections    │  │   │
//! │  │   │ + links   │ │           │ │           │ │ (Rng param)   │  │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └───────────────┘  │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐                    │   │
//! │  │   │   types   │ │ slideshow │ │ validation│                    │   │
//! │  │   │ Cart math │ │  machine  │ │           │                    │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO AMBIENT RNG • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Cart, CartEntry)
//! - [`directive`] - Query directive resolution and navigation links
//! - [`filter`] - Catalog Filter (directive -> matching subset)
//! - [`group`] - Category Grouper (subset -> per-category groups)
//! - [`sections`] - Curated section selection (injected randomness)
//! - [`slideshow`] - Slideshow state machine (timer lives in glow-engine)
//! - [`validation`] - Catalog hygiene checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same catalog + same directive = same result
//! 2. **No I/O**: storage, network and timers are FORBIDDEN here
//! 3. **Integer Money**: prices are cents (i64), never floats
//! 4. **Injected Randomness**: the section selector takes an `Rng`
//!
//! ## Example Usage
//!
//! ```rust
//! use glow_core::{filter_catalog, group_by_category, Directive};
//!
//! let catalog = Vec::new();
//! let directive = Directive::from_params(Some("Serum"), None);
//!
//! let filtered = filter_catalog(&catalog, &directive);
//! let groups = group_by_category(&filtered, &directive);
//! assert!(groups.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod directive;
pub mod error;
pub mod filter;
pub mod group;
pub mod sections;
pub mod slideshow;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use glow_core::Cart` instead of
// `use glow_core::types::Cart`

pub use directive::{category_link, search_link, Directive};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::filter_catalog;
pub use group::{group_by_category, CategoryGroups, SEARCH_RESULTS_LABEL};
pub use sections::{select_sections, select_sections_with, CuratedSections, SectionLimits};
pub use slideshow::{SlideState, Slideshow};
pub use types::{Cart, CartEntry, CartTotals, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum products in the "Trending Now" row.
pub const TRENDING_LIMIT: usize = 8;

/// Maximum products in the "Special For You" row.
pub const SPECIAL_LIMIT: usize = 4;

/// Maximum products in the "Best Selling" row.
pub const BEST_SELLING_LIMIT: usize = 8;

/// Default number of hero slides.
///
/// The slideshow machine is parametric over the deck size; this is the
/// stock deck shipped with the storefront.
pub const DEFAULT_SLIDE_COUNT: usize = 3;
