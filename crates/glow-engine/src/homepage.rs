//! # Homepage Controller
//!
//! Orchestrates one homepage: fetch the catalog, apply the active
//! directive, group for display, and derive the curated rows.
//!
//! ## Refresh Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Homepage Refresh                                    │
//! │                                                                         │
//! │  directive change ──► refresh(directive)                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  state = Loading, generation += 1                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CatalogSource::fetch_all()  (the only suspending step)                 │
//! │        │                                                                │
//! │        ├── newer refresh started meanwhile? ──► discard this result     │
//! │        │                                                                │
//! │        ├── Err(e) ──► state = Failed { message }   (visible, retryable) │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  filter ──► group ──► sections (only when no directive)                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  state = Ready(HomepageView)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A new directive supersedes a stale in-flight fetch: whichever refresh
//! started last owns the state, regardless of completion order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use glow_core::{
    filter_catalog, group_by_category, select_sections_with, CategoryGroups, CuratedSections,
    Directive, SectionLimits,
};
use glow_store::CatalogSource;

// =============================================================================
// Homepage State
// =============================================================================

/// Everything a frontend needs to render the homepage body.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HomepageView {
    /// The directive this view was built for.
    pub directive: Directive,

    /// Page heading under an active directive
    /// ("Serum Products", `Search Results for "rose"`); `None` on the
    /// plain homepage.
    pub heading: Option<String>,

    /// Products grouped by category for the section list.
    pub groups: CategoryGroups,

    /// Curated promotional rows; present only when no directive is active.
    pub sections: Option<CuratedSections>,
}

/// The homepage lifecycle as the frontend observes it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum HomepageState {
    /// A fetch is in flight and nothing is displayable yet.
    Loading,

    /// The catalog arrived and the view is ready to render.
    Ready(HomepageView),

    /// The catalog fetch failed; show the empty/retry state.
    Failed { message: String },
}

// =============================================================================
// Homepage Controller
// =============================================================================

/// Drives the homepage for one view.
///
/// Single-writer by convention (directive changes arrive one at a time),
/// but safe against out-of-order completion: a generation counter makes
/// the latest `refresh` the only one allowed to publish.
pub struct HomepageController {
    catalog: Arc<dyn CatalogSource>,
    limits: SectionLimits,
    rng: Mutex<StdRng>,
    state: RwLock<HomepageState>,
    generation: AtomicU64,
}

impl HomepageController {
    /// Creates a controller with an OS-seeded random source.
    pub fn new(catalog: Arc<dyn CatalogSource>, limits: SectionLimits) -> Self {
        Self::with_rng(catalog, limits, StdRng::from_os_rng())
    }

    /// Creates a controller with an explicit random source (tests seed it).
    pub fn with_rng(catalog: Arc<dyn CatalogSource>, limits: SectionLimits, rng: StdRng) -> Self {
        HomepageController {
            catalog,
            limits,
            rng: Mutex::new(rng),
            state: RwLock::new(HomepageState::Loading),
            generation: AtomicU64::new(0),
        }
    }

    /// The current homepage state.
    pub fn state(&self) -> HomepageState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Fetches the catalog and rebuilds the homepage for `directive`.
    ///
    /// Returns the state this refresh produced. When a newer refresh
    /// started while the fetch was in flight, the stale result is
    /// discarded and the current (newer) state is returned instead.
    pub async fn refresh(&self, directive: Directive) -> HomepageState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%directive, generation, "Homepage refresh started");

        *self.state.write().expect("state lock poisoned") = HomepageState::Loading;

        let fetched = self.catalog.fetch_all().await;

        let next = match fetched {
            Ok(catalog) => {
                let filtered = filter_catalog(&catalog, &directive);
                let groups = group_by_category(&filtered, &directive);

                let sections = if directive.is_all() {
                    let mut rng = self.rng.lock().expect("rng lock poisoned");
                    Some(select_sections_with(&catalog, self.limits, &mut *rng))
                } else {
                    None
                };

                info!(
                    products = catalog.len(),
                    matched = filtered.len(),
                    groups = groups.len(),
                    %directive,
                    "Homepage ready"
                );

                HomepageState::Ready(HomepageView {
                    heading: heading_for(&directive),
                    directive,
                    groups,
                    sections,
                })
            }
            Err(e) => {
                warn!(error = %e, %directive, "Catalog fetch failed");
                HomepageState::Failed {
                    message: e.to_string(),
                }
            }
        };

        // Publish only if no newer refresh has started; the check and the
        // write happen under the same lock so a newer publish cannot be
        // overwritten by this one.
        let mut state = self.state.write().expect("state lock poisoned");
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding superseded catalog response");
            return state.clone();
        }
        *state = next.clone();
        next
    }
}

/// The page heading shown above the grouped results for each directive.
fn heading_for(directive: &Directive) -> Option<String> {
    match directive {
        Directive::All => None,
        Directive::Category(label) => Some(format!("{} Products", capitalize_first(label))),
        Directive::Search(_) => directive
            .search_text()
            .map(|text| format!("Search Results for \"{}\"", text)),
    }
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use glow_core::Product;
    use glow_store::{MemoryCatalog, StoreError, StoreResult};

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

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Rose Serum", &["Serum"]),
            product("2", "Ocean Toner", &["Toner"]),
        ]
    }

    fn controller(source: Arc<dyn CatalogSource>) -> HomepageController {
        HomepageController::with_rng(source, SectionLimits::default(), StdRng::seed_from_u64(7))
    }

    #[tokio::test]
    async fn test_refresh_without_directive_builds_groups_and_sections() {
        let controller = controller(Arc::new(MemoryCatalog::new(catalog())));

        let state = controller.refresh(Directive::All).await;
        let HomepageState::Ready(view) = state else {
            panic!("expected Ready, got {:?}", state);
        };

        let labels: Vec<&str> = view.groups.labels().collect();
        assert_eq!(labels, vec!["Serum", "Toner"]);
        assert!(view.heading.is_none());

        let sections = view.sections.expect("homepage should carry sections");
        assert_eq!(sections.trending.len(), 2);
        assert_eq!(sections.special.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_with_category_directive_skips_sections() {
        let controller = controller(Arc::new(MemoryCatalog::new(catalog())));

        let state = controller
            .refresh(Directive::Category("serum".to_string()))
            .await;
        let HomepageState::Ready(view) = state else {
            panic!("expected Ready");
        };

        assert_eq!(view.heading.as_deref(), Some("Serum Products"));
        assert!(view.sections.is_none());
        // Display key takes the product's casing
        assert_eq!(view.groups.labels().next(), Some("Serum"));
    }

    #[tokio::test]
    async fn test_refresh_with_search_directive_builds_synthetic_group() {
        let controller = controller(Arc::new(MemoryCatalog::new(catalog())));

        let state = controller
            .refresh(Directive::Search("rose%20serum".to_string()))
            .await;
        let HomepageState::Ready(view) = state else {
            panic!("expected Ready");
        };

        assert_eq!(
            view.heading.as_deref(),
            Some("Search Results for \"rose serum\"")
        );
        assert_eq!(view.groups.labels().next(), Some("Search Results"));
        assert!(view.sections.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_failed_state() {
        let source = Arc::new(MemoryCatalog::new(catalog()));
        source.set_failing(true);
        let controller = controller(source.clone());

        let state = controller.refresh(Directive::All).await;
        assert!(matches!(state, HomepageState::Failed { .. }));

        // The caller can retry by refreshing again once the source recovers
        source.set_failing(false);
        let state = controller.refresh(Directive::All).await;
        assert!(matches!(state, HomepageState::Ready(_)));
    }

    /// Catalog double whose fetches take a fixed amount of (test) time.
    struct DelayedCatalog {
        products: Vec<Product>,
        delay: Duration,
    }

    #[async_trait]
    impl CatalogSource for DelayedCatalog {
        async fn fetch_all(&self) -> StoreResult<Vec<Product>> {
            tokio::time::sleep(self.delay).await;
            if self.products.is_empty() {
                return Err(StoreError::CatalogFetch("empty backend".to_string()));
            }
            Ok(self.products.clone())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_refresh_supersedes_stale_fetch() {
        let source = Arc::new(DelayedCatalog {
            products: catalog(),
            delay: Duration::from_millis(100),
        });
        let controller = Arc::new(controller(source));

        // First refresh (category) starts at t=0 and completes at t=100
        let first = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                controller
                    .refresh(Directive::Category("serum".to_string()))
                    .await
            })
        };

        // Second refresh (search) starts at t=10 and completes at t=110
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = {
            let controller = Arc::clone(&controller);
            tokio::spawn(
                async move { controller.refresh(Directive::Search("rose".to_string())).await },
            )
        };

        first.await.unwrap();
        let second_state = second.await.unwrap();

        // The stale category result was discarded; the search view won
        let HomepageState::Ready(view) = controller.state() else {
            panic!("expected Ready");
        };
        assert_eq!(view.directive, Directive::Search("rose".to_string()));
        assert_eq!(controller.state(), second_state);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("serum"), "Serum");
        assert_eq!(capitalize_first("Serum"), "Serum");
        assert_eq!(capitalize_first(""), "");
    }
}
