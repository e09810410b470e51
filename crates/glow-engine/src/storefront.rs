//! # Storefront Assembly
//!
//! Wires configuration into a running storefront: catalog source, cart
//! store, homepage controller and slideshow driver.
//!
//! ## Boot Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Boot                                     │
//! │                                                                         │
//! │  StorefrontConfig                                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Storefront::new ──► JsonCatalog + FileStorage + CartStore              │
//! │        │             + HomepageController                               │
//! │        ▼                                                                │
//! │  start_slideshow() ──► spawned SlideshowDriver + handle                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  homepage().refresh(Directive::from_params(category, product))          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use glow_core::Directive;
use glow_store::{CartStorage, CartStore, CatalogSource, FileStorage, JsonCatalog};

use crate::config::StorefrontConfig;
use crate::homepage::{HomepageController, HomepageState};
use crate::slideshow::{SlideshowDriver, SlideshowHandle};

/// One assembled storefront: the pieces a frontend binds to.
pub struct Storefront {
    config: StorefrontConfig,
    homepage: Arc<HomepageController>,
    cart: Arc<CartStore>,
}

impl Storefront {
    /// Assembles a storefront over the configured file-backed catalog and
    /// cart storage.
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog: Arc<dyn CatalogSource> = Arc::new(JsonCatalog::new(&config.catalog.path));
        let storage: Arc<dyn CartStorage> = Arc::new(FileStorage::new(&config.cart.storage_path));
        Self::with_sources(config, catalog, storage)
    }

    /// Assembles a storefront over explicit backends (tests, embedded
    /// catalogs).
    pub fn with_sources(
        config: StorefrontConfig,
        catalog: Arc<dyn CatalogSource>,
        storage: Arc<dyn CartStorage>,
    ) -> Self {
        let homepage = Arc::new(HomepageController::new(catalog, config.sections.limits()));
        let cart = Arc::new(CartStore::new(storage));

        Storefront {
            config,
            homepage,
            cart,
        }
    }

    /// The homepage controller.
    pub fn homepage(&self) -> Arc<HomepageController> {
        Arc::clone(&self.homepage)
    }

    /// The shared cart store.
    pub fn cart(&self) -> Arc<CartStore> {
        Arc::clone(&self.cart)
    }

    /// The active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Runs the initial refresh from the page's query parameters.
    pub async fn open(&self, category: Option<&str>, product: Option<&str>) -> HomepageState {
        self.homepage
            .refresh(Directive::from_params(category, product))
            .await
    }

    /// Spawns the hero slideshow driver and returns its handle.
    ///
    /// Must be called from within a tokio runtime. Each call owns its own
    /// driver; drop the handle (or call `shutdown`) when the view goes
    /// away.
    pub fn start_slideshow(&self) -> SlideshowHandle {
        let (driver, handle) = SlideshowDriver::new(
            self.config.slideshow.slide_count,
            self.config.slideshow.interval(),
        );
        tokio::spawn(driver.run());
        handle
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glow_core::Product;
    use glow_store::{MemoryCatalog, MemoryStorage};

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price_cents: 500,
            regular_price_cents: None,
            photo_url: String::new(),
            categories: vec![category.to_string()],
        }
    }

    fn storefront() -> Storefront {
        let catalog = Arc::new(MemoryCatalog::new(vec![
            product("1", "Rose Serum", "Serum"),
            product("2", "Ocean Toner", "Toner"),
        ]));
        Storefront::with_sources(StorefrontConfig::default(), catalog, Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_open_reads_query_params() {
        let storefront = storefront();

        let state = storefront.open(Some("serum"), None).await;
        let HomepageState::Ready(view) = state else {
            panic!("expected Ready");
        };
        assert_eq!(view.directive, Directive::Category("serum".to_string()));
    }

    #[tokio::test]
    async fn test_cart_flows_through_the_assembled_store() {
        let storefront = storefront();
        let cart_store = storefront.cart();

        let mut events = cart_store.subscribe();
        cart_store.add_to_cart(&product("1", "Rose Serum", "Serum")).unwrap();

        assert_eq!(events.recv().await.unwrap().total_quantity, 1);
        assert_eq!(storefront.cart().snapshot().entry_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slideshow_spawns_with_configured_deck() {
        let storefront = storefront();
        let handle = storefront.start_slideshow();

        assert_eq!(handle.state().slide_count, 3);
        handle.shutdown().await.unwrap();
    }
}
