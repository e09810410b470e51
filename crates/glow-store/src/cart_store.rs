//! # Cart Store
//!
//! The process-wide cart: reads the persisted snapshot, merges additions,
//! rewrites storage, and notifies every live cart-reading surface.
//!
//! ## Add-To-Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Store Operations                               │
//! │                                                                         │
//! │  User Action              CartStore                Storage/Broadcast    │
//! │  ───────────              ─────────                ─────────────────    │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_to_cart(product)                          │
//! │                               │ 1. read + parse snapshot                │
//! │                               │ 2. Cart::add (merge by id)              │
//! │                               │ 3. serialize + write ──► storage        │
//! │                               │ 4. broadcast ──────────► CartChanged    │
//! │                               ▼                                          │
//! │                           updated Cart returned                          │
//! │                                                                         │
//! │  Cart badge / drawer ───► snapshot() (read only)                        │
//! │                                                                         │
//! │  A malformed persisted payload resets to an empty cart (warn log);      │
//! │  customers never see a cart error because of bad stored bytes.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use glow_core::{Cart, CartTotals, Product};

use crate::error::StoreResult;
use crate::storage::CartStorage;

/// Broadcast channel capacity for cart change events.
///
/// Cart-count indicators only care about the latest event; a small buffer
/// with lagging receivers re-reading the snapshot is enough.
const CART_EVENT_CAPACITY: usize = 16;

// =============================================================================
// Cart Change Event
// =============================================================================

/// Broadcast after every successful cart write so other surfaces (header
/// badge, mini-cart) can refresh their snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartChanged {
    /// Distinct entries now in the cart.
    pub entry_count: usize,

    /// Total quantity across all entries.
    pub total_quantity: i64,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The shared cart over a storage backend.
///
/// Stateless between calls: every operation reads the persisted snapshot
/// fresh, so independent surfaces holding the same store always agree.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    events: broadcast::Sender<CartChanged>,
}

impl CartStore {
    /// Creates a cart store over a storage backend.
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        let (events, _) = broadcast::channel(CART_EVENT_CAPACITY);
        CartStore { storage, events }
    }

    /// The current persisted cart.
    ///
    /// ## Degradation
    /// - Nothing persisted yet => empty cart
    /// - Unreadable or malformed payload => warn + empty cart
    pub fn snapshot(&self) -> Cart {
        let payload = match self.storage.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(error = %e, "Cart storage unreadable, treating cart as empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "Persisted cart is malformed, resetting to empty");
                Cart::new()
            }
        }
    }

    /// Current cart totals (for the header badge).
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.snapshot())
    }

    /// Adds one unit of `product` to the cart and persists the result.
    ///
    /// Merge semantics live in [`Cart::add`]: an existing entry gains
    /// quantity in place, a new product is appended. Adding twice yields
    /// quantity 2 - "add one more", deliberately not idempotent.
    pub fn add_to_cart(&self, product: &Product) -> StoreResult<Cart> {
        let mut cart = self.snapshot();
        cart.add(product);

        let payload = serde_json::to_string(&cart)?;
        self.storage.write(&payload)?;

        debug!(
            product_id = %product.id,
            entry_count = cart.entry_count(),
            total_quantity = cart.total_quantity(),
            "Cart updated"
        );

        // A send error only means no surface is listening right now
        let _ = self.events.send(CartChanged {
            entry_count: cart.entry_count(),
            total_quantity: cart.total_quantity(),
        });

        Ok(cart)
    }

    /// Subscribes to cart change events.
    pub fn subscribe(&self) -> broadcast::Receiver<CartChanged> {
        self.events.subscribe()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price_cents,
            regular_price_cents: None,
            photo_url: String::new(),
            categories: vec!["Serum".to_string()],
        }
    }

    fn store() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_empty_storage_yields_empty_cart() {
        assert!(store().snapshot().is_empty());
    }

    #[test]
    fn test_add_persists_and_merges() {
        let store = store();
        let product = test_product("7", 999);

        let cart = store.add_to_cart(&product).unwrap();
        assert_eq!(cart.entry("7").unwrap().quantity, 1);

        let cart = store.add_to_cart(&product).unwrap();
        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.entry("7").unwrap().quantity, 2);

        // A fresh snapshot sees the persisted merge
        assert_eq!(store.snapshot().entry("7").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_keeps_entry_positions() {
        let store = store();
        store.add_to_cart(&test_product("1", 100)).unwrap();
        store.add_to_cart(&test_product("2", 200)).unwrap();
        let cart = store.add_to_cart(&test_product("1", 100)).unwrap();

        let ids: Vec<&str> = cart.entries.iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(cart.entries[0].quantity, 2);
    }

    #[test]
    fn test_malformed_payload_degrades_to_empty_cart() {
        let storage = MemoryStorage::with_payload("definitely not json {{{");
        let store = CartStore::new(Arc::new(storage));

        assert!(store.snapshot().is_empty());

        // The next add starts over from an empty cart and re-persists
        let cart = store.add_to_cart(&test_product("1", 100)).unwrap();
        assert_eq!(cart.entry_count(), 1);
        assert_eq!(store.snapshot().entry_count(), 1);
    }

    #[tokio::test]
    async fn test_every_write_broadcasts_a_change() {
        let store = store();
        let mut events = store.subscribe();

        store.add_to_cart(&test_product("1", 100)).unwrap();
        let event = events.recv().await.unwrap();
        assert_eq!(event.entry_count, 1);
        assert_eq!(event.total_quantity, 1);

        store.add_to_cart(&test_product("1", 100)).unwrap();
        let event = events.recv().await.unwrap();
        assert_eq!(event.entry_count, 1);
        assert_eq!(event.total_quantity, 2);
    }

    #[test]
    fn test_totals_reflect_snapshot() {
        let store = store();
        store.add_to_cart(&test_product("1", 250)).unwrap();
        store.add_to_cart(&test_product("1", 250)).unwrap();

        let totals = store.totals();
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 500);
    }
}
