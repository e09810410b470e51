//! # Catalog Source
//!
//! Read-only retrieval of the full product document set.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Source                                    │
//! │                                                                         │
//! │  fetch_all() ──► complete, finite product set as of call time           │
//! │                                                                         │
//! │  • No pagination, no streaming - one bulk document set per call         │
//! │  • Transport failure => StoreError::CatalogFetch                        │
//! │  • Malformed document => StoreError::CatalogDecode                      │
//! │  • The caller decides when to re-fetch (directive changes)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use glow_core::Product;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Catalog Source Trait
// =============================================================================

/// A read-only source of the full product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the complete product set as of call time.
    async fn fetch_all(&self) -> StoreResult<Vec<Product>>;
}

// =============================================================================
// JSON Catalog
// =============================================================================

/// File-backed catalog: one JSON document holding the full product array.
///
/// This is the bulk-fetched document set the homepage derives everything
/// from; the seed binary produces a compatible file.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Creates a catalog over a JSON document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCatalog { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn fetch_all(&self) -> StoreResult<Vec<Product>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::CatalogFetch(format!("{}: {}", self.path.display(), e)))?;

        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| StoreError::CatalogDecode(e.to_string()))?;

        debug!(
            count = products.len(),
            path = %self.path.display(),
            "Catalog document loaded"
        );

        Ok(products)
    }
}

// =============================================================================
// Memory Catalog
// =============================================================================

/// In-memory catalog for demos and tests.
///
/// The failure toggle simulates a transport outage so callers can exercise
/// their failed state without a real backend.
pub struct MemoryCatalog {
    products: Vec<Product>,
    failing: AtomicBool,
}

impl MemoryCatalog {
    /// Creates a catalog over a fixed product set.
    pub fn new(products: Vec<Product>) -> Self {
        MemoryCatalog {
            products,
            failing: AtomicBool::new(false),
        }
    }

    /// Makes subsequent fetches fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch_all(&self) -> StoreResult<Vec<Product>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::CatalogFetch(
                "simulated transport failure".to_string(),
            ));
        }
        Ok(self.products.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
