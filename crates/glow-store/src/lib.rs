//! # glow-store: Data Access for Glow Storefront
//!
//! This crate owns everything the homepage reads and writes: the catalog
//! document set and the persisted shopping cart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          glow-store                                     │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  CatalogSource  │  │   CartStorage   │  │       CartStore         │ │
//! │  │  (catalog.rs)   │  │  (storage.rs)   │  │    (cart_store.rs)      │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  JsonCatalog    │  │  FileStorage    │  │  read-merge-write +     │ │
//! │  │  MemoryCatalog  │  │  MemoryStorage  │  │  CartChanged broadcast  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  DEPENDS ON: glow-core (types + cart merge math)                       │
//! │  USED BY:    glow-engine (homepage pipeline)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - CatalogSource trait + JSON/memory backends
//! - [`storage`] - Cart storage slot trait + file/memory backends
//! - [`cart_store`] - The shared cart with change broadcasts
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod catalog;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart_store::{CartChanged, CartStore};
pub use catalog::{CatalogSource, JsonCatalog, MemoryCatalog};
pub use error::{StoreError, StoreResult};
pub use storage::{CartStorage, FileStorage, MemoryStorage};
