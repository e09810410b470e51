//! # Store Error Types
//!
//! Error types for catalog retrieval and cart persistence.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Catalog     │  │  Cart Storage   │  │     Serialization       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  CatalogFetch   │  │  StorageRead    │  │  CartEncode             │ │
//! │  │  CatalogDecode  │  │  StorageWrite   │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  NOT an error: a malformed persisted cart. That degrades to an empty   │
//! │  cart inside CartStore (logged at warn, never surfaced).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error type covering catalog and cart persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog transport failure (file missing, unreadable, remote down).
    ///
    /// The pipeline surfaces this as a visible failed/empty state and may
    /// re-fetch on the next directive change; no automatic retry here.
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    /// The catalog document arrived but is not a valid product set.
    #[error("Catalog document is malformed: {0}")]
    CatalogDecode(String),

    /// Cart storage backend failed to read.
    #[error("Cart storage read failed: {0}")]
    StorageRead(String),

    /// Cart storage backend failed to write.
    #[error("Cart storage write failed: {0}")]
    StorageWrite(String),

    /// The cart could not be serialized for persistence.
    #[error("Cart serialization failed: {0}")]
    CartEncode(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::CartEncode(err.to_string())
    }
}
