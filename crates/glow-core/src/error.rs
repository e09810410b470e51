//! # Error Types
//!
//! Domain-specific error types for glow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  glow-core errors (this file)                                          │
//! │  ├── CoreError        - Domain contract violations                     │
//! │  └── ValidationError  - Product field validation failures              │
//! │                                                                         │
//! │  glow-store errors (separate crate)                                    │
//! │  └── StoreError       - Catalog fetch / cart storage failures          │
//! │                                                                         │
//! │  glow-engine errors (separate crate)                                   │
//! │  └── EngineError      - Pipeline and driver failures                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, field, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Slideshow navigation asked for a slide that does not exist.
    ///
    /// ## When This Occurs
    /// - `Slideshow::go_to` called with an index outside `[0, slide_count)`
    ///
    /// The machine rejects the call and keeps its current index; clamping
    /// would hide the caller bug.
    #[error("Slide index {requested} out of range (slide count {slide_count})")]
    InvalidSlideIndex {
        requested: usize,
        slide_count: usize,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product field validation errors.
///
/// Used by catalog hygiene checks and the seed tool. The homepage pipeline
/// itself trusts catalog data as given.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Regular (list) price is below the selling price.
    #[error("regular price {regular_price_cents} is below price {price_cents}")]
    RegularPriceBelowPrice {
        price_cents: i64,
        regular_price_cents: i64,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidSlideIndex {
            requested: 5,
            slide_count: 3,
        };
        assert_eq!(err.to_string(), "Slide index 5 out of range (slide count 3)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "priceCents".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
