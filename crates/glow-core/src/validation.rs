//! # Validation Module
//!
//! Product field validation for catalog hygiene.
//!
//! The homepage pipeline trusts catalog data as given; these checks exist
//! for the tooling that produces catalogs (seeding, imports), so bad
//! documents are caught before they reach a storefront.
//!
//! ## Usage
//! ```rust,no_run
//! use glow_core::validation::validate_product;
//! # let product = unimplemented!();
//!
//! // Validate before writing a catalog document
//! validate_product(&product).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;

/// Validates a product document.
///
/// ## Rules
/// - `id` and `name` must be non-blank
/// - `price_cents` must be positive
/// - `regular_price_cents`, when present, must be >= `price_cents`
/// - `categories` must be non-empty, with no blank labels
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if product.price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "priceCents".to_string(),
        });
    }

    if let Some(regular) = product.regular_price_cents {
        if regular < product.price_cents {
            return Err(ValidationError::RegularPriceBelowPrice {
                price_cents: product.price_cents,
                regular_price_cents: regular,
            });
        }
    }

    if product.categories.is_empty() {
        return Err(ValidationError::Required {
            field: "categories".to_string(),
        });
    }

    if product.categories.iter().any(|c| c.trim().is_empty()) {
        return Err(ValidationError::Required {
            field: "categories".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
