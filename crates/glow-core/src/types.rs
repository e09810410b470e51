//! # Domain Types
//!
//! Core domain types used throughout the Glow storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (stable)    │   │  product (snap) │   │  entries (Vec)  │       │
//! │  │  name           │   │  quantity       │   │  insertion      │       │
//! │  │  price_cents    │   │  added_at       │   │  ordered        │       │
//! │  │  categories[]   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartEntry` freezes the full `Product` at the moment it is added. If the
//! catalog changes afterwards, the cart keeps displaying what the customer
//! actually put in it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Owned by the external catalog source; immutable from this crate's
/// perspective. Prices are integer cents (smallest currency unit) - never
/// floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier assigned by the catalog source.
    pub id: String,

    /// Display name shown on product cards.
    pub name: String,

    /// Free-text description; searched together with the name.
    pub description: String,

    /// Selling price in cents.
    pub price_cents: i64,

    /// Regular (list) price in cents, when the product is discounted.
    /// Invariant: >= `price_cents` when present.
    pub regular_price_cents: Option<i64>,

    /// Photo reference (URI).
    pub photo_url: String,

    /// Category labels this product belongs to. Non-empty; a product may
    /// carry several.
    pub categories: Vec<String>,
}

impl Product {
    /// Checks whether this product carries `label` as a category,
    /// case-insensitively.
    pub fn has_category(&self, label: &str) -> bool {
        self.categories
            .iter()
            .any(|cat| cat.eq_ignore_ascii_case(label))
    }

    /// Returns this product's own spelling of a category label that matches
    /// `label` case-insensitively, if any.
    ///
    /// Display keys use the catalog's casing, not the query's.
    pub fn matching_category(&self, label: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|cat| cat.eq_ignore_ascii_case(label))
            .map(String::as_str)
    }

    /// Checks whether the lowercased name or description contains `needle`.
    ///
    /// `needle` must already be lowercased by the caller.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Percent off the regular price, rounded to the nearest integer.
    ///
    /// Returns 0 when there is no regular price (nothing to discount from)
    /// or the regular price is not positive.
    pub fn discount_percentage(&self) -> i64 {
        match self.regular_price_cents {
            Some(regular) if regular > 0 => {
                let off = (regular - self.price_cents) as f64 / regular as f64 * 100.0;
                off.round() as i64
            }
            _ => 0,
        }
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A line item in the shopping cart.
///
/// ## Design Notes
/// The entry embeds the complete product snapshot rather than copying fields
/// one by one: the cart must keep rendering name, photo and price exactly as
/// they were when the customer added the item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    /// Frozen product data at time of adding.
    pub product: Product,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this entry was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates a new entry for a product with quantity 1.
    pub fn new(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity) in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// How much this line saves against the regular price, in cents.
    /// Zero when the product carries no regular price.
    pub fn savings_cents(&self) -> i64 {
        match self.product.regular_price_cents {
            Some(regular) => (regular - self.product.price_cents) * self.quantity,
            None => 0,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one entry per distinct product id (adding the same product
///   again increments its quantity)
/// - Entries keep insertion order; an incremented entry keeps its position
/// - Quantities are always >= 1; this crate never removes entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Entries in insertion order.
    pub entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart, merging with an existing entry.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1, position unchanged
    /// - Product not in cart: appended at the end with quantity 1
    ///
    /// Calling this twice for the same product yields quantity 2 - that is
    /// the intended "add one more" semantics, not idempotence.
    pub fn add(&mut self, product: &Product) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.product.id == product.id)
        {
            entry.quantity += 1;
            return;
        }

        self.entries.push(CartEntry::new(product));
    }

    /// Looks up the entry for a product id.
    pub fn entry(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    /// Number of distinct entries in the cart.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Cart subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.entries.iter().map(|e| e.line_total_cents()).sum()
    }

    /// Total savings against regular prices, in cents.
    pub fn savings_cents(&self) -> i64 {
        self.entries.iter().map(|e| e.savings_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cart totals summary for cart-count indicators and checkout headers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub entry_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub savings_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            entry_count: cart.entry_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            savings_cents: cart.savings_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
