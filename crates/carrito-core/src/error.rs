//! # Error Types
//!
//! Domain errors for the cart core.
//!
//! ## Error Philosophy
//! The cart has exactly one user-visible failure: a guarded add or
//! increment that would exceed what can actually be purchased. Every
//! other operation is a total function - removing an absent line,
//! clearing an empty cart, or updating notes on a product that was
//! never added are all silent no-ops, never errors. The presentation
//! layer shows a warning on rejection and moves on; nothing in this
//! crate can terminate the host.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Rejections from guarded cart mutations.
///
/// Carries enough context for the UI to phrase a useful message
/// ("Only 3 left in stock") without re-querying the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested total quantity exceeds the stock captured in the
    /// product snapshot.
    ///
    /// ## When This Occurs
    /// - `add_to_cart` where current quantity + requested > stock
    /// - `increment_quantity` where quantity + 1 > stock
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Guard: in cart 0, stock 3
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 7, available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 in stock"
    /// ```
    #[error("insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// The requested total quantity exceeds the per-line hard cap,
    /// independent of stock.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
