//! # carrito-core: Pure Cart Logic for a Storefront
//!
//! This crate is the **heart** of the carrito cart. It contains the cart
//! state machine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       carrito Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (React)                  │   │
//! │  │    Product Card ──► Cart Drawer ──► Cart Page ──► Checkout  │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │ operation calls                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                carrito-store (Session Shell)                │   │
//! │  │    CartSession: mutate-in-memory, then snapshot write       │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │              ★ carrito-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────────────────┐  │   │
//! │  │   │   money   │  │  product  │  │         cart          │  │   │
//! │  │   │   Money   │  │ Snapshot  │  │ Cart, CartItem,       │  │   │
//! │  │   │  (cents)  │  │ discounts │  │ CartTotals, guards    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product snapshots as captured at add-to-cart time
//! - [`cart`] - The cart itself: line items, totals, stock guards
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Typed Errors**: The stock guard rejects with a typed error, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use carrito_core::{Cart, ProductSnapshot};
//!
//! let product = ProductSnapshot::new(1, "Café de grano 1kg", 1099, 5);
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(&product, 3, None).unwrap();
//!
//! assert_eq!(cart.totals().item_count, 3);
//! assert_eq!(cart.totals().subtotal_cents, 3297);
//!
//! // 3 in cart + 3 more would exceed the stock of 5
//! assert!(cart.add_to_cart(&product, 3, None).is_err());
//! assert_eq!(cart.totals().item_count, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carrito_core::Cart` instead of
// `use carrito_core::cart::Cart`

pub use cart::{Cart, CartItem, CartSnapshot, CartTotals};
pub use error::{CartError, CartResult};
pub use money::Money;
pub use product::ProductSnapshot;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item, independent of stock.
///
/// ## Business Reason
/// The storefront's quantity selector tops out at 99 regardless of how
/// much stock a product has; guarded mutations enforce the same ceiling
/// so the cart can never hold a line the UI cannot render.
pub const MAX_ITEM_QUANTITY: i64 = 99;
