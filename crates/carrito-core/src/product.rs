//! # Product Snapshots
//!
//! The cart never holds a live product reference. At add-to-cart time
//! the catalog hands over a [`ProductSnapshot`]: a frozen copy of the
//! fields the cart reasons about (price, stock) plus what the drawer
//! needs to render a line (name, thumbnail). If the catalog updates a
//! product afterwards, lines already in the cart keep the data they
//! were added with.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Snapshot
// =============================================================================

/// A product as captured at the moment it was added to the cart.
///
/// ## Optional Fields
/// `compare_price_cents` and `thumbnail` are explicit `Option`s:
/// presence is what matters, not truthiness. A compare-at price of `0`
/// is present (and simply yields no discount); an empty thumbnail
/// string is present and left to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSnapshot {
    /// Unique catalog identifier.
    pub id: i64,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Optional "was" price in cents for discount display.
    pub compare_price_cents: Option<i64>,

    /// Maximum purchasable quantity at time of adding (frozen).
    pub stock: i64,

    /// Optional image URL for cart line rendering.
    pub thumbnail: Option<String>,
}

impl ProductSnapshot {
    /// Creates a snapshot with the fields every product has.
    pub fn new(id: i64, name: impl Into<String>, price_cents: i64, stock: i64) -> Self {
        ProductSnapshot {
            id,
            name: name.into(),
            price_cents,
            compare_price_cents: None,
            stock,
            thumbnail: None,
        }
    }

    /// Builder-style compare-at price, for catalogs that carry one.
    pub fn with_compare_price(mut self, compare_price_cents: i64) -> Self {
        self.compare_price_cents = Some(compare_price_cents);
        self
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the product carries a genuine discount: a compare-at
    /// price strictly greater than the current price.
    pub fn has_discount(&self) -> bool {
        matches!(self.compare_price_cents, Some(cp) if cp > self.price_cents)
    }

    /// Per-unit discount for display: `compare_price - price` when the
    /// compare-at price is higher, zero otherwise.
    ///
    /// This value is never subtracted from any cart total; the
    /// storefront combines discounts at a later order step.
    pub fn discount_per_unit(&self) -> Money {
        match self.compare_price_cents {
            Some(cp) => Money::from_cents(cp).saturating_sub_zero(self.price()),
            None => Money::zero(),
        }
    }

    /// Discount as a rounded percentage of the compare-at price, for
    /// badge display ("-25%"). `None` when there is no discount.
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.has_discount() {
            return None;
        }
        let cp = self.compare_price_cents?;
        let off = (cp - self.price_cents) as f64 / cp as f64 * 100.0;
        Some(off.round() as u32)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
