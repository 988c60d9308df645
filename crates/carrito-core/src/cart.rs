//! # Cart
//!
//! The cart state machine: line items, derived totals, stock guards,
//! and the drawer-visibility flag.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  UI Action                Operation              State Change       │
//! │  ─────────                ─────────              ────────────       │
//! │  Click "Add to cart" ───► add_to_cart() ───────► guard, then merge  │
//! │  Click "+" ─────────────► increment_quantity() ► guard, then +1     │
//! │  Click "-" ─────────────► decrement_quantity() ► -1, remove at 0    │
//! │  Type a quantity ───────► update_quantity() ───► set (or remove)    │
//! │  Click trash icon ──────► remove_item() ───────► drop the line      │
//! │  Click "Empty cart" ────► clear() ─────────────► items.clear()      │
//! │  Click cart icon ───────► toggle() ────────────► flip visibility    │
//! │                                                                     │
//! │  EVERY item mutation ends in recalculate(): the stored totals       │
//! │  are always a pure function of the item list.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product.id` (adding the same product merges quantity)
//! - Every line has `quantity >= 1` (dropping to 0 removes the line)
//! - `totals` is recomputed synchronously by every item mutation
//! - Guarded mutations never exceed `min(product.stock, MAX_ITEM_QUANTITY)`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::product::ProductSnapshot;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart: a product snapshot, a quantity, and optional
/// free-text notes ("sin cebolla", a gift message, etc.).
///
/// ## Price Freezing
/// The snapshot is captured when the line is created. If the catalog
/// changes the product afterwards, this line keeps the original price
/// and stock ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Frozen product data at time of adding.
    pub product: ProductSnapshot,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// Optional annotation; no validation beyond presence.
    pub notes: Option<String>,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line from a product snapshot.
    pub fn from_product(product: &ProductSnapshot, quantity: i64, notes: Option<String>) -> Self {
        CartItem {
            product: product.clone(),
            quantity,
            notes,
            added_at: Utc::now(),
        }
    }

    /// Line total before any discount (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Display-only discount for this line:
    /// `(compare_price - price) × quantity` when the compare-at price
    /// is higher, zero otherwise. Never subtracted from cart totals.
    pub fn discount_cents(&self) -> i64 {
        self.product
            .discount_per_unit()
            .multiply_quantity(self.quantity)
            .cents()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals, always consistent with the item list.
///
/// `total_cents` equals `subtotal_cents` today; shipping, tax, and
/// discount composition happen at a later order step, outside the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub item_count: i64,

    /// Sum of line totals in cents.
    pub subtotal_cents: i64,

    /// Grand total in cents. Currently equal to the subtotal.
    pub total_cents: i64,
}

impl CartTotals {
    /// Computes totals from an item list.
    pub fn of(items: &[CartItem]) -> Self {
        let item_count = items.iter().map(|i| i.quantity).sum();
        let subtotal_cents = items.iter().map(|i| i.line_total_cents()).sum();

        CartTotals {
            item_count,
            subtotal_cents,
            // Extension point for shipping/tax/discount composition
            total_cents: subtotal_cents,
        }
    }

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// The persisted shape of a cart: the item list and nothing else.
///
/// Totals are derived (recomputed on restore) and the drawer
/// visibility flag is session-local, so neither is serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Fields are private so every mutation flows through an operation
/// that re-establishes the invariants; no caller can desynchronize the
/// stored totals from the item list.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
    totals: CartTotals,
}

impl Cart {
    /// Creates a new empty, closed cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Restores a cart from a persisted snapshot.
    ///
    /// Totals are recomputed from the items; the drawer always starts
    /// closed regardless of how the previous session ended.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut cart = Cart {
            items: snapshot.items,
            is_open: false,
            totals: CartTotals::default(),
        };
        cart.recalculate();
        cart
    }

    /// Captures the persistable state: items only.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`;
    ///   notes are replaced only when a new value is supplied
    ///   (`Some`), otherwise the existing notes are preserved
    /// - Product not in cart: appended as a new line
    /// - `quantity <= 0`: no-op (a line can never start below 1)
    ///
    /// This primitive does **not** consult stock. User-initiated adds
    /// go through [`Cart::add_to_cart`]; this entry point exists for
    /// callers that deliberately bypass the guard.
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: i64, notes: Option<String>) {
        if quantity <= 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            if notes.is_some() {
                item.notes = notes;
            }
        } else {
            self.items.push(CartItem::from_product(product, quantity, notes));
        }

        self.recalculate();
    }

    /// Adds a product with stock validation (the user-facing add).
    ///
    /// ## Guard
    /// Rejects when the merged quantity would exceed the stock captured
    /// in the snapshot, or the per-line hard cap. On rejection the cart
    /// is left untouched.
    ///
    /// ## Example
    /// ```rust
    /// use carrito_core::{Cart, CartError, ProductSnapshot};
    ///
    /// let product = ProductSnapshot::new(1, "Aceite de oliva 1L", 1000, 5);
    /// let mut cart = Cart::new();
    ///
    /// assert!(cart.add_to_cart(&product, 3, None).is_ok());
    /// assert!(matches!(
    ///     cart.add_to_cart(&product, 3, None),
    ///     Err(CartError::InsufficientStock { available: 5, requested: 6, .. })
    /// ));
    /// ```
    pub fn add_to_cart(
        &mut self,
        product: &ProductSnapshot,
        quantity: i64,
        notes: Option<String>,
    ) -> CartResult<()> {
        let new_quantity = self.item_quantity(product.id) + quantity;
        self.check_ceiling(product.id, product.stock, new_quantity)?;
        self.add_item(product, quantity, notes);
        Ok(())
    }

    /// Removes the line matching `product_id`. Silent no-op if absent.
    pub fn remove_item(&mut self, product_id: i64) {
        self.items.retain(|i| i.product.id != product_id);
        self.recalculate();
    }

    /// Sets a line's quantity unconditionally.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves as [`Cart::remove_item`]
    /// - Otherwise the quantity is set with **no stock check** - the
    ///   guarded paths are [`Cart::increment_quantity`] and
    ///   [`Cart::add_to_cart`]
    /// - Absent product id: silent no-op
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }

        self.recalculate();
    }

    /// Increments a line's quantity by one, validating against stock
    /// and the hard cap. Silent no-op when the line is absent.
    pub fn increment_quantity(&mut self, product_id: i64) -> CartResult<()> {
        let Some(item) = self.items.iter().find(|i| i.product.id == product_id) else {
            return Ok(());
        };

        let stock = item.product.stock;
        let new_quantity = item.quantity + 1;
        self.check_ceiling(product_id, stock, new_quantity)?;
        self.update_quantity(product_id, new_quantity);
        Ok(())
    }

    /// Decrements a line's quantity by one, removing the line when it
    /// would drop to zero. Silent no-op when the line is absent.
    pub fn decrement_quantity(&mut self, product_id: i64) {
        let Some(item) = self.items.iter().find(|i| i.product.id == product_id) else {
            return;
        };
        let new_quantity = item.quantity - 1;

        // update_quantity handles the <= 0 removal path
        self.update_quantity(product_id, new_quantity);
    }

    /// Replaces a line's notes. Totals are unaffected; silent no-op
    /// when the line is absent.
    pub fn update_notes(&mut self, product_id: i64, notes: Option<String>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.notes = notes;
        }
    }

    /// Empties the cart and resets totals to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    // -------------------------------------------------------------------------
    // Drawer Visibility
    // -------------------------------------------------------------------------
    // Pure UI flag; irrelevant to items, totals, and persistence.

    /// Opens the cart drawer.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the cart drawer.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Toggles the cart drawer.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The current lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The stored derived totals.
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a product has a line in the cart.
    pub fn is_in_cart(&self, product_id: i64) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn item_quantity(&self, product_id: i64) -> i64 {
        self.item(product_id).map_or(0, |i| i.quantity)
    }

    /// The line for a product, if present.
    pub fn item(&self, product_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Validates a prospective line quantity against the stock ceiling
    /// and the hard cap. Stock binds first: it is the tighter limit in
    /// practice and the one the UI knows how to phrase.
    fn check_ceiling(&self, product_id: i64, stock: i64, new_quantity: i64) -> CartResult<()> {
        if new_quantity > stock {
            return Err(CartError::InsufficientStock {
                product_id,
                available: stock,
                requested: new_quantity,
            });
        }
        if new_quantity > MAX_ITEM_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: new_quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        Ok(())
    }

    /// Recomputes the stored totals from the item list.
    fn recalculate(&mut self) {
        self.totals = CartTotals::of(&self.items);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price_cents: i64, stock: i64) -> ProductSnapshot {
        ProductSnapshot::new(id, format!("Product {id}"), price_cents, stock)
    }

    #[test]
    fn test_add_to_cart_success() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5); // $10.00, stock 5

        cart.add_to_cart(&p, 3, None).unwrap();

        assert_eq!(cart.totals().item_count, 3);
        assert_eq!(cart.totals().subtotal_cents, 3000);
        assert_eq!(cart.totals().total_cents, 3000);
    }

    #[test]
    fn test_add_to_cart_rejects_beyond_stock() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);

        cart.add_to_cart(&p, 3, None).unwrap();

        // 3 + 3 = 6 > 5: rejected, state unchanged
        let err = cart.add_to_cart(&p, 3, None).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                product_id: 1,
                available: 5,
                requested: 6,
            }
        );
        assert_eq!(cart.totals().item_count, 3);
        assert_eq!(cart.totals().subtotal_cents, 3000);
    }

    #[test]
    fn test_add_to_cart_rejects_beyond_hard_cap() {
        let mut cart = Cart::new();
        let p = product(1, 100, 10_000); // plenty of stock

        let err = cart.add_to_cart(&p, 150, None).unwrap_err();
        assert_eq!(
            err,
            CartError::QuantityTooLarge {
                requested: 150,
                max: MAX_ITEM_QUANTITY,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_merges_duplicate_lines() {
        let mut cart = Cart::new();
        let p = product(1, 999, 100);

        cart.add_item(&p, 2, None);
        cart.add_item(&p, 3, None);

        assert_eq!(cart.items().len(), 1); // one line
        assert_eq!(cart.item_quantity(1), 5); // merged quantity
    }

    #[test]
    fn test_add_item_bypasses_stock_guard() {
        let mut cart = Cart::new();
        let p = product(1, 999, 2);

        // Deliberate bypass: the primitive does not consult stock
        cart.add_item(&p, 10, None);
        assert_eq!(cart.item_quantity(1), 10);
    }

    #[test]
    fn test_add_item_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        let p = product(1, 999, 5);

        cart.add_item(&p, 0, None);
        cart.add_item(&p, -3, None);

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_merge_preserves_notes_unless_new_supplied() {
        let mut cart = Cart::new();
        let p = product(1, 999, 100);

        cart.add_item(&p, 1, Some("sin cebolla".into()));
        cart.add_item(&p, 1, None);
        assert_eq!(cart.item(1).unwrap().notes.as_deref(), Some("sin cebolla"));

        cart.add_item(&p, 1, Some("extra queso".into()));
        assert_eq!(cart.item(1).unwrap().notes.as_deref(), Some("extra queso"));
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        let p = product(1, 500, 5);
        cart.add_to_cart(&p, 2, None).unwrap();

        cart.remove_item(1);
        let after_once = cart.totals();

        cart.remove_item(1); // absent: silent no-op
        assert_eq!(cart.totals(), after_once);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);
        cart.add_to_cart(&p, 3, None).unwrap();

        cart.update_quantity(1, 0);

        assert!(!cart.is_in_cart(1));
        assert_eq!(cart.totals().item_count, 0);
        assert_eq!(cart.totals().subtotal_cents, 0);
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);
        cart.add_to_cart(&p, 3, None).unwrap();

        cart.update_quantity(1, -4);
        assert!(!cart.is_in_cart(1));
    }

    #[test]
    fn test_update_quantity_sets_unconditionally() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);
        cart.add_to_cart(&p, 1, None).unwrap();

        // No stock check on direct set, by design
        cart.update_quantity(1, 50);
        assert_eq!(cart.item_quantity(1), 50);
        assert_eq!(cart.totals().subtotal_cents, 50_000);
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity(42, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_guards_stock() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 2);
        cart.add_to_cart(&p, 2, None).unwrap();

        let err = cart.increment_quantity(1).unwrap_err();
        assert!(matches!(err, CartError::InsufficientStock { .. }));
        assert_eq!(cart.item_quantity(1), 2);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);
        cart.add_to_cart(&p, 1, None).unwrap();

        cart.increment_quantity(1).unwrap();
        assert_eq!(cart.item_quantity(1), 2);

        cart.decrement_quantity(1);
        assert_eq!(cart.item_quantity(1), 1);

        // Dropping below 1 removes the line instead
        cart.decrement_quantity(1);
        assert!(!cart.is_in_cart(1));
    }

    #[test]
    fn test_increment_decrement_absent_are_noops() {
        let mut cart = Cart::new();
        assert!(cart.increment_quantity(9).is_ok());
        cart.decrement_quantity(9);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_notes_does_not_touch_totals() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);
        cart.add_to_cart(&p, 2, Some("regalo".into())).unwrap();
        let before = cart.totals();

        cart.update_notes(1, Some("para llevar".into()));
        assert_eq!(cart.item(1).unwrap().notes.as_deref(), Some("para llevar"));
        assert_eq!(cart.totals(), before);

        cart.update_notes(1, None);
        assert_eq!(cart.item(1).unwrap().notes, None);

        cart.update_notes(99, Some("nadie".into())); // absent: no-op
    }

    #[test]
    fn test_two_products_subtotal() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, 1000, 10), 2, None).unwrap();
        cart.add_to_cart(&product(2, 500, 10), 1, None).unwrap();

        // 10.00×2 + 5.00×1 = 25.00
        assert_eq!(cart.totals().subtotal_cents, 2500);
        assert_eq!(cart.totals().item_count, 3);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_discount_is_display_only() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 10).with_compare_price(1500);

        cart.add_item(&p, 2, None);

        // Display value: (15.00 - 10.00) × 2 = 10.00
        assert_eq!(cart.item(1).unwrap().discount_cents(), 1000);
        // But the total is still the plain subtotal
        assert_eq!(cart.totals().subtotal_cents, 2000);
        assert_eq!(cart.totals().total_cents, 2000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, 1000, 10), 2, None).unwrap();
        cart.add_to_cart(&product(2, 500, 10), 1, None).unwrap();
        cart.add_to_cart(&product(3, 250, 10), 4, None).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_drawer_visibility() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());

        cart.open();
        assert!(cart.is_open());
        cart.close();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());

        // Visibility never touches items or totals
        assert!(cart.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip_resets_visibility() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, 1099, 10), 2, Some("nota".into()))
            .unwrap();
        cart.add_to_cart(&product(2, 500, 10), 1, None).unwrap();
        cart.open();

        let restored = Cart::from_snapshot(cart.snapshot());

        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.totals(), cart.totals());
        assert!(!restored.is_open()); // always reset
    }

    /// Totals-consistency property: after any sequence of operations,
    /// the stored totals equal a fresh recomputation from the items.
    ///
    /// Uses a deterministic xorshift generator so failures reproduce.
    #[test]
    fn test_totals_consistent_under_random_operations() {
        let mut rng: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move || {
            rng ^= rng << 13;
            rng ^= rng >> 7;
            rng ^= rng << 17;
            rng
        };

        let catalog: Vec<ProductSnapshot> = (1..=6)
            .map(|id| product(id, (id * 100) + 99, 20))
            .collect();

        let mut cart = Cart::new();
        for _ in 0..2000 {
            let p = &catalog[(next() % 6) as usize];
            let qty = (next() % 5) as i64; // 0..=4, exercises the no-op path too
            match next() % 7 {
                0 => {
                    let _ = cart.add_to_cart(p, qty, None);
                }
                1 => cart.add_item(p, qty, None),
                2 => cart.remove_item(p.id),
                3 => cart.update_quantity(p.id, qty - 1), // may go <= 0
                4 => {
                    let _ = cart.increment_quantity(p.id);
                }
                5 => cart.decrement_quantity(p.id),
                _ => cart.toggle(),
            }

            // Stored totals == pure recomputation, every step
            assert_eq!(cart.totals(), CartTotals::of(cart.items()));
            // And every surviving line respects the quantity floor
            assert!(cart.items().iter().all(|i| i.quantity >= 1));
        }
    }

    /// Unique-by-product-id property across mixed add paths.
    #[test]
    fn test_no_duplicate_lines_across_add_paths() {
        let mut cart = Cart::new();
        let p = product(1, 300, 50);

        cart.add_item(&p, 2, None);
        let _ = cart.add_to_cart(&p, 3, None);
        cart.add_item(&p, 1, None);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_quantity(1), 6);
    }

    /// The snapshot payload is what the TypeScript side reads: keys
    /// must stay camelCase and derived totals must stay out of it.
    #[test]
    fn test_snapshot_json_shape() {
        let mut cart = Cart::new();
        let p = product(1, 1099, 10).with_compare_price(1500);
        cart.add_to_cart(&p, 2, None).unwrap();
        cart.open();

        let json = serde_json::to_string(&cart.snapshot()).unwrap();

        assert!(json.contains("\"priceCents\":1099"));
        assert!(json.contains("\"comparePriceCents\":1500"));
        assert!(json.contains("\"addedAt\""));
        assert!(!json.contains("isOpen"));
        assert!(!json.contains("subtotal"));

        let back: CartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items, cart.items());
    }

    #[test]
    fn test_query_helpers() {
        let mut cart = Cart::new();
        let p = product(1, 300, 50);

        assert!(!cart.is_in_cart(1));
        assert_eq!(cart.item_quantity(1), 0);
        assert!(cart.item(1).is_none());

        cart.add_to_cart(&p, 2, None).unwrap();

        assert!(cart.is_in_cart(1));
        assert_eq!(cart.item_quantity(1), 2);
        assert_eq!(cart.item(1).unwrap().product.id, 1);
    }
}
