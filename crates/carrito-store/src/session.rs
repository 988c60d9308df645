//! # Cart Session
//!
//! [`CartSession`] is the injectable state container the presentation
//! layer talks to: one per browsing session in production wiring, a
//! fresh one per test. It owns a pure [`Cart`] and an injected
//! [`SnapshotStore`], restores the cart at construction, and writes a
//! snapshot back synchronously after every item mutation.
//!
//! Visibility toggles (`open`/`close`/`toggle`) mutate in memory only:
//! `is_open` is not part of the snapshot, so writing one would be a
//! no-op on disk.

use tracing::{debug, warn};

use carrito_core::{Cart, CartItem, CartResult, CartSnapshot, CartTotals, ProductSnapshot};

use crate::persist::{MemoryStore, SnapshotStore, CART_SNAPSHOT_KEY};

// =============================================================================
// Cart Session
// =============================================================================

/// A cart bound to a persistence port.
pub struct CartSession {
    cart: Cart,
    store: Box<dyn SnapshotStore + Send>,
}

impl CartSession {
    /// Creates a session over `store`, restoring any persisted
    /// snapshot.
    ///
    /// ## Failure Semantics
    /// An absent key or an unparseable payload yields an empty cart
    /// and a warning - start-up never fails on a bad snapshot.
    pub fn new(store: impl SnapshotStore + Send + 'static) -> Self {
        let store = Box::new(store);
        let cart = match store.load(CART_SNAPSHOT_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<CartSnapshot>(&payload) {
                Ok(snapshot) => Cart::from_snapshot(snapshot),
                Err(e) => {
                    warn!(error = %e, "cart snapshot unparseable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "cart snapshot unreadable, starting empty");
                Cart::new()
            }
        };

        CartSession { cart, store }
    }

    /// Creates a session with no durable storage (guest carts, tests).
    pub fn in_memory() -> Self {
        CartSession::new(MemoryStore::new())
    }

    // -------------------------------------------------------------------------
    // Mutations (mutate in memory, then emit a snapshot write)
    // -------------------------------------------------------------------------

    /// Unguarded add; see [`Cart::add_item`].
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: i64, notes: Option<String>) {
        self.cart.add_item(product, quantity, notes);
        self.persist();
    }

    /// Stock-guarded add; see [`Cart::add_to_cart`]. No snapshot write
    /// on rejection - nothing changed.
    pub fn add_to_cart(
        &mut self,
        product: &ProductSnapshot,
        quantity: i64,
        notes: Option<String>,
    ) -> CartResult<()> {
        self.cart.add_to_cart(product, quantity, notes)?;
        self.persist();
        Ok(())
    }

    /// Removes a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: i64) {
        self.cart.remove_item(product_id);
        self.persist();
    }

    /// Sets a line quantity; see [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Guarded +1; see [`Cart::increment_quantity`].
    pub fn increment_quantity(&mut self, product_id: i64) -> CartResult<()> {
        self.cart.increment_quantity(product_id)?;
        self.persist();
        Ok(())
    }

    /// -1, removing at zero; see [`Cart::decrement_quantity`].
    pub fn decrement_quantity(&mut self, product_id: i64) {
        self.cart.decrement_quantity(product_id);
        self.persist();
    }

    /// Replaces a line's notes; see [`Cart::update_notes`].
    pub fn update_notes(&mut self, product_id: i64, notes: Option<String>) {
        self.cart.update_notes(product_id, notes);
        self.persist();
    }

    /// Empties the cart and persists the empty snapshot, so a restart
    /// after clearing (or logout) comes back empty.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    // -------------------------------------------------------------------------
    // Drawer Visibility (memory only)
    // -------------------------------------------------------------------------

    /// Opens the cart drawer.
    pub fn open(&mut self) {
        self.cart.open();
    }

    /// Closes the cart drawer.
    pub fn close(&mut self) {
        self.cart.close();
    }

    /// Toggles the cart drawer.
    pub fn toggle(&mut self) {
        self.cart.toggle();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The underlying cart, for read access.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Current derived totals.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Serializes the snapshot and writes it through the port.
    ///
    /// A failed write is logged and swallowed: the in-memory cart stays
    /// authoritative and no cart operation surfaces an I/O error.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.cart.snapshot()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "cart snapshot failed to serialize");
                return;
            }
        };

        match self.store.save(CART_SNAPSHOT_KEY, &payload) {
            Ok(()) => debug!(bytes = payload.len(), "cart snapshot written"),
            Err(e) => warn!(error = %e, "cart snapshot write failed"),
        }
    }
}

impl std::fmt::Debug for CartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSession")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
