//! # Shared Session
//!
//! Production wiring keeps one cart per browsing session, observed by
//! many UI surfaces (header badge, drawer, cart page). Hosts whose
//! command handlers can run concurrently wrap the session in
//! [`SharedCartSession`] instead of reaching for a global.
//!
//! ## Thread Safety
//! `Arc<Mutex<CartSession>>` because:
//! 1. Multiple handlers may access/modify the cart
//! 2. Only one handler should modify the cart at a time
//! 3. Cart operations are quick and mostly writes, so a `RwLock`
//!    would add complexity with minimal benefit

use std::sync::{Arc, Mutex};

use crate::session::CartSession;

/// Shared handle to a single cart session.
#[derive(Debug, Clone)]
pub struct SharedCartSession {
    inner: Arc<Mutex<CartSession>>,
}

impl SharedCartSession {
    /// Wraps a session for shared ownership.
    pub fn new(session: CartSession) -> Self {
        SharedCartSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// use carrito_store::{CartSession, SharedCartSession};
    ///
    /// let shared = SharedCartSession::new(CartSession::in_memory());
    /// let totals = shared.with_cart(|s| s.totals());
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let session = self.inner.lock().expect("cart mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// use carrito_core::ProductSnapshot;
    /// use carrito_store::{CartSession, SharedCartSession};
    ///
    /// let shared = SharedCartSession::new(CartSession::in_memory());
    /// let product = ProductSnapshot::new(1, "Pan integral", 350, 8);
    /// shared
    ///     .with_cart_mut(|s| s.add_to_cart(&product, 2, None))
    ///     .unwrap();
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        let mut session = self.inner.lock().expect("cart mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
