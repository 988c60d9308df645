//! # carrito-store: Cart Session + Snapshot Persistence
//!
//! The stateful shell around [`carrito_core`]. Where the core is a pure
//! reducer, this crate wires it to the outside world:
//!
//! - [`SnapshotStore`] - the key-value persistence port, with a
//!   [`MemoryStore`] adapter for tests/ephemeral hosts and a
//!   [`JsonFileStore`] adapter for desktop hosts
//! - [`CartSession`] - owns a [`carrito_core::Cart`], restores it from
//!   the port at construction, and writes a snapshot back after every
//!   item mutation
//! - [`SharedCartSession`] - `Arc<Mutex<CartSession>>` with closure
//!   accessors, for hosts whose command handlers may run concurrently
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Mutate-Then-Persist                            │
//! │                                                                     │
//! │  UI operation ──► CartSession ──► Cart (pure mutation + totals)     │
//! │                        │                                            │
//! │                        ▼                                            │
//! │              serde_json(CartSnapshot)                               │
//! │                        │                                            │
//! │                        ▼                                            │
//! │              SnapshotStore::save("cart", payload)                   │
//! │                                                                     │
//! │  A failed write is logged and swallowed: the in-memory cart         │
//! │  stays authoritative. A failed read at start-up yields an empty     │
//! │  cart. Nothing here can crash the host.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod persist;
pub mod session;
pub mod shared;

pub use persist::{JsonFileStore, MemoryStore, SnapshotStore, StoreError, CART_SNAPSHOT_KEY};
pub use session::CartSession;
pub use shared::SharedCartSession;
