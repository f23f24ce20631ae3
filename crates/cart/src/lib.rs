//! Bazaar Cart - Client-side cart state and persistence.
//!
//! This crate owns the shopping cart for the storefront UI: an ordered list
//! of line items keyed by product id, with derived totals, synchronous
//! observer notification, and a durable local snapshot.
//!
//! # Architecture
//!
//! - [`CartStore`] is the single public mutation surface. Every mutation
//!   updates the in-memory state, persists a snapshot through the configured
//!   [`SnapshotStore`] port, and notifies subscribers - in that order.
//! - Persistence is best-effort: a failed snapshot write degrades the store
//!   to memory-only for that mutation and is surfaced as
//!   [`SaveOutcome::MemoryOnly`], never as an error. The cart is a
//!   convenience feature, not a system of record.
//! - The backend re-validates inventory and prices at order time; this crate
//!   performs no network I/O.
//!
//! # Concurrency
//!
//! Single-threaded by design: mutations take `&mut self` and run to
//! completion (recompute, persist, notify) before the next call. A
//! multi-threaded embedder must serialize access through one owning thread
//! or a mutex held across the whole read-modify-write-persist cycle.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod item;
mod snapshot;
mod state;
mod store;

pub use error::SnapshotError;
pub use item::{CartLineItem, ProductRef};
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore};
pub use state::CartState;
pub use store::{CartStore, SaveOutcome, SubscriberId};
