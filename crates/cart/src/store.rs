//! The cart store: mutations, derived totals, and observer notification.

use bazaar_core::{Price, ProductId};

use crate::item::ProductRef;
use crate::snapshot::SnapshotStore;
use crate::state::CartState;

/// Durability of the snapshot write that accompanied a mutation.
///
/// The in-memory mutation always succeeds; this only reports whether it also
/// reached durable storage. Callers may surface `MemoryOnly` as a warning
/// ("cart may not survive a restart") but must not treat it as a failed
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The snapshot was written.
    Durable,
    /// The snapshot write failed; the mutation lives in memory only.
    MemoryOnly,
}

impl SaveOutcome {
    /// Whether the mutation reached durable storage.
    #[must_use]
    pub const fn is_durable(self) -> bool {
        matches!(self, Self::Durable)
    }
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type Listener = Box<dyn FnMut(&CartState)>;

/// Owns the cart state and guarantees its invariants across mutations.
///
/// Every mutation runs to completion in three steps: update the in-memory
/// state, persist a snapshot through the port, notify subscribers with the
/// new state. Persistence failure downgrades the returned [`SaveOutcome`]
/// but never blocks the mutation or the notification.
///
/// One instance per process owns the snapshot record; construct it once and
/// pass it down as an explicit dependency.
pub struct CartStore {
    state: CartState,
    snapshots: Box<dyn SnapshotStore>,
    listeners: Vec<(SubscriberId, Listener)>,
    next_subscriber: usize,
}

impl CartStore {
    /// Create a store hydrated from the port's most recent snapshot.
    ///
    /// A missing snapshot yields an empty cart. A malformed or unreadable
    /// snapshot is discarded entirely and also yields an empty cart, logged
    /// at `warn`; corrupt data is never partially trusted.
    #[must_use]
    pub fn hydrate(snapshots: Box<dyn SnapshotStore>) -> Self {
        let state = match snapshots.load() {
            Ok(Some(state)) => {
                tracing::debug!(lines = state.len(), "cart hydrated from snapshot");
                state
            }
            Ok(None) => {
                tracing::debug!("no cart snapshot, starting empty");
                CartState::default()
            }
            Err(e) => {
                tracing::warn!("discarding unreadable cart snapshot, starting empty: {e}");
                CartState::default()
            }
        };

        Self {
            state,
            snapshots,
            listeners: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Create a memory-only store (nothing survives the process).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::hydrate(Box::new(crate::snapshot::MemoryStore::new()))
    }

    /// Current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Sum of `unit_price * selected_quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.state.total()
    }

    /// Sum of selected quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.state.total_items()
    }

    /// Add one unit of a product.
    ///
    /// Merge-on-add: if the product is already carted its quantity goes up
    /// by one; otherwise a new line is appended at quantity 1. No stock
    /// ceiling is enforced here - the backend re-validates at order time,
    /// and call sites clamp via [`crate::CartLineItem::clamped_quantity`].
    pub fn add_to_cart(&mut self, product: ProductRef) -> SaveOutcome {
        self.state.add(product);
        self.commit()
    }

    /// Remove a product's line. Unknown ids are a silent no-op so UI retries
    /// stay idempotent.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> SaveOutcome {
        self.state.remove(id);
        self.commit()
    }

    /// Set a carted product's quantity to exactly `quantity` (not an
    /// increment). Unknown ids are a silent no-op.
    ///
    /// `quantity == 0` is rejected and leaves the line unchanged: a line's
    /// quantity is always >= 1, and [`Self::remove_from_cart`] is the only
    /// way to take it to zero. (The caller remains responsible for the stock
    /// ceiling.)
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> SaveOutcome {
        if quantity == 0 {
            tracing::warn!(%id, "ignoring update_quantity(0); use remove_from_cart");
        } else {
            self.state.set_quantity(id, quantity);
        }
        self.commit()
    }

    /// Remove all lines unconditionally.
    pub fn clear_cart(&mut self) -> SaveOutcome {
        self.state.clear();
        self.commit()
    }

    /// Register a listener called synchronously with the new state after
    /// every mutation, in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are tolerated.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    /// Persist the snapshot (best-effort), then notify subscribers.
    fn commit(&mut self) -> SaveOutcome {
        let outcome = match self.snapshots.save(&self.state) {
            Ok(()) => SaveOutcome::Durable,
            Err(e) => {
                tracing::warn!("cart snapshot write failed, mutation kept in memory: {e}");
                SaveOutcome::MemoryOnly
            }
        };

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }

        outcome
    }
}
