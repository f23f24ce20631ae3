//! The cart state: an ordered list of line items, unique by product id.

use bazaar_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::item::{CartLineItem, ProductRef};

/// The full cart contents.
///
/// Insertion order defines display order. Serializes transparently as the
/// line-item array - the snapshot persists this and nothing else.
///
/// State is mutated exclusively through [`crate::CartStore`]; this type only
/// exposes read access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for a product, if carted.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Selected quantity for a product, zero when not carted.
    ///
    /// Product tiles use this to show how many units are already in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.line(id).map_or(0, |item| item.selected_quantity)
    }

    /// Sum of `unit_price * selected_quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of selected quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.selected_quantity).sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Merge-on-add: increment the existing line or append a new one at
    /// quantity 1.
    pub(crate) fn add(&mut self, product: ProductRef) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.selected_quantity += 1,
            None => self.items.push(CartLineItem::first_of(product)),
        }
    }

    /// Drop the line for a product. Absent ids are tolerated.
    pub(crate) fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id != *id);
    }

    /// Replace the selected quantity of an existing line. Absent ids are
    /// tolerated; `quantity` must be >= 1 (enforced by the store).
    pub(crate) fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == *id) {
            item.selected_quantity = quantity;
        }
    }

    /// Remove all lines.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bazaar_core::Price;

    use super::*;

    fn product(id: &str, cents: i64) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Price::from_cents(cents),
            available_stock: 10,
            image: None,
            brand: None,
        }
    }

    #[test]
    fn test_add_merges_on_existing_id() {
        let mut state = CartState::default();
        state.add(product("A", 1000));
        state.add(product("A", 1000));

        assert_eq!(state.len(), 1);
        assert_eq!(state.quantity_of(&ProductId::new("A")), 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut state = CartState::default();
        state.add(product("B", 100));
        state.add(product("A", 200));
        state.add(product("B", 100));

        let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn test_totals_track_mutations() {
        let mut state = CartState::default();
        assert_eq!(state.total(), Price::ZERO);
        assert_eq!(state.total_items(), 0);

        state.add(product("A", 1000));
        state.add(product("A", 1000));
        state.add(product("B", 250));

        assert_eq!(state.total(), Price::from_cents(2250));
        assert_eq!(state.total_items(), 3);

        state.set_quantity(&ProductId::new("B"), 4);
        assert_eq!(state.total(), Price::from_cents(3000));
        assert_eq!(state.total_items(), 6);

        state.remove(&ProductId::new("A"));
        assert_eq!(state.total(), Price::from_cents(1000));
        assert_eq!(state.total_items(), 4);
    }

    #[test]
    fn test_remove_unknown_id_is_tolerated() {
        let mut state = CartState::default();
        state.add(product("A", 1000));
        state.remove(&ProductId::new("missing"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_quantity_of_absent_is_zero() {
        let state = CartState::default();
        assert_eq!(state.quantity_of(&ProductId::new("A")), 0);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut state = CartState::default();
        state.add(product("A", 1000));
        state.add(product("B", 2000));
        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.total(), Price::ZERO);
        assert_eq!(state.total_items(), 0);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut state = CartState::default();
        state.add(product("A", 1000));

        let json = serde_json::to_value(&state).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_serde_roundtrip_preserves_order_and_fields() {
        let mut state = CartState::default();
        state.add(product("B", 250));
        state.add(product("A", 1999));
        state.set_quantity(&ProductId::new("A"), 3);

        let json = serde_json::to_string(&state).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
