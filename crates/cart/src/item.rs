//! Cart line items and the product descriptor used to add them.

use bazaar_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// Product descriptor passed to [`crate::CartStore::add_to_cart`].
///
/// A point-in-time view of a catalog product: `available_stock` is the
/// sellable quantity known when the user added the item, not live inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    /// Opaque product identifier from the catalog backend.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Currency-unit price of one unit.
    pub unit_price: Price,
    /// Maximum sellable quantity known at time of add.
    pub available_stock: u32,
    /// Optional encoded image or image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional brand display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// One product entry in the cart together with the quantity the user intends
/// to purchase.
///
/// Field names serialize in camelCase; the serialized form is the snapshot
/// line format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Opaque product identifier, unique key within the cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Currency-unit price of one unit.
    pub unit_price: Price,
    /// Maximum sellable quantity known at time of add.
    pub available_stock: u32,
    /// Optional encoded image or image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional brand display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Quantity the user wants to purchase. Always >= 1; removing the line
    /// is the only way to reach zero.
    pub selected_quantity: u32,
}

impl CartLineItem {
    /// Create the initial line for a freshly added product (quantity 1).
    #[must_use]
    pub fn first_of(product: ProductRef) -> Self {
        Self {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            available_stock: product.available_stock,
            image: product.image,
            brand: product.brand,
            selected_quantity: 1,
        }
    }

    /// Price of this line: unit price times selected quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.selected_quantity
    }

    /// Clamp a desired quantity into `[1, available_stock]`.
    ///
    /// The store itself does not enforce the stock ceiling (the backend
    /// re-validates at order time); call sites that drive quantity steppers
    /// use this before [`crate::CartStore::update_quantity`]. A zero stock
    /// snapshot still clamps to 1 so an already-carted line keeps a valid
    /// quantity.
    #[must_use]
    pub fn clamped_quantity(&self, desired: u32) -> u32 {
        desired.clamp(1, self.available_stock.max(1))
    }

    /// Whether the stock snapshot allows any purchase at all.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.available_stock > 0
    }

    /// Whether the selected quantity has reached the known stock ceiling.
    #[must_use]
    pub const fn at_stock_limit(&self) -> bool {
        self.selected_quantity >= self.available_stock
    }
}
