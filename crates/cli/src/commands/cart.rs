//! Cart management commands.
//!
//! Each command hydrates the store from the snapshot file, applies one
//! mutation, and reports the result. Durability loss (a failed snapshot
//! write) is reported as a warning, never a failure - the mutation itself
//! always lands.

use bazaar_cart::{CartStore, ProductRef, SaveOutcome};
use bazaar_core::{Price, ProductId};
use rust_decimal::Decimal;

/// Print cart lines and totals.
pub fn show(store: &CartStore) {
    let state = store.state();
    if state.is_empty() {
        println!("Cart is empty.");
        return;
    }

    for item in state.items() {
        let brand = item
            .brand
            .as_deref()
            .map_or_else(String::new, |b| format!(" ({b})"));
        println!(
            "{:>4} x {}{} @ {} = {}  [{}]",
            item.selected_quantity,
            item.name,
            brand,
            item.unit_price,
            item.line_total(),
            item.id,
        );
    }
    println!("---");
    println!("{} item(s), total {}", store.total_items(), store.total());
}

/// Add one unit of a product.
pub fn add(
    store: &mut CartStore,
    id: &str,
    name: String,
    price: Decimal,
    stock: u32,
    brand: Option<String>,
) {
    let product = ProductRef {
        id: ProductId::new(id),
        name,
        unit_price: Price::new(price),
        available_stock: stock,
        image: None,
        brand,
    };
    let outcome = store.add_to_cart(product);

    let quantity = store.state().quantity_of(&ProductId::new(id));
    println!("Added {id}; now {quantity} in cart.");
    report(outcome);
}

/// Remove a product's line.
pub fn remove(store: &mut CartStore, id: &ProductId) {
    let carted = store.state().line(id).is_some();
    let outcome = store.remove_from_cart(id);

    if carted {
        println!("Removed {id}.");
    } else {
        println!("{id} was not in the cart.");
    }
    report(outcome);
}

/// Set a carted product's quantity, clamped to `[1, stock]` the way the
/// storefront quantity stepper does.
pub fn set_quantity(store: &mut CartStore, id: &ProductId, quantity: u32) {
    let Some(line) = store.state().line(id) else {
        println!("{id} is not in the cart; nothing to update.");
        return;
    };

    let clamped = line.clamped_quantity(quantity);
    if clamped != quantity {
        println!("Clamped quantity {quantity} to {clamped} (stock {}).", line.available_stock);
    }

    let outcome = store.update_quantity(id, clamped);
    println!("{id} quantity is now {}.", store.state().quantity_of(id));
    report(outcome);
}

/// Remove all lines.
pub fn clear(store: &mut CartStore) {
    let outcome = store.clear_cart();
    println!("Cart cleared.");
    report(outcome);
}

/// Surface a lost snapshot write as a warning.
fn report(outcome: SaveOutcome) {
    if !outcome.is_durable() {
        tracing::warn!("change applied in memory only; snapshot write failed");
    }
}
