//! Integration tests for Bazaar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bazaar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full mutation sequences against the file-backed snapshot
//! - `snapshot_recovery` - Restart rehydration and corrupt-snapshot handling
//!
//! All tests run against the real [`bazaar_cart::JsonFileStore`] adapter in
//! isolated temporary directories; no external services are required.

use bazaar_cart::ProductRef;
use bazaar_core::{Price, ProductId};

/// Build a product descriptor the way the catalog backend would hand it to
/// the UI: opaque id, display name, decimal price, point-in-time stock.
#[must_use]
pub fn catalog_product(id: &str, name: &str, cents: i64, stock: u32) -> ProductRef {
    ProductRef {
        id: ProductId::new(id),
        name: name.to_string(),
        unit_price: Price::from_cents(cents),
        available_stock: stock,
        image: None,
        brand: None,
    }
}
