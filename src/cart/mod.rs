//! Cart Domain
//!
//! Pure cart state transforms shared by both backends. Stored lines always
//! have `quantity >= 1`; dropping a line to zero deletes it.

mod local;
mod remote;
mod repository;

pub use local::LocalCart;
pub use remote::RemoteCart;
pub use repository::{CartBackend, CartError, CartRepository};

use rust_decimal::Decimal;

use crate::models::{CartItem, CartSnapshot, Product};

/// In-memory cart lines, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartContents {
    items: Vec<CartItem>,
}

impl CartContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Merge `quantity` of a product into the cart. Existing lines keep their
    /// add-time price; a zero quantity is a no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.items.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity,
                stock: None,
            }),
        }
    }

    /// Set an absolute quantity; zero removes the line. Unknown ids are
    /// ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Delete a line; absent ids are not an error.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn snapshot(&self) -> CartSnapshot {
        snapshot_of(self.items.clone())
    }
}

/// Derive totals for a set of cart lines.
pub fn snapshot_of(items: Vec<CartItem>) -> CartSnapshot {
    let total_price: Decimal = items.iter().map(CartItem::subtotal).sum();
    let total_items: u32 = items.iter().map(|i| i.quantity).sum();
    CartSnapshot {
        items,
        total_price,
        total_items,
    }
}

/// Whether an increment control may raise `quantity` under a stock ceiling.
/// Guest carts have no ceiling client-side; the server re-checks at checkout.
pub fn can_increment(quantity: u32, stock: Option<u32>) -> bool {
    stock.map_or(true, |limit| quantity < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, minor_price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Decimal::new(minor_price, 2),
            image: format!("/img/{}.jpg", id),
            stock: 10,
        }
    }

    #[test]
    fn adding_twice_accumulates_quantity() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.add(&product("P1", 5_000), 3);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 5);
    }

    #[test]
    fn totals_follow_price_times_quantity() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.total_price, Decimal::new(10_000, 2));
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.items[0].subtotal(), Decimal::new(10_000, 2));
    }

    #[test]
    fn totals_sum_across_lines() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.add(&product("P2", 2_550), 3);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.total_price, Decimal::new(17_650, 2));
        assert_eq!(snapshot.total_items, 5);
    }

    #[test]
    fn zero_quantity_add_is_a_no_op() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 0);
        assert!(cart.snapshot().items.is_empty());
    }

    #[test]
    fn update_to_zero_removes_the_line() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.set_quantity("P1", 0);
        assert!(cart.snapshot().items.is_empty());
    }

    #[test]
    fn update_sets_an_absolute_quantity() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.set_quantity("P1", 7);
        assert_eq!(cart.snapshot().items[0].quantity, 7);
    }

    #[test]
    fn update_of_unknown_id_is_ignored() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.set_quantity("nope", 4);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 2);
    }

    #[test]
    fn remove_of_absent_id_is_not_an_error() {
        let mut cart = CartContents::new();
        cart.remove("nope");
        assert!(cart.snapshot().items.is_empty());
    }

    #[test]
    fn lines_render_in_insertion_order() {
        let mut cart = CartContents::new();
        cart.add(&product("P2", 1_000), 1);
        cart.add(&product("P1", 1_000), 1);
        cart.add(&product("P3", 1_000), 1);
        let ids: Vec<&str> = cart
            .items()
            .iter()
            .map(|i| i.product_id.as_str())
            .collect();
        assert_eq!(ids, ["P2", "P1", "P3"]);
    }

    #[test]
    fn repeated_snapshots_are_identical() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.add(&product("P2", 2_550), 1);
        let first = cart.snapshot();
        let second = cart.snapshot();
        assert_eq!(first, second);
        assert_eq!(first.items.len(), second.items.len());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.clear();
        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_price, Decimal::ZERO);
        assert_eq!(snapshot.total_items, 0);
    }

    #[test]
    fn no_stored_line_ever_has_zero_quantity() {
        let mut cart = CartContents::new();
        cart.add(&product("P1", 5_000), 2);
        cart.add(&product("P2", 5_000), 1);
        cart.set_quantity("P2", 0);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn increment_is_bounded_by_known_stock_only() {
        assert!(can_increment(3, None));
        assert!(can_increment(3, Some(4)));
        assert!(!can_increment(4, Some(4)));
        assert!(!can_increment(5, Some(4)));
    }
}
