//! Guest Cart Backend
//!
//! Session-storage resident cart for shoppers without an account. Operations
//! are plain local transforms; storage corruption degrades to an empty cart
//! instead of failing. The storage layout is a JSON object keyed by product
//! id so the same cart survives server-rendered page navigations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CartItem, CartSnapshot, Product};
use crate::storage;

use super::repository::{CartError, CartRepository};
use super::CartContents;

/// Stored line shape: `{name, price, image, quantity}` under the product id
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredLine {
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    image: String,
    quantity: u32,
}

/// Session-storage cart backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCart;

impl LocalCart {
    pub fn new() -> Self {
        Self
    }

    /// Drop the persisted cart without loading it (post-order clear flag).
    pub fn wipe() {
        storage::remove(storage::CART_KEY);
    }

    fn load(&self) -> CartContents {
        let map: serde_json::Map<String, serde_json::Value> =
            storage::read_json(storage::CART_KEY).unwrap_or_default();
        let mut items = Vec::with_capacity(map.len());
        for (product_id, value) in map {
            match serde_json::from_value::<StoredLine>(value) {
                Ok(line) if line.quantity > 0 => items.push(CartItem {
                    product_id,
                    name: line.name,
                    price: line.price,
                    image: line.image,
                    quantity: line.quantity,
                    stock: None,
                }),
                // Zero-quantity lines never belong in storage; drop them.
                Ok(_) => {}
                Err(err) => web_sys::console::warn_1(
                    &format!("skipping unreadable cart line '{}': {}", product_id, err).into(),
                ),
            }
        }
        CartContents::from_items(items)
    }

    fn save(&self, contents: &CartContents) {
        let mut map = serde_json::Map::new();
        for item in contents.items() {
            let line = StoredLine {
                name: item.name.clone(),
                price: item.price,
                image: item.image.clone(),
                quantity: item.quantity,
            };
            if let Ok(value) = serde_json::to_value(&line) {
                map.insert(item.product_id.clone(), value);
            }
        }
        storage::write_json(storage::CART_KEY, &map);
    }

    fn mutate(&self, apply: impl FnOnce(&mut CartContents)) -> CartSnapshot {
        let mut contents = self.load();
        apply(&mut contents);
        self.save(&contents);
        contents.snapshot()
    }
}

impl CartRepository for LocalCart {
    async fn add(&self, product: &Product, quantity: u32) -> Result<CartSnapshot, CartError> {
        Ok(self.mutate(|contents| contents.add(product, quantity)))
    }

    async fn update(
        &self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        Ok(self.mutate(|contents| contents.set_quantity(product_id, new_quantity)))
    }

    async fn remove(&self, product_id: &str) -> Result<CartSnapshot, CartError> {
        Ok(self.mutate(|contents| contents.remove(product_id)))
    }

    async fn clear(&self) -> Result<CartSnapshot, CartError> {
        Ok(self.mutate(CartContents::clear))
    }

    async fn snapshot(&self) -> Result<CartSnapshot, CartError> {
        Ok(self.load().snapshot())
    }
}
