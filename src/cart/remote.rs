//! Customer Cart Backend
//!
//! Mirrors the server-owned cart through `/api/cart/*`. Every response is
//! authoritative and replaces the cached snapshot wholesale; on failure the
//! cached snapshot is left untouched so the sidebar never paints state the
//! server did not confirm.

use leptos::prelude::*;

use crate::api::{self, CsrfToken};
use crate::models::{CartSnapshot, Product};

use super::repository::{CartError, CartRepository};

/// Cart API backend for signed-in customers
#[derive(Debug, Clone)]
pub struct RemoteCart {
    csrf: CsrfToken,
    /// Last server-confirmed snapshot, seeded from the rendered page
    last: RwSignal<CartSnapshot>,
}

impl RemoteCart {
    pub fn new(initial: CartSnapshot, csrf: CsrfToken) -> Self {
        Self {
            csrf,
            last: RwSignal::new(initial),
        }
    }

    fn confirm(&self, snapshot: CartSnapshot) -> CartSnapshot {
        self.last.set(snapshot.clone());
        snapshot
    }
}

impl CartRepository for RemoteCart {
    async fn add(&self, product: &Product, quantity: u32) -> Result<CartSnapshot, CartError> {
        let snapshot = api::cart::add(&self.csrf, &product.id, quantity).await?;
        Ok(self.confirm(snapshot))
    }

    async fn update(
        &self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        let snapshot = api::cart::update(&self.csrf, product_id, new_quantity).await?;
        Ok(self.confirm(snapshot))
    }

    async fn remove(&self, product_id: &str) -> Result<CartSnapshot, CartError> {
        let snapshot = api::cart::remove(&self.csrf, product_id).await?;
        Ok(self.confirm(snapshot))
    }

    async fn clear(&self) -> Result<CartSnapshot, CartError> {
        let snapshot = api::cart::clear(&self.csrf).await?;
        Ok(self.confirm(snapshot))
    }

    async fn snapshot(&self) -> Result<CartSnapshot, CartError> {
        Ok(self.last.get_untracked())
    }
}
