//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartSnapshot, Product};

/// Global page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog rendered into the page by the server
    pub products: Vec<Product>,
    /// Last confirmed cart snapshot; the only thing the sidebar paints
    pub cart: CartSnapshot,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the painted cart with a freshly confirmed snapshot.
pub fn store_set_cart(store: &AppStore, snapshot: CartSnapshot) {
    *store.cart().write() = snapshot;
}
