//! Product Grid
//!
//! Renders the server-provided catalog as product cards.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="product-grid">
            <Show when=move || store.products().read().is_empty()>
                <p class="catalog-empty">"No products are available right now."</p>
            </Show>
            <For
                each=move || store.products().get()
                key=|product| product.id.clone()
                children=move |product| view! { <ProductCard product=product /> }
            />
        </section>
    }
}
