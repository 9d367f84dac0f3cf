//! Cart Sidebar
//!
//! Paints the current cart snapshot: item rows with bounded steppers, line
//! subtotals, the grand total, and the checkout affordance. The list is
//! always rebuilt from the snapshot, so repainting the same snapshot can
//! never accumulate rows.

use leptos::prelude::*;

use crate::cart::{can_increment, CartBackend, CartRepository};
use crate::context::use_app_context;
use crate::models::CartItem;
use crate::money::peso;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartSidebar() -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || store.cart().read().items.is_empty();
    let total = move || peso(store.cart().read().total_price);
    let count = move || store.cart().read().total_items;

    // Anchors have no native `disabled`; gate with a class instead.
    let checkout_class = move || {
        if is_empty() {
            "checkout-link disabled"
        } else {
            "checkout-link"
        }
    };

    view! {
        <aside class="cart-sidebar">
            <h2 class="cart-title">{move || format!("Your Order ({})", count())}</h2>
            <Show when=is_empty>
                <div class="cart-empty">
                    <p>"Your cart is empty."</p>
                    <p class="cart-empty-hint">"Add something from the menu to get started."</p>
                </div>
            </Show>
            <Show when=move || !is_empty()>
                <ul class="cart-items">
                    <For
                        each=move || store.cart().read().items.clone()
                        key=|item| (item.product_id.clone(), item.quantity)
                        children=move |item| view! { <CartRow item=item /> }
                    />
                </ul>
                <div class="cart-total-row">
                    <span>"Total"</span>
                    <span class="cart-total">{total}</span>
                </div>
            </Show>
            <a class=checkout_class href="#checkout" aria-disabled=move || is_empty().to_string()>
                "Proceed to Checkout"
            </a>
        </aside>
    }
}

/// One cart line: thumbnail, name, stepper, subtotal, remove control
#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let backend = expect_context::<CartBackend>();

    let subtotal = peso(item.subtotal());
    let at_ceiling = !can_increment(item.quantity, item.stock);
    // quantity >= 1 for every stored line; decrementing 1 removes it
    let lower = item.quantity - 1;
    let higher = item.quantity + 1;

    let dec_backend = backend.clone();
    let dec_id = item.product_id.clone();
    let decrement = move |_| {
        let backend = dec_backend.clone();
        let product_id = dec_id.clone();
        ctx.run_cart(store, async move { backend.update(&product_id, lower).await });
    };

    let inc_backend = backend.clone();
    let inc_id = item.product_id.clone();
    let increment = move |_| {
        let backend = inc_backend.clone();
        let product_id = inc_id.clone();
        ctx.run_cart(store, async move { backend.update(&product_id, higher).await });
    };

    let remove_id = item.product_id.clone();
    let remove = move |_| {
        let backend = backend.clone();
        let product_id = remove_id.clone();
        ctx.run_cart(store, async move { backend.remove(&product_id).await });
    };

    view! {
        <li class="cart-item">
            <img class="cart-item-thumb" src=item.image.clone() alt=item.name.clone() />
            <div class="cart-item-main">
                <span class="cart-item-name">{item.name.clone()}</span>
                <div class="stepper">
                    <button
                        type="button"
                        class="stepper-btn"
                        disabled=move || ctx.cart_busy.get()
                        on:click=decrement
                    >
                        "−"
                    </button>
                    <input class="stepper-value" type="text" readonly value=item.quantity.to_string() />
                    <button
                        type="button"
                        class="stepper-btn"
                        disabled=move || at_ceiling || ctx.cart_busy.get()
                        on:click=increment
                    >
                        "+"
                    </button>
                </div>
            </div>
            <span class="cart-item-subtotal">{subtotal}</span>
            <button
                type="button"
                class="cart-item-remove"
                title="Remove"
                disabled=move || ctx.cart_busy.get()
                on:click=remove
            >
                "×"
            </button>
        </li>
    }
}
