//! Kainan Storefront App
//!
//! Root component: reads the server-embedded page data once, wires the cart
//! backend for the current visitor, and lays out the storefront sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::bootstrap;
use crate::cart::{CartBackend, CartRepository, LocalCart, RemoteCart};
use crate::components::{
    CartSidebar, CheckoutForm, IssueReportsPanel, PaymentModal, ProductGrid, ToastHost,
};
use crate::context::AppContext;
use crate::store::{store_set_cart, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let boot = bootstrap::read_page();

    let ctx = AppContext::new();
    let store: AppStore = Store::new(AppState {
        products: boot.data.products.clone(),
        cart: Default::default(),
    });

    // CSRF metas mark a signed-in customer; their cart lives on the server
    // and its initial state rides in with the page.
    let backend = match boot.csrf.clone() {
        Some(csrf) => {
            let initial = boot.data.cart.clone().unwrap_or_default();
            CartBackend::Customer(RemoteCart::new(initial, csrf))
        }
        None => CartBackend::Guest(LocalCart::new()),
    };

    // Post-order landing: the one-shot flag wipes the guest cart before the
    // first paint. Signed-in carts are cleared server-side.
    if boot.clear_cart && backend.is_guest() {
        LocalCart::wipe();
    }

    provide_context(ctx);
    provide_context(store);
    provide_context(backend.clone());
    provide_context(boot.csrf.clone());

    // First paint from the backend's current state.
    spawn_local(async move {
        match backend.snapshot().await {
            Ok(snapshot) => store_set_cart(&store, snapshot),
            Err(err) => ctx.toasts.error(err.message()),
        }
    });

    ctx.toasts.flush(&boot.flash);

    let order_id = boot.data.order_id.clone();
    let admin = boot.data.admin;

    view! {
        <div class="storefront-layout">
            <main class="storefront-main">
                <ProductGrid />
                <CheckoutForm />
                {order_id.map(|id| view! { <IssueReportsPanel order_id=id admin=admin /> })}
            </main>
            <CartSidebar />
            <PaymentModal />
            <ToastHost />
        </div>
    }
}
