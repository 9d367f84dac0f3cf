//! Application Context
//!
//! Shared signals provided via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::CartError;
use crate::models::{CartSnapshot, ShippingDetails};
use crate::store::{store_set_cart, AppStore};
use crate::toast::ToastHandle;

/// Checkout state frozen between shipping validation and submission
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDraft {
    /// Validated shipping details, copied verbatim into the payment form
    pub shipping: ShippingDetails,
    /// Cart snapshot captured when the modal opened
    pub cart: CartSnapshot,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// A cart call is in flight; cart-mutating controls disable themselves
    pub cart_busy: RwSignal<bool>,
    /// `Some(draft)` while the payment modal is open
    pub checkout: RwSignal<Option<CheckoutDraft>>,
    /// Queue for user-visible outcomes
    pub toasts: ToastHandle,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            cart_busy: RwSignal::new(false),
            checkout: RwSignal::new(None),
            toasts: ToastHandle::new(),
        }
    }

    /// Run one serialized cart mutation: skipped while another is in flight,
    /// painted only after the backend confirms, failures become toasts.
    pub fn run_cart<F>(self, store: AppStore, call: F)
    where
        F: std::future::Future<Output = Result<CartSnapshot, CartError>> + 'static,
    {
        if self.cart_busy.get_untracked() {
            return;
        }
        self.cart_busy.set(true);
        spawn_local(async move {
            match call.await {
                Ok(snapshot) => store_set_cart(&store, snapshot),
                Err(err) => self.toasts.error(err.message()),
            }
            self.cart_busy.set(false);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app context; panics if the provider is missing.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
