//! Checkout Shipping Form
//!
//! Collects and validates shipping details, then freezes the cart snapshot
//! into a checkout draft that opens the payment modal. The inputs, the
//! validation pass, and the hidden-field copy all render from the same
//! field table.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, CheckoutDraft};
use crate::models::ShippingDetails;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate::{message_for, validate_shipping, FieldError, Rule, SHIPPING_FIELDS};

#[component]
pub fn CheckoutForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(ShippingDetails::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());

    let place_order = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let cart = store.cart().get_untracked();
        if cart.items.is_empty() {
            ctx.toasts.error("Your cart is empty. Add something before checking out.");
            return;
        }
        let details = form.get_untracked();
        let found = validate_shipping(&details);
        if found.is_empty() {
            set_errors.set(Vec::new());
            ctx.checkout.set(Some(CheckoutDraft { shipping: details, cart }));
        } else {
            focus_field(found[0].field);
            ctx.toasts.error(format!(
                "Please fix {} shipping field(s) before continuing",
                found.len()
            ));
            set_errors.set(found);
        }
    };

    view! {
        <form id="checkout" class="checkout-form" novalidate on:submit=place_order>
            <h2>"Shipping Details"</h2>
            <div class="checkout-grid">
                {SHIPPING_FIELDS.iter().map(|field| {
                    let name = field.name;
                    let required = !matches!(field.rule, Rule::MaxLen(_));
                    let input_class = move || {
                        if errors.with(|e| message_for(e, name).is_some()) {
                            "form-control is-invalid"
                        } else {
                            "form-control"
                        }
                    };
                    view! {
                        <div class="form-field">
                            <label for=name>
                                {field.label}
                                {required.then(|| view! { <span class="required-mark">"*"</span> })}
                            </label>
                            <input
                                id=name
                                name=name
                                class=input_class
                                prop:value=move || form.with(|f| f.field(name).to_string())
                                on:input=move |ev| {
                                    let Some(target) = ev.target() else { return };
                                    let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                                        return;
                                    };
                                    set_form.update(|f| f.set_field(name, input.value()));
                                }
                            />
                            <div class="invalid-feedback">
                                {move || errors.with(|e| message_for(e, name).map(str::to_string))}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
            <button type="submit" class="place-order-btn" disabled=move || ctx.cart_busy.get()>
                "Place Order"
            </button>
        </form>
    }
}

/// Scroll to and focus the first invalid input; a missing node (template
/// drift) is logged and skipped so the rest of the feedback still shows.
fn focus_field(name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(name) else {
        web_sys::console::warn_1(&format!("missing form field '{}'", name).into());
        return;
    };
    element.scroll_into_view();
    if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
}
