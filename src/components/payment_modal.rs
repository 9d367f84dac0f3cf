//! Payment Modal
//!
//! Second step of checkout: shows the frozen order summary, copies the
//! validated shipping values into hidden fields, and validates the selected
//! payment method before letting the native form submission through. The
//! dialog remounts on every open, so the method, reference number, receipt
//! input, and validation state always start fresh.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::CsrfToken;
use crate::context::{use_app_context, CheckoutDraft};
use crate::money::peso;
use crate::validate::{
    message_for, validate_payment, FieldError, PaymentMethod, SHIPPING_FIELDS,
};

/// Where the confirmed order posts to (native navigation)
const PLACE_ORDER_ACTION: &str = "/checkout/place-order";

#[component]
pub fn PaymentModal() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        {move || {
            ctx.checkout
                .get()
                .map(|draft| view! { <PaymentDialog draft=draft /> })
        }}
    }
}

#[component]
fn PaymentDialog(draft: CheckoutDraft) -> impl IntoView {
    let ctx = use_app_context();
    let csrf = use_context::<Option<CsrfToken>>().flatten();

    let (method, set_method) = signal(PaymentMethod::GCash);
    let (reference_no, set_reference_no) = signal(String::new());
    let (receipt_name, set_receipt_name) = signal::<Option<String>>(None);
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let shipping = draft.shipping;
    let cart = draft.cart;

    // Switching methods also drops the other method's validation state.
    let pick_gcash = move |_| {
        set_method.set(PaymentMethod::GCash);
        set_errors.set(Vec::new());
    };
    let pick_cod = move |_| {
        set_method.set(PaymentMethod::CashOnDelivery);
        set_errors.set(Vec::new());
    };

    let on_file = move |ev: web_sys::Event| {
        let name = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_receipt_name.set(name);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        if submitting.get_untracked() {
            ev.prevent_default();
            return;
        }
        let found = validate_payment(
            method.get_untracked(),
            receipt_name.get_untracked().is_some(),
            &reference_no.get_untracked(),
        );
        if !found.is_empty() {
            ev.prevent_default();
            ctx.toasts.error(found[0].message.clone());
            set_errors.set(found);
            return;
        }
        // Valid: lock the button and let the native submission navigate.
        set_submitting.set(true);
    };

    let close = move |_| ctx.checkout.set(None);

    let gcash_toggle_class = move || {
        if method.get() == PaymentMethod::GCash {
            "method-btn active"
        } else {
            "method-btn"
        }
    };
    let cod_toggle_class = move || {
        if method.get() == PaymentMethod::CashOnDelivery {
            "method-btn active"
        } else {
            "method-btn"
        }
    };
    let receipt_class = move || {
        if errors.with(|e| message_for(e, "receipt").is_some()) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };
    let reference_class = move || {
        if errors.with(|e| message_for(e, "referenceNo").is_some()) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal payment-modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>"Confirm Payment"</h2>
                    <button
                        type="button"
                        class="modal-close"
                        disabled=move || submitting.get()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>

                <div class="order-summary">
                    <h3>"Order Summary"</h3>
                    <ul class="summary-items">
                        {cart.items.iter().map(|item| view! {
                            <li class="summary-item">
                                <span>{format!("{} × {}", item.quantity, item.name)}</span>
                                <span>{peso(item.subtotal())}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="summary-total-row">
                        <span>"Total"</span>
                        <span class="summary-total">{peso(cart.total_price)}</span>
                    </div>
                </div>

                <div class="method-toggle">
                    <button type="button" class=gcash_toggle_class on:click=pick_gcash>
                        {PaymentMethod::GCash.label()}
                    </button>
                    <button type="button" class=cod_toggle_class on:click=pick_cod>
                        {PaymentMethod::CashOnDelivery.label()}
                    </button>
                </div>

                <Show when=move || method.get() == PaymentMethod::GCash>
                    <div class="method-panel gcash-panel">
                        <p>
                            "Send the total to our GCash number, then attach your receipt "
                            "and the 13-digit reference number from the confirmation."
                        </p>
                    </div>
                </Show>
                <Show when=move || method.get() == PaymentMethod::CashOnDelivery>
                    <div class="method-panel cod-panel">
                        <p>"Prepare the exact amount. Our rider collects payment on delivery."</p>
                    </div>
                </Show>

                <form
                    method="post"
                    action=PLACE_ORDER_ACTION
                    class="payment-form"
                    novalidate
                    on:submit=on_submit
                >
                    // Validated shipping values, copied verbatim.
                    {SHIPPING_FIELDS.iter().map(|field| view! {
                        <input
                            type="hidden"
                            name=field.name
                            value=shipping.field(field.name).to_string()
                        />
                    }).collect_view()}
                    <input type="hidden" name="paymentMethod" value=move || method.get().as_str() />
                    {csrf.clone().map(|token| view! {
                        <input type="hidden" name="_csrf" value=token.value.clone() />
                    })}

                    <Show when=move || method.get() == PaymentMethod::GCash>
                        <div class="form-field">
                            <label for="gcash-receipt">"Payment receipt"</label>
                            <input
                                id="gcash-receipt"
                                name="receipt"
                                type="file"
                                accept="image/*"
                                class=receipt_class
                                required=move || method.get() == PaymentMethod::GCash
                                on:change=on_file
                            />
                            <div class="invalid-feedback">
                                {move || errors.with(|e| message_for(e, "receipt").map(str::to_string))}
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="gcash-reference">"GCash reference number"</label>
                            <input
                                id="gcash-reference"
                                name="referenceNo"
                                type="text"
                                inputmode="numeric"
                                maxlength="13"
                                placeholder="13-digit reference no."
                                class=reference_class
                                required=move || method.get() == PaymentMethod::GCash
                                prop:value=move || reference_no.get()
                                on:input=move |ev| {
                                    let Some(target) = ev.target() else { return };
                                    let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                                        return;
                                    };
                                    set_reference_no.set(input.value());
                                }
                            />
                            <div class="invalid-feedback">
                                {move || errors.with(|e| message_for(e, "referenceNo").map(str::to_string))}
                            </div>
                        </div>
                    </Show>

                    <button type="submit" class="confirm-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Placing order..." } else { "Confirm Order" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
