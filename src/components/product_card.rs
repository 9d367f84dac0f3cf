//! Product Card Component
//!
//! Catalog card with a quantity stepper bounded by available stock and an
//! "Add to Order" action. The stepper only hands a quantity to the cart on
//! an explicit add; until then it is purely local state.

use leptos::prelude::*;

use crate::cart::{CartBackend, CartRepository};
use crate::context::use_app_context;
use crate::models::Product;
use crate::money::peso;
use crate::store::use_app_store;

/// Stepper value bounded to `[0, stock]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperValue {
    value: u32,
    stock: u32,
}

impl StepperValue {
    pub fn new(stock: u32) -> Self {
        Self { value: 0, stock }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// No-op at the stock ceiling.
    pub fn increment(self) -> Self {
        if self.value < self.stock {
            Self { value: self.value + 1, ..self }
        } else {
            self
        }
    }

    /// No-op at zero; never negative.
    pub fn decrement(self) -> Self {
        Self {
            value: self.value.saturating_sub(1),
            ..self
        }
    }

    /// Back to zero after an add; the stock ceiling is unchanged.
    pub fn reset(self) -> Self {
        Self { value: 0, ..self }
    }

    pub fn at_floor(&self) -> bool {
        self.value == 0
    }

    pub fn at_ceiling(&self) -> bool {
        self.value >= self.stock
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let backend = expect_context::<CartBackend>();

    let (stepper, set_stepper) = signal(StepperValue::new(product.stock));

    let decrement = move |_| set_stepper.update(|s| *s = s.decrement());
    let increment = move |_| set_stepper.update(|s| *s = s.increment());

    let card_product = product.clone();
    let add_to_order = move |_| {
        let quantity = stepper.get_untracked().value();
        if quantity == 0 {
            return;
        }
        set_stepper.update(|s| *s = s.reset());
        let backend = backend.clone();
        let product = card_product.clone();
        ctx.run_cart(store, async move { backend.add(&product, quantity).await });
    };

    view! {
        <div class="product-card" data-product-id=product.id.clone()>
            <img class="product-thumb" src=product.image.clone() alt=product.name.clone() />
            <div class="product-body">
                <h3 class="product-name">{product.name.clone()}</h3>
                <span class="product-price">{peso(product.price)}</span>
                <span class="product-stock">{format!("{} in stock", product.stock)}</span>
            </div>
            <div class="stepper">
                <button
                    type="button"
                    class="stepper-btn"
                    disabled=move || stepper.get().at_floor()
                    on:click=decrement
                >
                    "−"
                </button>
                <input
                    class="stepper-value"
                    type="text"
                    readonly
                    prop:value=move || stepper.get().value().to_string()
                />
                <button
                    type="button"
                    class="stepper-btn"
                    disabled=move || stepper.get().at_ceiling()
                    on:click=increment
                >
                    "+"
                </button>
            </div>
            <button
                type="button"
                class="add-btn"
                disabled=move || stepper.get().at_floor() || ctx.cart_busy.get()
                on:click=add_to_order
            >
                "Add to Order"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_stops_at_stock() {
        let mut stepper = StepperValue::new(2);
        stepper = stepper.increment();
        stepper = stepper.increment();
        assert_eq!(stepper.value(), 2);
        assert!(stepper.at_ceiling());
        stepper = stepper.increment();
        assert_eq!(stepper.value(), 2);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut stepper = StepperValue::new(3);
        assert!(stepper.at_floor());
        stepper = stepper.decrement();
        assert_eq!(stepper.value(), 0);
        assert!(stepper.at_floor());
    }

    #[test]
    fn reset_keeps_the_stock_ceiling() {
        let stepper = StepperValue::new(1).increment();
        assert_eq!(stepper.value(), 1);
        let stepper = stepper.reset();
        assert_eq!(stepper.value(), 0);
        assert!(stepper.increment().at_ceiling());
    }

    #[test]
    fn zero_stock_pins_the_stepper() {
        let stepper = StepperValue::new(0);
        assert!(stepper.at_floor());
        assert!(stepper.at_ceiling());
        assert_eq!(stepper.increment().value(), 0);
    }
}
