//! Toast Host
//!
//! Renders the whole toast queue and keeps the relative-age labels ticking.
//! Expiry runs off the same 1 Hz tick, so errors linger for their longer
//! delay without per-toast timers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::toast::{relative_age, ToastEntry};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let entries = ctx.toasts.entries();
    let (now, set_now) = signal(js_sys::Date::now());

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            let at = js_sys::Date::now();
            set_now.set(at);
            ctx.toasts.expire(at);
        }
    });

    view! {
        <div class="toast-region" aria-live="polite">
            <For
                each=move || entries.get()
                key=|entry| entry.id.clone()
                children=move |entry: ToastEntry| {
                    let id = entry.id.clone();
                    let toast_class = if entry.is_error {
                        "toast toast-error"
                    } else {
                        "toast toast-success"
                    };
                    let created = entry.timestamp;
                    let dismiss = move |_| ctx.toasts.dismiss(&id);
                    view! {
                        <div class=toast_class role="status">
                            <span class="toast-message">{entry.message.clone()}</span>
                            <span class="toast-age">{move || relative_age(now.get(), created)}</span>
                            <button type="button" class="toast-close" on:click=dismiss>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
