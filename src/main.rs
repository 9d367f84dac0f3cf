//! Kainan Storefront Entry Point

mod api;
mod app;
mod bootstrap;
mod cart;
mod components;
mod context;
mod models;
mod money;
mod storage;
mod store;
mod toast;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
