//! Cart API Bindings
//!
//! JSON endpoints owning the signed-in customer's cart. Every call returns
//! the full snapshot to paint.

use serde::Serialize;

use crate::models::CartSnapshot;

use super::{post_json, ApiError, CsrfToken};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddArgs<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateArgs<'a> {
    product_id: &'a str,
    new_quantity: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveArgs<'a> {
    product_id: &'a str,
}

#[derive(Serialize)]
struct EmptyArgs {}

pub async fn add(
    csrf: &CsrfToken,
    product_id: &str,
    quantity: u32,
) -> Result<CartSnapshot, ApiError> {
    post_json("/api/cart/add", &AddArgs { product_id, quantity }, Some(csrf)).await
}

pub async fn update(
    csrf: &CsrfToken,
    product_id: &str,
    new_quantity: u32,
) -> Result<CartSnapshot, ApiError> {
    post_json(
        "/api/cart/update",
        &UpdateArgs { product_id, new_quantity },
        Some(csrf),
    )
    .await
}

pub async fn remove(csrf: &CsrfToken, product_id: &str) -> Result<CartSnapshot, ApiError> {
    post_json("/api/cart/remove", &RemoveArgs { product_id }, Some(csrf)).await
}

pub async fn clear(csrf: &CsrfToken) -> Result<CartSnapshot, ApiError> {
    post_json("/api/cart/clear", &EmptyArgs {}, Some(csrf)).await
}
