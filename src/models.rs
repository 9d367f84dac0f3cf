//! Frontend Models
//!
//! Data structures matching the server wire shapes (page data, cart API,
//! issue reports).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product embedded in the rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub stock: u32,
}

/// One cart line (matches the cart API item shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
    /// Remaining stock ceiling; only the server backend reports this
    #[serde(default)]
    pub stock: Option<u32>,
}

impl CartItem {
    /// Line subtotal at the price captured when the item was added
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Immutable read of the cart plus derived totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub total_items: u32,
}

/// Shipping details collected by the checkout form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    pub barangay: String,
    pub municipality: String,
    pub province: String,
    pub house_no: String,
    pub lot_no: String,
    pub block_no: String,
}

impl ShippingDetails {
    /// Value of a field by its wire name (see `validate::SHIPPING_FIELDS`)
    pub fn field(&self, name: &str) -> &str {
        match name {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "phone" => &self.phone,
            "email" => &self.email,
            "street" => &self.street,
            "barangay" => &self.barangay,
            "municipality" => &self.municipality,
            "province" => &self.province,
            "houseNo" => &self.house_no,
            "lotNo" => &self.lot_no,
            "blockNo" => &self.block_no,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "street" => self.street = value,
            "barangay" => self.barangay = value,
            "municipality" => self.municipality = value,
            "province" => self.province = value,
            "houseNo" => self.house_no = value,
            "lotNo" => self.lot_no = value,
            "blockNo" => self.block_no = value,
            _ => {}
        }
    }
}

/// Issue report filed against an order (matches the issues API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueReport {
    pub id: i64,
    pub summary: String,
    pub details: String,
    pub username: String,
    pub reported_at: String,
    pub open: bool,
    #[serde(default)]
    pub attachment_image_url: Option<String>,
    #[serde(default)]
    pub resolved_by_admin: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

/// Outcome of resolving an issue report
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResolution {
    pub resolved_by_admin: Option<String>,
    pub resolved_at: Option<String>,
    pub admin_notes: Option<String>,
}
