//! Page Bootstrap Data
//!
//! Typed reads of everything the server embeds in the rendered page: the
//! product catalog, the signed-in customer's cart, CSRF metadata, and the
//! one-shot flash attributes. A malformed or missing piece degrades to its
//! default so the rest of the page keeps working.

use serde::Deserialize;
use web_sys::Document;

use crate::api::CsrfToken;
use crate::models::{CartSnapshot, Product};
use crate::toast::FlashMessage;

/// Id of the JSON script tag holding catalog and cart data
const PAGE_DATA_ID: &str = "page-data";
/// Id of the element carrying one-shot flash attributes
const PAGE_FLASH_ID: &str = "page-flash";
/// Flash attribute prefix; the rest of the name is the message key
const FLASH_PREFIX: &str = "data-flash-";
/// Flash key that clears the guest cart instead of rendering a toast
const CLEAR_CART_KEY: &str = "clear-cart";

/// Server-embedded page payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageData {
    pub products: Vec<Product>,
    /// Initial cart for signed-in customers; guests load from storage
    pub cart: Option<CartSnapshot>,
    /// Present on order detail pages; enables the issue reports panel
    pub order_id: Option<String>,
    /// Admin views list every report and may resolve; customers only see
    /// their own
    pub admin: bool,
}

/// Everything the script needs from the rendered page
#[derive(Debug, Clone, Default)]
pub struct PageBoot {
    pub data: PageData,
    pub csrf: Option<CsrfToken>,
    pub flash: Vec<FlashMessage>,
    /// One-shot post-order flag: wipe the guest cart
    pub clear_cart: bool,
}

/// Read the page once at mount.
pub fn read_page() -> PageBoot {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PageBoot::default();
    };
    let (flash, clear_cart) = read_flash(&document);
    PageBoot {
        data: read_page_data(&document),
        csrf: CsrfToken::from_page(),
        flash,
        clear_cart,
    }
}

fn read_page_data(document: &Document) -> PageData {
    let Some(node) = document.get_element_by_id(PAGE_DATA_ID) else {
        web_sys::console::warn_1(&"#page-data missing; starting with an empty catalog".into());
        return PageData::default();
    };
    let raw = node.text_content().unwrap_or_default();
    match serde_json::from_str(&raw) {
        Ok(data) => data,
        Err(err) => {
            web_sys::console::warn_1(&format!("#page-data is not valid JSON: {}", err).into());
            PageData::default()
        }
    }
}

/// Lift `data-flash-*` attributes off the flash element, consuming them so a
/// soft reload cannot replay them.
fn read_flash(document: &Document) -> (Vec<FlashMessage>, bool) {
    let Some(node) = document.get_element_by_id(PAGE_FLASH_ID) else {
        return (Vec::new(), false);
    };
    let mut flash = Vec::new();
    let mut clear_cart = false;
    for name in node.get_attribute_names().iter() {
        let Some(name) = name.as_string() else { continue };
        let Some(key) = name.strip_prefix(FLASH_PREFIX) else { continue };
        let Some(value) = node.get_attribute(&name) else { continue };
        if key == CLEAR_CART_KEY {
            clear_cart = true;
        } else if !value.is_empty() {
            flash.push(FlashMessage {
                key: key.to_string(),
                message: value,
            });
        }
        let _ = node.remove_attribute(&name);
    }
    (flash, clear_cart)
}
