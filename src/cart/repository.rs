//! Cart Repository Contract
//!
//! One contract, two interchangeable backends: session storage for guests,
//! the cart API for signed-in customers. Components only ever talk to
//! `CartBackend`, so the rest of the UI is identical in both modes.

use crate::api::ApiError;
use crate::models::{CartSnapshot, Product};

use super::{LocalCart, RemoteCart};

/// Failure from a cart backend
#[derive(Debug, Clone, PartialEq)]
pub enum CartError {
    /// The cart API rejected the request (HTTP status, display message)
    Api { status: u16, message: String },
    /// The request never completed or the response could not be read
    Transport(String),
}

impl CartError {
    /// Message suitable for a toast
    pub fn message(&self) -> &str {
        match self {
            CartError::Api { message, .. } => message,
            CartError::Transport(message) => message,
        }
    }
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::Api { status, message } => write!(f, "cart API {}: {}", status, message),
            CartError::Transport(message) => write!(f, "cart request failed: {}", message),
        }
    }
}

impl std::error::Error for CartError {}

impl From<ApiError> for CartError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http { status, message } => CartError::Api { status, message },
            other => CartError::Transport(other.to_string()),
        }
    }
}

/// Common contract for cart backends.
///
/// Guest operations resolve immediately; the remote backend awaits the API.
/// Every mutation returns the authoritative snapshot to paint; nothing is
/// painted optimistically.
pub trait CartRepository {
    /// Merge `quantity` of a product into the cart. The product's catalog
    /// metadata rides along because the guest backend has nowhere else to
    /// get it from.
    async fn add(&self, product: &Product, quantity: u32) -> Result<CartSnapshot, CartError>;

    /// Set an absolute quantity; zero (or below) removes the line.
    async fn update(&self, product_id: &str, new_quantity: u32)
        -> Result<CartSnapshot, CartError>;

    /// Delete a line; absent ids are not an error.
    async fn remove(&self, product_id: &str) -> Result<CartSnapshot, CartError>;

    /// Empty the cart.
    async fn clear(&self) -> Result<CartSnapshot, CartError>;

    /// Current state without mutation.
    async fn snapshot(&self) -> Result<CartSnapshot, CartError>;
}

/// Backend selected at startup from the page's authentication markers
#[derive(Debug, Clone)]
pub enum CartBackend {
    Guest(LocalCart),
    Customer(RemoteCart),
}

impl CartBackend {
    pub fn is_guest(&self) -> bool {
        matches!(self, CartBackend::Guest(_))
    }
}

impl CartRepository for CartBackend {
    async fn add(&self, product: &Product, quantity: u32) -> Result<CartSnapshot, CartError> {
        match self {
            CartBackend::Guest(cart) => cart.add(product, quantity).await,
            CartBackend::Customer(cart) => cart.add(product, quantity).await,
        }
    }

    async fn update(
        &self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        match self {
            CartBackend::Guest(cart) => cart.update(product_id, new_quantity).await,
            CartBackend::Customer(cart) => cart.update(product_id, new_quantity).await,
        }
    }

    async fn remove(&self, product_id: &str) -> Result<CartSnapshot, CartError> {
        match self {
            CartBackend::Guest(cart) => cart.remove(product_id).await,
            CartBackend::Customer(cart) => cart.remove(product_id).await,
        }
    }

    async fn clear(&self) -> Result<CartSnapshot, CartError> {
        match self {
            CartBackend::Guest(cart) => cart.clear().await,
            CartBackend::Customer(cart) => cart.clear().await,
        }
    }

    async fn snapshot(&self) -> Result<CartSnapshot, CartError> {
        match self {
            CartBackend::Guest(cart) => cart.snapshot().await,
            CartBackend::Customer(cart) => cart.snapshot().await,
        }
    }
}
