//! HTTP Bindings
//!
//! Shared fetch plumbing for the JSON endpoints, organized by domain.
//! Mutating requests carry the CSRF header pair published in the page head.

pub mod cart;
pub mod issues;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// CSRF header name/value pair read from page metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CsrfToken {
    pub header: String,
    pub value: String,
}

impl CsrfToken {
    /// Read `<meta name="_csrf_header">` / `<meta name="_csrf">`. Absent
    /// metas mean the visitor is not signed in.
    pub fn from_page() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let meta = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        Some(CsrfToken {
            header: meta("_csrf_header")?,
            value: meta("_csrf")?,
        })
    }
}

/// API failure taxonomy
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; message comes from the JSON error body when present
    Http { status: u16, message: String },
    /// The fetch never completed (network down, navigation, CORS)
    Network(String),
    /// 2xx response whose body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::Network(detail) => write!(f, "Could not reach the server ({})", detail),
            ApiError::Decode(detail) => write!(f, "Unexpected server response ({})", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fallback display text for an error response with no usable body.
pub fn status_message(status: u16) -> String {
    match status {
        401 | 403 => "Your session has expired. Please sign in again.".to_string(),
        s if s >= 500 => "Something went wrong on our end. Please try again.".to_string(),
        s => format!("Request failed ({})", s),
    }
}

/// Extract the display message from a non-2xx response body.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| status_message(status))
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(ApiError::Http {
            status,
            message: error_message(status, &body),
        });
    }

    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Decode(err.to_string()))
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    csrf: Option<&CsrfToken>,
) -> Result<T, ApiError> {
    let payload =
        serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set("Accept", "application/json")?;
    if let Some(token) = csrf {
        request.headers().set(&token.header, &token.value)?;
    }
    send(request).await
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Accept", "application/json")?;
    send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_wins() {
        assert_eq!(error_message(409, r#"{"error":"Out of stock"}"#), "Out of stock");
    }

    #[test]
    fn malformed_body_falls_back_to_status_text() {
        assert_eq!(error_message(409, "<html>conflict</html>"), "Request failed (409)");
        assert_eq!(error_message(404, ""), "Request failed (404)");
    }

    #[test]
    fn auth_and_server_statuses_get_friendlier_text() {
        assert!(error_message(403, "").contains("sign in"));
        assert!(error_message(500, "").contains("our end"));
    }
}
