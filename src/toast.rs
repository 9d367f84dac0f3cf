//! Toast Queue
//!
//! Session-storage backed notification queue that survives page navigations.
//! The persisted queue is the source of truth; the toast host repaints the
//! whole queue from it on every change rather than appending to the DOM.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage;

/// How long a success toast stays up (ms)
pub const SUCCESS_AUTOHIDE_MS: u32 = 5_000;
/// Errors linger longer so they can be read
pub const ERROR_AUTOHIDE_MS: u32 = 12_000;

/// One pending notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastEntry {
    pub id: String,
    pub message: String,
    pub is_error: bool,
    /// Unix epoch milliseconds at enqueue time
    pub timestamp: f64,
}

impl ToastEntry {
    pub fn autohide_ms(&self) -> u32 {
        if self.is_error {
            ERROR_AUTOHIDE_MS
        } else {
            SUCCESS_AUTOHIDE_MS
        }
    }

    /// Whether the autohide delay has fully elapsed
    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms - self.timestamp >= f64::from(self.autohide_ms())
    }
}

/// One-shot flash message lifted from the page markup
#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    /// Attribute key; a key containing "error" marks error severity
    pub key: String,
    pub message: String,
}

impl FlashMessage {
    pub fn is_error(&self) -> bool {
        self.key.to_ascii_lowercase().contains("error")
    }
}

/// Merge the page's one-shot flash messages into the pending queue.
pub fn merge_flash(
    mut queue: Vec<ToastEntry>,
    flash: &[FlashMessage],
    now_ms: f64,
) -> Vec<ToastEntry> {
    for (index, message) in flash.iter().enumerate() {
        queue.push(ToastEntry {
            id: format!("{}-{}-{}", now_ms as u64, index, message.key),
            message: message.message.clone(),
            is_error: message.is_error(),
            timestamp: now_ms,
        });
    }
    queue
}

/// Relative age label: "now", "Ns ago", "Mm Ss ago".
pub fn relative_age(now_ms: f64, created_ms: f64) -> String {
    let seconds = ((now_ms - created_ms) / 1000.0).max(0.0) as u64;
    if seconds < 5 {
        "now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else {
        format!("{}m {}s ago", seconds / 60, seconds % 60)
    }
}

/// Handle for enqueueing and dismissing toasts from any component
#[derive(Clone, Copy, Debug)]
pub struct ToastHandle {
    entries: RwSignal<Vec<ToastEntry>>,
}

impl ToastHandle {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<ToastEntry>> {
        self.entries
    }

    /// Restore the persisted queue and absorb the page's one-shot messages.
    pub fn flush(&self, flash: &[FlashMessage]) {
        let pending: Vec<ToastEntry> =
            storage::read_json(storage::TOAST_KEY).unwrap_or_default();
        let merged = merge_flash(pending, flash, js_sys::Date::now());
        storage::write_json(storage::TOAST_KEY, &merged);
        self.entries.set(merged);
    }

    /// Queue a toast and persist it so it survives a navigation.
    pub fn push(&self, message: impl Into<String>, is_error: bool) {
        let now = js_sys::Date::now();
        let entry = ToastEntry {
            id: format!(
                "{}-{}",
                now as u64,
                (js_sys::Math::random() * 1_000_000.0) as u32
            ),
            message: message.into(),
            is_error,
            timestamp: now,
        };
        self.entries.update(|entries| entries.push(entry));
        self.persist();
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, true);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, false);
    }

    /// Drop one entry from the queue and storage (manual dismiss).
    pub fn dismiss(&self, id: &str) {
        self.entries.update(|entries| entries.retain(|e| e.id != id));
        self.persist();
    }

    /// Drop every entry whose autohide delay has elapsed.
    pub fn expire(&self, now_ms: f64) {
        let before = self.entries.with_untracked(Vec::len);
        self.entries
            .update(|entries| entries.retain(|e| !e.expired(now_ms)));
        if self.entries.with_untracked(Vec::len) != before {
            self.persist();
        }
    }

    fn persist(&self) {
        self.entries
            .with_untracked(|entries| storage::write_json(storage::TOAST_KEY, entries));
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_error: bool, timestamp: f64) -> ToastEntry {
        ToastEntry {
            id: id.to_string(),
            message: format!("message {}", id),
            is_error,
            timestamp,
        }
    }

    #[test]
    fn pending_entries_survive_a_flush_merge() {
        let pending = vec![entry("a", true, 1_000.0), entry("b", true, 2_000.0)];
        let merged = merge_flash(pending, &[], 3_000.0);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|e| e.is_error));
    }

    #[test]
    fn flash_keys_containing_error_are_error_severity() {
        let flash = vec![
            FlashMessage {
                key: "orderError".to_string(),
                message: "Order failed".to_string(),
            },
            FlashMessage {
                key: "welcome".to_string(),
                message: "Order placed!".to_string(),
            },
        ];
        let merged = merge_flash(Vec::new(), &flash, 5_000.0);
        assert_eq!(merged.len(), 2);
        assert!(merged[0].is_error);
        assert!(!merged[1].is_error);
        assert_eq!(merged[0].message, "Order failed");
        assert_eq!(merged[0].timestamp, 5_000.0);
    }

    #[test]
    fn merged_ids_are_unique_within_a_flush() {
        let flash = vec![
            FlashMessage {
                key: "one".to_string(),
                message: "first".to_string(),
            },
            FlashMessage {
                key: "one".to_string(),
                message: "second".to_string(),
            },
        ];
        let merged = merge_flash(Vec::new(), &flash, 5_000.0);
        assert_ne!(merged[0].id, merged[1].id);
    }

    #[test]
    fn relative_age_buckets() {
        assert_eq!(relative_age(1_000.0, 0.0), "now");
        assert_eq!(relative_age(4_999.0, 0.0), "now");
        assert_eq!(relative_age(5_000.0, 0.0), "5s ago");
        assert_eq!(relative_age(59_000.0, 0.0), "59s ago");
        assert_eq!(relative_age(61_000.0, 0.0), "1m 1s ago");
        assert_eq!(relative_age(125_000.0, 0.0), "2m 5s ago");
    }

    #[test]
    fn relative_age_never_goes_negative() {
        assert_eq!(relative_age(0.0, 10_000.0), "now");
    }

    #[test]
    fn errors_outlive_successes() {
        let success = entry("s", false, 0.0);
        let error = entry("e", true, 0.0);
        assert!(success.expired(f64::from(SUCCESS_AUTOHIDE_MS)));
        assert!(!error.expired(f64::from(SUCCESS_AUTOHIDE_MS)));
        assert!(error.expired(f64::from(ERROR_AUTOHIDE_MS)));
    }
}
