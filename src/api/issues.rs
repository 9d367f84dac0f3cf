//! Issue Report API Bindings

use serde::Serialize;

use crate::models::{IssueReport, IssueResolution};

use super::{get_json, post_json, ApiError, CsrfToken};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveArgs<'a> {
    admin_notes: &'a str,
}

/// All reports filed against an order.
pub async fn reports_for_order(order_id: &str) -> Result<Vec<IssueReport>, ApiError> {
    get_json(&format!("/api/issues/order/{}", order_id)).await
}

/// The signed-in customer's own report for an order.
pub async fn my_report_for_order(order_id: &str) -> Result<IssueReport, ApiError> {
    get_json(&format!("/api/issues/my-report/order/{}", order_id)).await
}

/// Close a report with admin notes.
pub async fn resolve(
    csrf: Option<&CsrfToken>,
    issue_id: i64,
    admin_notes: &str,
) -> Result<IssueResolution, ApiError> {
    post_json(
        &format!("/api/issues/resolve/{}", issue_id),
        &ResolveArgs { admin_notes },
        csrf,
    )
    .await
}
