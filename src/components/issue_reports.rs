//! Order Issue Reports Panel
//!
//! Issue reports for the order in page context. Admin views list every
//! report and may resolve open ones with a note; customers only see their
//! own report. The resolve button disables itself while its request is in
//! flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError, CsrfToken};
use crate::context::use_app_context;
use crate::models::{IssueReport, IssueResolution};

#[component]
pub fn IssueReportsPanel(order_id: String, admin: bool) -> impl IntoView {
    let ctx = use_app_context();
    let csrf = use_context::<Option<CsrfToken>>().flatten();

    let (reports, set_reports) = signal(Vec::<IssueReport>::new());
    let (loaded, set_loaded) = signal(false);

    let fetch_id = order_id.clone();
    Effect::new(move |_| {
        let order_id = fetch_id.clone();
        spawn_local(async move {
            let fetched = if admin {
                api::issues::reports_for_order(&order_id).await
            } else {
                match api::issues::my_report_for_order(&order_id).await {
                    Ok(report) => Ok(vec![report]),
                    // No report filed yet; the empty state covers it.
                    Err(ApiError::Http { status: 404, .. }) => Ok(Vec::new()),
                    Err(err) => Err(err),
                }
            };
            match fetched {
                Ok(list) => set_reports.set(list),
                Err(err) => ctx.toasts.error(err.to_string()),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <section class="issue-reports">
            <h2>"Order Issues"</h2>
            <Show when=move || loaded.get() && reports.read().is_empty()>
                <p class="issue-empty">"No issues reported for this order."</p>
            </Show>
            <For
                each=move || reports.get()
                key=|report| report.id
                children=move |report| {
                    let csrf = csrf.clone();
                    view! { <IssueCard report=report csrf=csrf admin=admin /> }
                }
            />
        </section>
    }
}

#[component]
fn IssueCard(report: IssueReport, csrf: Option<CsrfToken>, admin: bool) -> impl IntoView {
    let ctx = use_app_context();

    let (notes, set_notes) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (resolution, set_resolution) = signal::<Option<IssueResolution>>(None);

    let issue_id = report.id;
    let was_open = report.open;
    let is_open = move || was_open && resolution.read().is_none();

    // Copy-friendly homes for non-Copy captures used inside Show children.
    let csrf = StoredValue::new(csrf);
    let loaded = StoredValue::new((
        report.resolved_by_admin.clone(),
        report.admin_notes.clone(),
    ));

    let resolve = move |_| {
        if busy.get_untracked() {
            return;
        }
        let admin_notes = notes.get_untracked().trim().to_string();
        if admin_notes.is_empty() {
            ctx.toasts.error("Add a note describing how the issue was resolved");
            return;
        }
        let csrf = csrf.get_value();
        set_busy.set(true);
        spawn_local(async move {
            match api::issues::resolve(csrf.as_ref(), issue_id, &admin_notes).await {
                Ok(done) => {
                    set_resolution.set(Some(done));
                    ctx.toasts.success("Issue marked as resolved");
                }
                Err(err) => ctx.toasts.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    // Prefer the live resolution over the page-load fields.
    let resolved_line = move || {
        resolution.with(|r| {
            let (by, notes) = match r {
                Some(done) => (done.resolved_by_admin.clone(), done.admin_notes.clone()),
                None => loaded.get_value(),
            };
            format!(
                "Resolved by {}: {}",
                by.unwrap_or_else(|| "admin".to_string()),
                notes.unwrap_or_default()
            )
        })
    };

    view! {
        <article class="issue-card">
            <header class="issue-header">
                <strong class="issue-summary">{report.summary.clone()}</strong>
                <span class="issue-meta">
                    {format!("{} · {}", report.username, report.reported_at)}
                </span>
            </header>
            <p class="issue-details">{report.details.clone()}</p>
            {report.attachment_image_url.clone().map(|url| view! {
                <a class="issue-attachment" href=url target="_blank">"View attachment"</a>
            })}
            <Show when=move || admin && is_open()>
                <div class="issue-resolve">
                    <textarea
                        class="issue-notes"
                        placeholder="Resolution notes"
                        prop:value=move || notes.get()
                        on:input=move |ev| {
                            let Some(target) = ev.target() else { return };
                            let Ok(area) = target.dyn_into::<web_sys::HtmlTextAreaElement>() else {
                                return;
                            };
                            set_notes.set(area.value());
                        }
                    ></textarea>
                    <button
                        type="button"
                        class="issue-resolve-btn"
                        disabled=move || busy.get()
                        on:click=resolve
                    >
                        {move || if busy.get() { "Resolving..." } else { "Mark resolved" }}
                    </button>
                </div>
            </Show>
            <Show when=move || !is_open()>
                <p class="issue-resolved">{resolved_line}</p>
            </Show>
        </article>
    }
}
