//! Report view: per-project totals table with a workbook download per row.

use api::report::ProjectReport;
use dioxus::prelude::*;

use ui::{format_amount, LoadingSpinner, NavTab, Shell};

use crate::views::Guard;

#[component]
pub fn Report() -> Element {
    rsx! {
        Guard {
            Shell {
                active: NavTab::Report,
                ReportTable {}
            }
        }
    }
}

#[component]
fn ReportTable() -> Element {
    let mut reports = use_signal(Vec::<ProjectReport>::new);
    let mut loading = use_signal(|| true);
    // Project id with an export in flight; gates repeat triggering.
    let mut exporting = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api::get_report().await {
            Ok(data) => reports.set(data),
            Err(e) => tracing::error!("Error fetching report: {}", e),
        }
        loading.set(false);
    });

    if loading() {
        return rsx! { LoadingSpinner {} };
    }

    rsx! {
        div {
            class: "report-view",
            h2 { class: "view-heading", "Report" }

            if reports().is_empty() {
                div {
                    class: "empty-state",
                    p { "No projects to report on yet." }
                }
            } else {
                div {
                    class: "table-scroll",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Sr.No" }
                                th { "Name" }
                                th { "Total Cash" }
                                th { "Total Expenses" }
                                th { "Balance" }
                                th { "" }
                            }
                        }
                        tbody {
                            for (i, report) in reports().into_iter().enumerate() {
                                {
                                    let id = report.project.id.clone();
                                    let busy = exporting() == Some(id.clone());
                                    rsx! {
                                        tr {
                                            key: "{report.project.id}",
                                            td { "{i + 1}" }
                                            td { "{report.project.name}" }
                                            td { "₹{format_amount(report.total_cash)}" }
                                            td { "₹{format_amount(report.total_expenses)}" }
                                            td {
                                                class: if report.balance < 0.0 { "amount-negative" } else { "amount-positive" },
                                                "₹{format_amount(report.balance)}"
                                            }
                                            td {
                                                // The export endpoint answers with an attachment,
                                                // so setting location triggers a download without
                                                // leaving the view. The browser gives no completion
                                                // signal, so the button re-arms after a short hold.
                                                button {
                                                    class: "export-button",
                                                    disabled: busy,
                                                    onclick: move |_| {
                                                        if exporting().is_some() {
                                                            return;
                                                        }
                                                        exporting.set(Some(id.clone()));
                                                        ui::redirect(&format!("/api/reports/{}/export", id));
                                                        spawn(async move {
                                                            #[cfg(target_arch = "wasm32")]
                                                            gloo_timers::future::TimeoutFuture::new(1_500).await;
                                                            exporting.set(None);
                                                        });
                                                    },
                                                    if busy { "Exporting..." } else { "Export" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
