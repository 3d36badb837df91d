//! Home view: one card per project with funding and expense totals.
//!
//! A project with no petty cash yet is greyed out; tapping it shows a hint
//! instead of navigating into the expense view.

use api::ProjectSummary;
use dioxus::prelude::*;

use ui::{format_amount, LoadingSpinner, NavTab, Shell};

use crate::views::Guard;
use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        Guard {
            Shell {
                active: NavTab::Home,
                ProjectCards {}
            }
        }
    }
}

#[component]
fn ProjectCards() -> Element {
    let mut summaries = use_signal(Vec::<ProjectSummary>::new);
    let mut loading = use_signal(|| true);
    let mut notice = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::list_project_summaries().await {
            Ok(data) => summaries.set(data),
            Err(e) => tracing::error!("Error fetching projects: {}", e),
        }
        loading.set(false);
    });

    if loading() {
        return rsx! { LoadingSpinner {} };
    }

    rsx! {
        div {
            class: "card-list",

            if let Some(msg) = notice() {
                div { class: "notice-banner", "{msg}" }
            }

            for summary in summaries() {
                {
                    let has_cash = summary.has_cash();
                    let id = summary.project.id.clone();
                    rsx! {
                        div {
                            key: "{summary.project.id}",
                            class: if has_cash { "project-card" } else { "project-card project-card-disabled" },
                            onclick: move |_| {
                                if has_cash {
                                    nav.push(Route::ProjectDetails { id: id.clone() });
                                } else {
                                    notice.set(Some("Add Petty Cash to the Project.".to_string()));
                                }
                            },

                            div {
                                class: "project-card-head",
                                if let Some(logo) = summary.project.logo.clone() {
                                    img { class: "project-logo", src: "{logo}", alt: "{summary.project.name}" }
                                } else {
                                    div { class: "project-logo project-logo-empty", "No Logo" }
                                }
                                h3 { "{summary.project.name}" }
                            }

                            div {
                                class: "project-card-totals",
                                div {
                                    class: "total-row",
                                    span { class: "total-label", "Received" }
                                    span { class: "total-in", "₹{format_amount(summary.total_cash)}" }
                                }
                                div {
                                    class: "total-row",
                                    span { class: "total-label", "Expenses" }
                                    span { class: "total-out", "₹{format_amount(summary.total_expenses)}" }
                                }
                            }
                        }
                    }
                }
            }

            if summaries().is_empty() {
                div {
                    class: "empty-state",
                    h3 { "No projects found" }
                    p { "Get started by adding a new project." }
                }
            }
        }
    }
}
