//! Admin view for recording petty cash against a project.
//!
//! Also shows each project's running totals, its funding history in a popup,
//! and lets an admin correct a previously recorded amount.

use api::{CashEntryInfo, ProjectSummary};
use dioxus::prelude::*;

use ui::{format_amount, NavTab, Picker, PickerOption, Shell};

use crate::views::Guard;

#[component]
pub fn AddPettyCash() -> Element {
    rsx! {
        Guard {
            admin_only: true,
            Shell {
                active: NavTab::Master,
                PettyCashForm {}
            }
        }
    }
}

#[component]
fn PettyCashForm() -> Element {
    let mut summaries = use_signal(Vec::<ProjectSummary>::new);
    let mut selected_project = use_signal(|| Option::<String>::None);
    let mut amount = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    // Project whose funding history popup is open.
    let mut history_for = use_signal(|| Option::<ProjectSummary>::None);
    let mut history = use_signal(Vec::<CashEntryInfo>::new);
    let mut history_loading = use_signal(|| false);
    // Entry being corrected in the edit dialog.
    let mut editing = use_signal(|| Option::<CashEntryInfo>::None);
    let mut edit_amount = use_signal(String::new);

    let mut reload = use_resource(move || async move {
        match api::list_project_summaries().await {
            Ok(data) => summaries.set(data),
            Err(e) => tracing::error!("Error fetching projects: {}", e),
        }
    });

    let mut load_history = move |summary: ProjectSummary| {
        let project_id = summary.project.id.clone();
        history_for.set(Some(summary));
        history_loading.set(true);
        spawn(async move {
            match api::list_cash_entries(project_id).await {
                Ok(data) => history.set(data),
                Err(e) => tracing::error!("Error fetching cash entries: {}", e),
            }
            history_loading.set(false);
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(project_id) = selected_project() else {
                status.set(Some(Err("Select a project first".to_string())));
                return;
            };
            let Ok(value) = amount().trim().parse::<f64>() else {
                status.set(Some(Err("Enter a valid amount".to_string())));
                return;
            };
            if value < 0.0 {
                status.set(Some(Err("Amount must not be negative".to_string())));
                return;
            }

            saving.set(true);
            status.set(None);
            match api::add_cash_entry(project_id, value).await {
                Ok(()) => {
                    selected_project.set(None);
                    amount.set(String::new());
                    status.set(Some(Ok("Petty cash added successfully".to_string())));
                    reload.restart();
                }
                Err(e) => {
                    tracing::error!("Error adding petty cash: {}", e);
                    status.set(Some(Err("Could not add petty cash".to_string())));
                }
            }
            saving.set(false);
        });
    };

    let handle_edit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(entry) = editing() else { return };
            let Ok(value) = edit_amount().trim().parse::<f64>() else {
                return;
            };
            if value < 0.0 {
                return;
            }

            match api::update_cash_entry(entry.id.clone(), value).await {
                Ok(()) => {
                    editing.set(None);
                    // Refresh both the popup list and the totals behind it.
                    match api::list_cash_entries(entry.project_id.clone()).await {
                        Ok(data) => history.set(data),
                        Err(e) => tracing::error!("Error fetching cash entries: {}", e),
                    }
                    reload.restart();
                }
                Err(e) => tracing::error!("Error updating cash entry: {}", e),
            }
        });
    };

    let project_options: Vec<PickerOption> = summaries()
        .iter()
        .map(|s| PickerOption::new(s.project.id.clone(), s.project.name.clone()))
        .collect();

    rsx! {
        div {
            class: "admin-view",
            h2 { class: "view-heading", "Add Petty Cash" }

            form {
                class: "admin-form",
                onsubmit: handle_submit,

                label { "Project" }
                Picker {
                    placeholder: "Select project",
                    options: project_options,
                    selected: selected_project(),
                    empty_hint: "No projects available. Add a project first.",
                    on_select: move |value| selected_project.set(Some(value)),
                }

                label { "Amount" }
                input {
                    r#type: "number",
                    inputmode: "decimal",
                    step: "0.01",
                    min: "0",
                    placeholder: "Enter amount",
                    value: amount(),
                    required: true,
                    oninput: move |evt| amount.set(evt.value()),
                }

                match status() {
                    Some(Ok(msg)) => rsx! { div { class: "form-success", "{msg}" } },
                    Some(Err(msg)) => rsx! { div { class: "form-error", "{msg}" } },
                    None => rsx! {},
                }

                button {
                    r#type: "submit",
                    class: "primary-button",
                    disabled: saving(),
                    if saving() { "Adding..." } else { "Add Petty Cash" }
                }
            }

            h3 { class: "list-heading", "Project Totals" }
            div {
                class: "table-scroll",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Project" }
                            th { "Total Cash" }
                            th { "Expenses" }
                            th { "" }
                        }
                    }
                    tbody {
                        for summary in summaries() {
                            {
                                let row = summary.clone();
                                rsx! {
                                    tr {
                                        key: "{summary.project.id}",
                                        td { "{summary.project.name}" }
                                        td { "₹{format_amount(summary.total_cash)}" }
                                        td { "₹{format_amount(summary.total_expenses)}" }
                                        td {
                                            button {
                                                class: "secondary-button",
                                                onclick: move |_| load_history(row.clone()),
                                                "History"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(open) = history_for() {
                div {
                    class: "dialog-backdrop",
                    div {
                        class: "dialog",
                        h3 { "{open.project.name} · Funding History" }

                        if history_loading() {
                            p { "Loading..." }
                        } else if history().is_empty() {
                            p { "No petty cash recorded yet." }
                        } else {
                            div {
                                class: "history-list",
                                for entry in history() {
                                    {
                                        let target = entry.clone();
                                        rsx! {
                                            div {
                                                key: "{entry.id}",
                                                class: "history-row",
                                                span { class: "history-date", "{entry.created_at}" }
                                                span { class: "history-amount", "₹{format_amount(entry.amount)}" }
                                                button {
                                                    class: "secondary-button",
                                                    onclick: move |_| {
                                                        edit_amount.set(target.amount.to_string());
                                                        editing.set(Some(target.clone()));
                                                    },
                                                    "Edit"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "dialog-actions",
                            button {
                                r#type: "button",
                                class: "secondary-button",
                                onclick: move |_| history_for.set(None),
                                "Close"
                            }
                        }
                    }
                }
            }

            if editing().is_some() {
                div {
                    class: "dialog-backdrop",
                    div {
                        class: "dialog",
                        h3 { "Edit Amount" }
                        form {
                            class: "admin-form",
                            onsubmit: handle_edit,

                            label { "Amount" }
                            input {
                                r#type: "number",
                                inputmode: "decimal",
                                step: "0.01",
                                min: "0",
                                value: edit_amount(),
                                required: true,
                                oninput: move |evt| edit_amount.set(evt.value()),
                            }

                            div {
                                class: "dialog-actions",
                                button {
                                    r#type: "button",
                                    class: "secondary-button",
                                    onclick: move |_| editing.set(None),
                                    "Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "primary-button",
                                    "Save"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
