//! Expense entry view for a single project.
//!
//! Who the expense is recorded for depends on the signed-in user: a regular
//! user always records against themselves, while an admin picks from the
//! project's assigned users (shown read-only when only one is assigned).

use api::{ExpenseType, ProjectInfo, UserInfo};
use dioxus::prelude::*;

use ui::{use_auth, LoadingSpinner, NavTab, Picker, PickerOption, Shell};

use crate::views::Guard;

#[component]
pub fn ProjectDetails(id: String) -> Element {
    rsx! {
        Guard {
            Shell {
                active: NavTab::Home,
                ExpenseForm { project_id: id }
            }
        }
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[component]
fn ExpenseForm(project_id: String) -> Element {
    let auth = use_auth();
    let mut project = use_signal(|| Option::<ProjectInfo>::None);
    let mut assigned = use_signal(Vec::<UserInfo>::new);
    let mut loading = use_signal(|| true);

    let mut date = use_signal(today);
    let mut expense_type = use_signal(ExpenseType::default);
    let mut head = use_signal(String::new);
    let mut user_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let load_id = project_id.clone();
    let _loader = use_resource(move || {
        let id = load_id.clone();
        async move {
            match api::get_project(id.clone()).await {
                Ok(data) => project.set(Some(data)),
                Err(e) => tracing::error!("Error fetching project: {}", e),
            }
            match api::list_assigned_users(id).await {
                Ok(data) => assigned.set(data),
                Err(e) => tracing::error!("Error fetching assigned users: {}", e),
            }
            loading.set(false);
        }
    });

    let is_admin = auth().is_admin();
    let self_name = auth().user.map(|u| u.name).unwrap_or_default();

    // Resolve the name the expense will be recorded under. None means the
    // admin still has to pick one (or nobody is assigned at all).
    let fixed_user: Option<String> = if !is_admin {
        Some(self_name.clone())
    } else if assigned().len() == 1 {
        assigned().first().map(|u| u.name.clone())
    } else {
        None
    };
    let needs_picker = is_admin && assigned().len() > 1;
    let no_one_assigned = is_admin && assigned().is_empty();

    let submit_id = project_id.clone();
    let resolved_user = fixed_user.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = submit_id.clone();
        let resolved = resolved_user.clone().unwrap_or_else(|| user_name());
        spawn(async move {
            if head().trim().is_empty() {
                status.set(Some(Err("Expense head is required".to_string())));
                return;
            }
            if resolved.trim().is_empty() {
                status.set(Some(Err("Select a user for this expense".to_string())));
                return;
            }
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
            match api::add_expense(
                id,
                date(),
                expense_type(),
                head(),
                resolved,
                description(),
                value,
            )
            .await
            {
                Ok(()) => {
                    date.set(today());
                    expense_type.set(ExpenseType::default());
                    head.set(String::new());
                    user_name.set(String::new());
                    description.set(String::new());
                    amount.set(String::new());
                    status.set(Some(Ok("Expense added successfully".to_string())));
                }
                Err(e) => {
                    tracing::error!("Error adding expense: {}", e);
                    status.set(Some(Err("Could not add expense".to_string())));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! { LoadingSpinner {} };
    }

    let Some(project) = project() else {
        return rsx! {
            div { class: "empty-state", p { "Project not found." } }
        };
    };

    let type_options: Vec<PickerOption> = ExpenseType::ALL
        .iter()
        .map(|t| PickerOption::new(t.label(), t.label()))
        .collect();
    let user_options: Vec<PickerOption> = assigned()
        .iter()
        .map(|u| PickerOption::new(u.name.clone(), u.name.clone()))
        .collect();

    rsx! {
        div {
            class: "admin-view",
            h2 { class: "view-heading", "{project.name} · Add Expense" }

            form {
                class: "admin-form",
                onsubmit: handle_submit,

                label { "Date" }
                input {
                    r#type: "date",
                    value: date(),
                    max: today(),
                    required: true,
                    oninput: move |evt| date.set(evt.value()),
                }

                label { "Expense Type" }
                Picker {
                    placeholder: "Select expense type",
                    options: type_options,
                    selected: Some(expense_type().label().to_string()),
                    on_select: move |value: String| {
                        expense_type.set(value.parse().unwrap_or_default());
                    },
                }

                label { "Expense Head" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Taxi fare",
                    value: head(),
                    required: true,
                    oninput: move |evt| head.set(evt.value()),
                }

                label { "User" }
                if needs_picker {
                    Picker {
                        placeholder: "Select user",
                        options: user_options,
                        selected: (!user_name().is_empty()).then(|| user_name()),
                        on_select: move |value| user_name.set(value),
                    }
                } else if let Some(name) = fixed_user.clone() {
                    input {
                        r#type: "text",
                        value: name,
                        readonly: true,
                    }
                } else if no_one_assigned {
                    div {
                        class: "form-error",
                        "No users are assigned to this project. Assign a user first."
                    }
                }

                label { "Description (optional)" }
                textarea {
                    placeholder: "Notes about this expense",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
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
                    disabled: saving() || no_one_assigned,
                    if saving() { "Adding..." } else { "Add Expense" }
                }
            }
        }
    }
}
