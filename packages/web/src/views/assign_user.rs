//! Admin view for assigning users to projects.

use api::{AssignmentInfo, ProjectInfo, UserInfo};
use dioxus::prelude::*;

use ui::{MultiPicker, NavTab, Picker, PickerOption, Shell};

use crate::views::Guard;

#[component]
pub fn AssignUser() -> Element {
    rsx! {
        Guard {
            admin_only: true,
            Shell {
                active: NavTab::Master,
                AssignForm {}
            }
        }
    }
}

#[component]
fn AssignForm() -> Element {
    let mut projects = use_signal(Vec::<ProjectInfo>::new);
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut assignments = use_signal(Vec::<AssignmentInfo>::new);
    let mut selected_project = use_signal(|| Option::<String>::None);
    let mut selected_users = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api::list_projects().await {
            Ok(data) => projects.set(data),
            Err(e) => tracing::error!("Error fetching projects: {}", e),
        }
        match api::list_users().await {
            Ok(data) => users.set(data),
            Err(e) => tracing::error!("Error fetching users: {}", e),
        }
    });

    let mut reload_assignments = use_resource(move || async move {
        match api::list_assignments().await {
            Ok(data) => assignments.set(data),
            Err(e) => tracing::error!("Error fetching assignments: {}", e),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(project_id) = selected_project() else {
                status.set(Some(Err("Select a project first".to_string())));
                return;
            };
            if selected_users().is_empty() {
                status.set(Some(Err("Select at least one user".to_string())));
                return;
            }

            saving.set(true);
            status.set(None);
            match api::assign_users(project_id, selected_users()).await {
                Ok(()) => {
                    selected_project.set(None);
                    selected_users.set(Vec::new());
                    status.set(Some(Ok("Users assigned successfully".to_string())));
                    reload_assignments.restart();
                }
                Err(e) => {
                    tracing::error!("Error assigning users: {}", e);
                    status.set(Some(Err("Could not assign users".to_string())));
                }
            }
            saving.set(false);
        });
    };

    // Options sorted by name so the dropdowns read alphabetically even though
    // the lists come back newest first.
    let project_options = {
        let mut opts: Vec<PickerOption> = projects()
            .iter()
            .map(|p| PickerOption::new(p.id.clone(), p.name.clone()))
            .collect();
        opts.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        opts
    };
    let user_options = {
        let mut opts: Vec<PickerOption> = users()
            .iter()
            .map(|u| PickerOption::new(u.id.clone(), u.name.clone()))
            .collect();
        opts.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        opts
    };

    rsx! {
        div {
            class: "admin-view",
            h2 { class: "view-heading", "Assign User" }

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

                label { "Users" }
                MultiPicker {
                    placeholder: "Select users",
                    options: user_options,
                    selected: selected_users(),
                    empty_hint: "No users available. Add a user first.",
                    on_toggle: move |value: String| {
                        let mut current = selected_users();
                        if let Some(pos) = current.iter().position(|v| v == &value) {
                            current.remove(pos);
                        } else {
                            current.push(value);
                        }
                        selected_users.set(current);
                    },
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
                    if saving() { "Assigning..." } else { "Assign" }
                }
            }

            h3 { class: "list-heading", "Current Assignments" }
            div {
                class: "entity-list",
                for assignment in assignments() {
                    {
                        let id = assignment.id.clone();
                        let armed = confirm_delete() == Some(id.clone());
                        rsx! {
                            div {
                                key: "{assignment.id}",
                                class: "entity-row",
                                div {
                                    class: "entity-main",
                                    span { class: "entity-name", "{assignment.user_name}" }
                                    span { class: "entity-meta", "{assignment.project_name}" }
                                }
                                button {
                                    class: if armed { "danger-button danger-button-armed" } else { "danger-button" },
                                    onclick: move |_| {
                                        let id = id.clone();
                                        if armed {
                                            confirm_delete.set(None);
                                            spawn(async move {
                                                if let Err(e) = api::delete_assignment(id).await {
                                                    tracing::error!("Error deleting assignment: {}", e);
                                                } else {
                                                    reload_assignments.restart();
                                                }
                                            });
                                        } else {
                                            confirm_delete.set(Some(id));
                                        }
                                    },
                                    if armed { "Confirm?" } else { "Remove" }
                                }
                            }
                        }
                    }
                }
                if assignments().is_empty() {
                    div { class: "empty-state", p { "No assignments yet." } }
                }
            }
        }
    }
}
