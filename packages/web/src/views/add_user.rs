//! Admin view for creating and removing user accounts.

use api::UserInfo;
use dioxus::prelude::*;

use ui::{NavTab, Picker, PickerOption, Shell};

use crate::views::Guard;

#[component]
pub fn AddUser() -> Element {
    rsx! {
        Guard {
            admin_only: true,
            Shell {
                active: NavTab::Master,
                UserForm {}
            }
        }
    }
}

#[component]
fn UserForm() -> Element {
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "User".to_string());
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    // Two-step delete: first tap arms the row, second tap deletes.
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let mut reload = use_resource(move || async move {
        match api::list_users().await {
            Ok(data) => users.set(data),
            Err(e) => tracing::error!("Error fetching users: {}", e),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if name().trim().is_empty() || password().trim().is_empty() {
                status.set(Some(Err("Name and password are required".to_string())));
                return;
            }

            saving.set(true);
            status.set(None);
            match api::create_user(name(), password(), role()).await {
                Ok(_) => {
                    name.set(String::new());
                    password.set(String::new());
                    role.set("User".to_string());
                    status.set(Some(Ok("User added successfully".to_string())));
                    reload.restart();
                }
                Err(e) => {
                    tracing::error!("Error creating user: {}", e);
                    status.set(Some(Err("Could not add user".to_string())));
                }
            }
            saving.set(false);
        });
    };

    let role_options = vec![
        PickerOption::new("User", "User"),
        PickerOption::new("Admin", "Admin"),
    ];

    rsx! {
        div {
            class: "admin-view",
            h2 { class: "view-heading", "Add User" }

            form {
                class: "admin-form",
                onsubmit: handle_submit,

                label { "User Name" }
                input {
                    r#type: "text",
                    placeholder: "Enter user name",
                    value: name(),
                    required: true,
                    oninput: move |evt| name.set(evt.value()),
                }

                label { "Password" }
                input {
                    r#type: "password",
                    placeholder: "Enter password",
                    value: password(),
                    required: true,
                    oninput: move |evt| password.set(evt.value()),
                }

                label { "Role" }
                Picker {
                    placeholder: "Select role",
                    options: role_options,
                    selected: Some(role()),
                    on_select: move |value| role.set(value),
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
                    if saving() { "Adding..." } else { "Add User" }
                }
            }

            h3 { class: "list-heading", "Existing Users" }
            div {
                class: "entity-list",
                for user in users() {
                    {
                        let id = user.id.clone();
                        let armed = confirm_delete() == Some(id.clone());
                        rsx! {
                            div {
                                key: "{user.id}",
                                class: "entity-row",
                                div {
                                    class: "entity-main",
                                    span { class: "entity-name", "{user.name}" }
                                    span { class: "entity-meta", "{user.role} · {user.created_at}" }
                                }
                                button {
                                    class: if armed { "danger-button danger-button-armed" } else { "danger-button" },
                                    onclick: move |_| {
                                        let id = id.clone();
                                        if armed {
                                            confirm_delete.set(None);
                                            spawn(async move {
                                                if let Err(e) = api::delete_user(id).await {
                                                    tracing::error!("Error deleting user: {}", e);
                                                } else {
                                                    reload.restart();
                                                }
                                            });
                                        } else {
                                            confirm_delete.set(Some(id));
                                        }
                                    },
                                    if armed { "Confirm?" } else { "Delete" }
                                }
                            }
                        }
                    }
                }
                if users().is_empty() {
                    div { class: "empty-state", p { "No users yet." } }
                }
            }
        }
    }
}
