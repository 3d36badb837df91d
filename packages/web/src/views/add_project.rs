//! Admin view for creating projects and editing existing ones.
//!
//! The logo is read from the picked file and stored inline as a base64 data
//! URL, so no object storage is needed for the small images involved.

use api::ProjectInfo;
use base64::Engine;
use dioxus::prelude::*;

use ui::{NavTab, Shell};

use crate::views::Guard;

#[component]
pub fn AddProject() -> Element {
    rsx! {
        Guard {
            admin_only: true,
            Shell {
                active: NavTab::Master,
                ProjectForm {}
            }
        }
    }
}

/// Read the first picked file and encode it as a data URL.
async fn read_logo(evt: &FormEvent) -> Option<String> {
    let file = evt.files().into_iter().next()?;
    let file_name = file.name();
    let bytes = file.read_bytes().await.ok()?;

    let mime = match file_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Some(format!("data:{};base64,{}", mime, encoded))
}

#[component]
fn ProjectForm() -> Element {
    let mut projects = use_signal(Vec::<ProjectInfo>::new);
    let mut name = use_signal(String::new);
    let mut logo = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    // Project being edited in the dialog, if any.
    let mut editing = use_signal(|| Option::<ProjectInfo>::None);
    let mut edit_name = use_signal(String::new);
    let mut edit_logo = use_signal(|| Option::<String>::None);

    let mut reload = use_resource(move || async move {
        match api::list_projects().await {
            Ok(data) => projects.set(data),
            Err(e) => tracing::error!("Error fetching projects: {}", e),
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if name().trim().is_empty() {
                status.set(Some(Err("Project name is required".to_string())));
                return;
            }

            saving.set(true);
            status.set(None);
            match api::create_project(name(), logo()).await {
                Ok(_) => {
                    name.set(String::new());
                    logo.set(None);
                    status.set(Some(Ok("Project added successfully".to_string())));
                    reload.restart();
                }
                Err(e) => {
                    tracing::error!("Error creating project: {}", e);
                    status.set(Some(Err("Could not add project".to_string())));
                }
            }
            saving.set(false);
        });
    };

    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(project) = editing() else { return };
            if edit_name().trim().is_empty() {
                return;
            }

            match api::update_project(project.id.clone(), edit_name(), edit_logo()).await {
                Ok(()) => {
                    editing.set(None);
                    edit_logo.set(None);
                    reload.restart();
                }
                Err(e) => tracing::error!("Error updating project: {}", e),
            }
        });
    };

    rsx! {
        div {
            class: "admin-view",
            h2 { class: "view-heading", "Add Project" }

            form {
                class: "admin-form",
                onsubmit: handle_submit,

                label { "Project Name" }
                input {
                    r#type: "text",
                    placeholder: "Enter project name",
                    value: name(),
                    required: true,
                    oninput: move |evt| name.set(evt.value()),
                }

                label { "Project Logo" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |evt| {
                        spawn(async move {
                            logo.set(read_logo(&evt).await);
                        });
                    },
                }
                if let Some(preview) = logo() {
                    img { class: "logo-preview", src: "{preview}", alt: "Logo preview" }
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
                    if saving() { "Adding..." } else { "Add Project" }
                }
            }

            h3 { class: "list-heading", "Existing Projects" }
            div {
                class: "entity-list",
                for project in projects() {
                    {
                        let edit_target = project.clone();
                        rsx! {
                            div {
                                key: "{project.id}",
                                class: "entity-row",
                                if let Some(src) = project.logo.clone() {
                                    img { class: "entity-logo", src: "{src}", alt: "{project.name}" }
                                } else {
                                    div { class: "entity-logo entity-logo-empty", "—" }
                                }
                                div {
                                    class: "entity-main",
                                    span { class: "entity-name", "{project.name}" }
                                    span { class: "entity-meta", "Created {project.created_at}" }
                                }
                                button {
                                    class: "secondary-button",
                                    onclick: move |_| {
                                        edit_name.set(edit_target.name.clone());
                                        edit_logo.set(None);
                                        editing.set(Some(edit_target.clone()));
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
                }
                if projects().is_empty() {
                    div { class: "empty-state", p { "No projects yet." } }
                }
            }

            if editing().is_some() {
                div {
                    class: "dialog-backdrop",
                    div {
                        class: "dialog",
                        h3 { "Edit Project" }
                        form {
                            class: "admin-form",
                            onsubmit: handle_update,

                            label { "Project Name" }
                            input {
                                r#type: "text",
                                value: edit_name(),
                                required: true,
                                oninput: move |evt| edit_name.set(evt.value()),
                            }

                            label { "Replace Logo (optional)" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: move |evt| {
                                    spawn(async move {
                                        edit_logo.set(read_logo(&evt).await);
                                    });
                                },
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
