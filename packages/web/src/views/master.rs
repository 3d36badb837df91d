//! Admin menu linking to the management views.

use dioxus::prelude::*;

use ui::{NavTab, Shell};

use crate::views::Guard;
use crate::Route;

#[component]
pub fn Master() -> Element {
    rsx! {
        Guard {
            admin_only: true,
            Shell {
                active: NavTab::Master,
                MasterMenu {}
            }
        }
    }
}

#[component]
fn MasterMenu() -> Element {
    let nav = use_navigator();

    let entries = [
        ("Add Project", "Create a new project", "📁", Route::AddProject {}),
        ("Add User", "Create user accounts", "👤", Route::AddUser {}),
        ("Assign User", "Assign users to projects", "🔗", Route::AssignUser {}),
        (
            "Add Petty Cash",
            "Record funding for a project",
            "💰",
            Route::AddPettyCash {},
        ),
    ];

    rsx! {
        div {
            class: "master-menu",
            h2 { class: "view-heading", "Master" }
            for (title, subtitle, icon, route) in entries {
                button {
                    key: "{title}",
                    class: "master-entry",
                    onclick: move |_| {
                        nav.push(route.clone());
                    },
                    span { class: "master-icon", "{icon}" }
                    div {
                        class: "master-text",
                        span { class: "master-title", "{title}" }
                        span { class: "master-subtitle", "{subtitle}" }
                    }
                    span { class: "master-arrow", "›" }
                }
            }
        }
    }
}
