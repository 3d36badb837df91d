use dioxus::prelude::*;

use ui::{use_auth, LoadingSpinner};

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod project_details;
pub use project_details::ProjectDetails;

mod report;
pub use report::Report;

mod master;
pub use master::Master;

mod add_project;
pub use add_project::AddProject;

mod add_user;
pub use add_user::AddUser;

mod assign_user;
pub use assign_user::AssignUser;

mod add_petty_cash;
pub use add_petty_cash::AddPettyCash;

/// Route gate: unauthenticated visitors are sent to the login view, and
/// non-admins are sent home from admin-only views. Nothing renders until the
/// initial session restore has finished, so a reload never flashes a
/// redirect.
#[component]
pub fn Guard(#[props(default = false)] admin_only: bool, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! { LoadingSpinner {} };
    }

    if auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    if admin_only && !auth().is_admin() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
