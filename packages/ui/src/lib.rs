//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod layout;
pub use layout::{NavTab, Shell};

mod spinner;
pub use spinner::LoadingSpinner;

mod picker;
pub use picker::{MultiPicker, Picker, PickerOption};

mod money;
pub use money::format_amount;

/// Navigate with a full location change. Used where a redirect must escape
/// the current component tree (login/logout).
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
