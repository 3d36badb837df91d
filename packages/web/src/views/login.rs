//! Login page view with the name + password form.

use dioxus::prelude::*;

use ui::{use_auth, AuthState};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect home
    if !auth().loading && auth().user.is_some() {
        ui::redirect("/");
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if name().trim().is_empty() || password().is_empty() {
                return;
            }

            loading.set(true);
            match api::login(name(), password()).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    ui::redirect("/");
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    loading.set(false);
                    error.set(Some("Invalid name or password".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-screen",

            div {
                class: "login-card",

                div {
                    class: "login-heading",
                    div { class: "login-lock", "🔒" }
                    h1 { "Petty Cash Manager" }
                    p { "Sign in to your account" }
                }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,

                    label { "User Name" }
                    input {
                        r#type: "text",
                        placeholder: "Enter your name",
                        value: name(),
                        required: true,
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        required: true,
                        oninput: move |evt| password.set(evt.value()),
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "primary-button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
