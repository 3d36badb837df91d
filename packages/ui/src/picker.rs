//! Dropdown pickers used by the admin forms.
//!
//! Plain button-toggled lists rather than native `select` elements, so the
//! open list can render check marks and an empty-state hint.

use dioxus::prelude::*;

/// One selectable entry: (value, label).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

impl PickerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Single-select dropdown.
#[component]
pub fn Picker(
    placeholder: String,
    options: Vec<PickerOption>,
    selected: Option<String>,
    #[props(default = "No options available.".to_string())] empty_hint: String,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let selected_label = selected.as_ref().and_then(|value| {
        options
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.clone())
    });

    rsx! {
        div {
            class: "picker",
            button {
                r#type: "button",
                class: "picker-toggle",
                onclick: move |_| open.toggle(),
                span {
                    class: if selected_label.is_some() { "picker-value" } else { "picker-placeholder" },
                    {selected_label.clone().unwrap_or_else(|| placeholder.clone())}
                }
                span { class: "picker-chevron", if open() { "▲" } else { "▼" } }
            }

            if open() {
                div {
                    class: "picker-list",
                    for option in options.iter().cloned() {
                        div {
                            key: "{option.value}",
                            class: if selected.as_deref() == Some(option.value.as_str()) {
                                "picker-item picker-item-selected"
                            } else {
                                "picker-item"
                            },
                            onclick: move |_| {
                                on_select.call(option.value.clone());
                                open.set(false);
                            },
                            span { "{option.label}" }
                            if selected.as_deref() == Some(option.value.as_str()) {
                                span { class: "picker-check", "✓" }
                            }
                        }
                    }
                    if options.is_empty() {
                        div { class: "picker-empty", "{empty_hint}" }
                    }
                }
            }
        }
    }
}

/// Multi-select dropdown; clicking an entry toggles it.
#[component]
pub fn MultiPicker(
    placeholder: String,
    options: Vec<PickerOption>,
    selected: Vec<String>,
    #[props(default = "No options available.".to_string())] empty_hint: String,
    on_toggle: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let summary = if selected.is_empty() {
        placeholder.clone()
    } else {
        format!("{} user(s) selected", selected.len())
    };

    rsx! {
        div {
            class: "picker",
            button {
                r#type: "button",
                class: "picker-toggle",
                onclick: move |_| open.toggle(),
                span {
                    class: if selected.is_empty() { "picker-placeholder" } else { "picker-value" },
                    "{summary}"
                }
                span { class: "picker-chevron", if open() { "▲" } else { "▼" } }
            }

            if open() {
                div {
                    class: "picker-list",
                    for option in options.iter().cloned() {
                        div {
                            key: "{option.value}",
                            class: if selected.contains(&option.value) {
                                "picker-item picker-item-selected"
                            } else {
                                "picker-item"
                            },
                            onclick: move |_| on_toggle.call(option.value.clone()),
                            span { "{option.label}" }
                            span {
                                class: "picker-check",
                                if selected.contains(&option.value) { "✓" } else { "○" }
                            }
                        }
                    }
                    if options.is_empty() {
                        div { class: "picker-empty", "{empty_hint}" }
                    }
                }
            }
        }
    }
}
