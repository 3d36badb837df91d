//! Mobile shell layout: welcome header, scrollable content, bottom nav.

use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

/// Bottom navigation tabs. Master is only rendered for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Master,
    Report,
}

impl NavTab {
    fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Master => "Master",
            NavTab::Report => "Report",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            NavTab::Home => "/",
            NavTab::Master => "/master",
            NavTab::Report => "/report",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NavTab::Home => "🏠",
            NavTab::Master => "▦",
            NavTab::Report => "📊",
        }
    }
}

/// Mobile app shell wrapped around every protected view.
#[component]
pub fn Shell(active: NavTab, children: Element) -> Element {
    let auth = use_auth();

    let tabs = [NavTab::Home, NavTab::Master, NavTab::Report];
    let is_admin = auth().is_admin();
    let user_name = auth()
        .user
        .map(|u| u.name)
        .unwrap_or_default();

    rsx! {
        div {
            class: "shell",

            header {
                class: "shell-header",
                h1 {
                    class: "shell-title",
                    "Welcome "
                    span { class: "shell-title-name", "{user_name}" }
                }
                LogoutButton { class: "shell-logout", label: "Logout" }
            }

            main {
                class: "shell-main",
                {children}
            }

            nav {
                class: "shell-nav",
                for tab in tabs {
                    if tab != NavTab::Master || is_admin {
                        a {
                            key: "{tab.label()}",
                            class: if tab == active { "nav-item nav-item-active" } else { "nav-item" },
                            href: tab.path(),
                            span { class: "nav-icon", "{tab.icon()}" }
                            span { class: "nav-label", "{tab.label()}" }
                        }
                    }
                }
            }
        }
    }
}
