//! Navbar view component
//!
//! Pure, props-based component for the top bar: logo text, page links,
//! a mobile menu toggle and the theme switch.

use crate::components::button::ChromelessButton;
use dioxus::prelude::*;

/// Navigation item for the navbar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

fn nav_link_class(is_active: bool) -> &'static str {
    if is_active {
        "navbar-link active"
    } else {
        "navbar-link"
    }
}

/// Navbar view (pure, props-based)
#[component]
pub fn NavbarView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    is_dark: bool,
    on_theme_toggle: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let links_class = if menu_open() {
        "navbar-links-container open"
    } else {
        "navbar-links-container"
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-left-side",
                ChromelessButton {
                    class: Some("logo".to_string()),
                    aria_label: Some("Home".to_string()),
                    onclick: move |_| on_nav_click.call("home".to_string()),
                    LogoText {}
                }
            }
            ChromelessButton {
                class: Some("navbar-toggle".to_string()),
                aria_label: Some("Toggle menu".to_string()),
                aria_pressed: Some(menu_open()),
                onclick: move |_| menu_open.set(!menu_open()),
                span { class: "navbar-toggle-bar" }
                span { class: "navbar-toggle-bar" }
                span { class: "navbar-toggle-bar" }
            }
            div { class: links_class,
                ul { class: "navbar-links",
                    for item in nav_items.iter() {
                        li { key: "{item.id}", class: "navbar-links-list",
                            ChromelessButton {
                                class: Some(nav_link_class(item.is_active).to_string()),
                                onclick: {
                                    let id = item.id.clone();
                                    move |_| {
                                        menu_open.set(false);
                                        on_nav_click.call(id.clone());
                                    }
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
            div { class: "theme-toggle",
                ThemeToggle { is_dark, on_toggle: on_theme_toggle }
            }
        }
    }
}

/// Switch between light and dark themes
#[component]
pub fn ThemeToggle(is_dark: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        label { class: "theme",
            input {
                id: "theme",
                class: "theme-switch",
                r#type: "checkbox",
                role: "switch",
                name: "theme",
                aria_label: "Dark theme",
                checked: is_dark,
                onchange: move |_| on_toggle.call(()),
            }
            span { class: "theme-icon",
                for part in 0..9 {
                    span { key: "{part}", class: "theme-icon-part" }
                }
            }
        }
    }
}

/// Text wordmark used in the navbar
#[component]
pub fn LogoText() -> Element {
    rsx! {
        span { class: "logo-text", "Chameleonfy" }
    }
}

/// Large wordmark for the home page
#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "logo-image", role: "img", aria_label: "Chameleonfy - Music Mood Visualizer",
            span { class: "logo-title", "Chameleonfy" }
            span { class: "logo-tagline", "Music Mood Visualizer" }
        }
    }
}
