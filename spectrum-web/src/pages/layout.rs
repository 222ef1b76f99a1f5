use crate::storage::LocalStorage;
use crate::theme::use_theme;
use crate::Route;
use dioxus::prelude::*;
use spectrum_ui::{AppLayoutView, Footer, NavItem, NavbarView};

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let mut theme = use_theme();
    let year = js_sys::Date::new_0().get_full_year() as i32;

    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "spectrum".to_string(),
            label: "Spectrum".to_string(),
            is_active: matches!(current_route, Route::Spectrum {}),
        },
    ];

    rsx! {
        AppLayoutView {
            navbar: rsx! {
                NavbarView {
                    nav_items,
                    on_nav_click: move |id: String| {
                        match id.as_str() {
                            "home" => {
                                navigator().push(Route::Home {});
                            }
                            "spectrum" => {
                                navigator().push(Route::Spectrum {});
                            }
                            _ => {}
                        }
                    },
                    is_dark: theme.read().is_dark(),
                    on_theme_toggle: move |_| {
                        theme.write().toggle(&LocalStorage);
                    },
                }
            },
            footer: rsx! {
                Footer { year }
            },
            Outlet::<Route> {}
        }
    }
}
