//! App layout view component
//!
//! Navbar on top, page content, footer at the bottom. Everything sits inside
//! a render boundary so one failing page doesn't blank the whole app.

use crate::components::helpers::RenderBoundary;
use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional navbar at the top
    #[props(default)]
    navbar: Option<Element>,
    /// Optional footer at the bottom
    #[props(default)]
    footer: Option<Element>,
) -> Element {
    rsx! {
        RenderBoundary {
            div { class: "app",
                if let Some(nb) = navbar {
                    {nb}
                }
                div { class: "app-content", {children} }
                if let Some(ft) = footer {
                    {ft}
                }
            }
        }
    }
}
