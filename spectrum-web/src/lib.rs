pub mod api;
pub mod config;
pub mod pages;
pub mod storage;
pub mod theme;

use dioxus::prelude::*;
use pages::{AppLayout, Home, Spectrum};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/spectrum")]
    Spectrum {},
}

#[component]
pub fn App() -> Element {
    theme::use_theme_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
