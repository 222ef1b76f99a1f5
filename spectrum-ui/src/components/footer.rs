use dioxus::prelude::*;

#[component]
pub fn Footer(year: i32) -> Element {
    rsx! {
        footer { class: "footer",
            p {
                "© {year} "
                span { class: "footer-brand", "Made by Yotec" }
            }
        }
    }
}
