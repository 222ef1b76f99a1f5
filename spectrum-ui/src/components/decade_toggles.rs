//! Decade filter toggles for the spectrum page

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use spectrum_common::{FilterSet, DECADES};

#[component]
pub fn DecadeToggles(
    filters: FilterSet,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "decade-toggles", role: "group", aria_label: "Decades",
            for decade in DECADES.iter() {
                Button {
                    key: "{decade.code}",
                    variant: ButtonVariant::Secondary,
                    active: filters.has_decade(decade.code),
                    onclick: move |_| on_toggle.call(decade.code.to_string()),
                    "{decade.label}"
                }
            }
        }
    }
}
