//! Genre toggle buttons scattered around the plot

use crate::components::button::ChromelessButton;
use dioxus::prelude::*;
use spectrum_common::{CategoryButton, FilterSet};

/// Placed genre buttons, absolutely positioned by percentage
#[component]
pub fn GenreRing(
    buttons: Vec<CategoryButton>,
    /// Active filters; a button is highlighted when its genre is in them
    filters: FilterSet,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        for button in buttons.iter() {
            GenreButton {
                key: "{button.name}",
                button: button.clone(),
                is_active: filters.has_genre(&button.name),
                on_toggle,
            }
        }
    }
}

#[component]
fn GenreButton(
    button: CategoryButton,
    is_active: bool,
    on_toggle: EventHandler<String>,
) -> Element {
    let class = if is_active {
        "genre-button active-genre"
    } else {
        "genre-button"
    };
    let style = format!(
        "background-color: {}; top: {}%; left: {}%;",
        button.color, button.position.y, button.position.x,
    );
    let name = button.name.clone();

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            style: Some(style),
            aria_pressed: Some(is_active),
            onclick: move |_| on_toggle.call(name.clone()),
            "{button.name}"
        }
    }
}
