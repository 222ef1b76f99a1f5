//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for the genre ring.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            style: style.as_deref(),
            r#type: "button",
            disabled,
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|pressed| if pressed { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background - for the main action on a page
    Primary,
    /// Muted background - for secondary actions
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

/// Button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] active: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let active_class = if active { " active" } else { "" };
    let computed_class = match &class {
        Some(extra) => format!("btn {}{active_class} {extra}", variant.class()),
        None => format!("btn {}{active_class}", variant.class()),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            aria_pressed: if active { Some(true) } else { None },
            onclick,
            {children}
        }
    }
}
