//! Fallback screen for errors raised while rendering

use dioxus::prelude::*;
use tracing::error;

/// Catches render errors from its children and shows a retry screen
///
/// "Try Again" clears the captured error so the children render again.
#[component]
pub fn RenderBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let message = errors
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                error!("Render error caught by boundary: {message}");
                rsx! {
                    div { class: "error-container", role: "alert",
                        h1 { "Something went wrong" }
                        p { class: "error-message", "{message}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| errors.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
