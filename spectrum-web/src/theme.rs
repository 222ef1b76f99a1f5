//! App-wide theme context

use crate::storage::{self, LocalStorage};
use dioxus::prelude::*;
use spectrum_common::ThemeState;

/// Create the theme state at the app root and keep `<body>` in sync with it.
pub fn use_theme_provider() -> Signal<ThemeState> {
    let theme = use_context_provider(|| {
        Signal::new(ThemeState::init(&LocalStorage, storage::prefers_dark()))
    });

    use_effect(move || {
        storage::apply_body_class(theme.read().theme());
    });

    theme
}

/// Theme state provided by `use_theme_provider`. Panics outside the app root.
pub fn use_theme() -> Signal<ThemeState> {
    use_context()
}
