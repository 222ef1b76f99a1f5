//! Browser storage and document glue for the theme

use spectrum_common::{Theme, ThemePersistence};
use tracing::warn;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `ThemePersistence` backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl ThemePersistence for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!("Failed to write {key} to localStorage");
        }
    }
}

/// Whether the OS asks for a dark colour scheme
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Replace the `<body>` class with the theme name
pub fn apply_body_class(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        warn!("No document body to apply theme to");
        return;
    };
    body.set_class_name(theme.as_str());
}
