//! Light/dark theme state and its persistence

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Key-value storage that survives a reload
pub trait ThemePersistence {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Application-wide theme, owned by the app root and handed down explicitly
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    /// Read the persisted theme, falling back to the OS preference.
    pub fn init(store: &impl ThemePersistence, prefers_dark: bool) -> Self {
        let fallback = if prefers_dark { Theme::Dark } else { Theme::Light };
        let theme = match store.read(THEME_KEY).map(|v| v.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                warn!("Ignoring stored theme: {e}");
                fallback
            }
            None => fallback,
        };
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Switch theme and persist it before returning.
    pub fn set(&mut self, theme: Theme, store: &impl ThemePersistence) {
        self.theme = theme;
        store.write(THEME_KEY, theme.as_str());
        debug!("Theme set to {theme}");
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self, store: &impl ThemePersistence) -> Theme {
        let next = self.theme.toggled();
        self.set(next, store);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl ThemePersistence for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn stored_theme_wins_over_os_preference() {
        let store = MemoryStore::default();
        store.write(THEME_KEY, "light");
        assert_eq!(ThemeState::init(&store, true).theme(), Theme::Light);
    }

    #[test]
    fn os_preference_used_when_nothing_stored() {
        let store = MemoryStore::default();
        assert_eq!(ThemeState::init(&store, true).theme(), Theme::Dark);
        assert_eq!(ThemeState::init(&store, false).theme(), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back() {
        let store = MemoryStore::default();
        store.write(THEME_KEY, "sepia");
        assert_eq!(ThemeState::init(&store, true).theme(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_immediately() {
        let store = MemoryStore::default();
        let mut state = ThemeState::init(&store, false);
        assert_eq!(state.toggle(&store), Theme::Dark);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(state.toggle(&store), Theme::Light);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn theme_parses_and_displays() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(
            "blue".parse::<Theme>(),
            Err(ParseThemeError("blue".to_string()))
        );
    }
}
