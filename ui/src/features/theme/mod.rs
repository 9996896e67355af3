//! Light/dark theme state shared by the page shell.

pub mod storage;

use serde::{Deserialize, Serialize};

pub use storage::ThemeStorage;

/// Mode chosen by the user; `System` follows `prefers-color-scheme`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Claro",
            ThemeMode::Dark => "Escuro",
            ThemeMode::System => "Sistema",
        }
    }

    pub fn resolve(&self, system_prefers_dark: bool) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System if system_prefers_dark => Appearance::Dark,
            ThemeMode::System => Appearance::Light,
        }
    }
}

/// What is actually rendered
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn css_class(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Appearance::Light => "☀️",
            Appearance::Dark => "🌙",
        }
    }
}

#[derive(Clone, Debug)]
pub enum ThemeAction {
    SetMode(ThemeMode),
    SetMenuOpen(bool),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub system_prefers_dark: bool,
    pub menu_open: bool,
}

impl ThemeState {
    pub fn new(mode: ThemeMode, system_prefers_dark: bool) -> Self {
        Self {
            mode,
            system_prefers_dark,
            menu_open: false,
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.mode.resolve(self.system_prefers_dark)
    }

    pub fn reduce_in_place(&mut self, action: ThemeAction) {
        match action {
            ThemeAction::SetMode(mode) => {
                self.mode = mode;
                self.menu_open = false;
            }
            ThemeAction::SetMenuOpen(open) => {
                self.menu_open = open;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_follows_preference() {
        assert_eq!(ThemeMode::System.resolve(true), Appearance::Dark);
        assert_eq!(ThemeMode::System.resolve(false), Appearance::Light);
        assert_eq!(ThemeMode::Light.resolve(true), Appearance::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), Appearance::Dark);
    }

    #[test]
    fn test_system_mode_uses_preference_read_at_startup() {
        let mut state = ThemeState::new(ThemeMode::System, true);
        assert_eq!(state.appearance(), Appearance::Dark);

        state.reduce_in_place(ThemeAction::SetMode(ThemeMode::Light));
        assert_eq!(state.appearance(), Appearance::Light);

        state.reduce_in_place(ThemeAction::SetMode(ThemeMode::System));
        assert!(state.system_prefers_dark);
        assert_eq!(state.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_choosing_a_mode_closes_the_menu() {
        let mut state = ThemeState::default();
        state.reduce_in_place(ThemeAction::SetMenuOpen(true));
        state.reduce_in_place(ThemeAction::SetMode(ThemeMode::Dark));
        assert!(!state.menu_open);
        assert_eq!(state.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(mode, ThemeMode::System);
    }
}
