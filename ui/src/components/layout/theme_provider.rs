use dioxus::prelude::*;

use crate::features::theme::{ThemeState, ThemeStorage};
use crate::services::config::get_global_config;
use crate::utils::platform::{apply_appearance, system_prefers_dark};

/// Theme state shared with every descendant (the mode toggle reads it)
pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

#[derive(Props, PartialEq, Clone)]
pub struct ThemeProviderProps {
    pub children: Element,
}

/// Restores the stored theme mode, applies the resolved appearance to the
/// document and persists every change.
#[component]
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let theme_config = use_hook(|| get_global_config().theme);
    let storage = use_hook(|| ThemeStorage::new(theme_config.storage_key.clone()));

    let initial_storage = storage.clone();
    let default_mode = theme_config.default_mode;
    let theme = use_context_provider(move || {
        let mode = initial_storage.load_or(default_mode);
        Signal::new(ThemeState::new(mode, system_prefers_dark()))
    });

    use_effect(move || {
        apply_appearance(theme.read().appearance());
    });

    use_effect(move || {
        storage.save(theme.read().mode);
    });

    let appearance = theme.read().appearance();

    rsx! {
        div {
            class: "theme-root {appearance.css_class()}",
            {props.children}
        }
    }
}
