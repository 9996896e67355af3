use dioxus::prelude::*;

use crate::components::layout::use_theme;
use crate::features::theme::{ThemeAction, ThemeMode};

/// Header button opening the light/dark/system menu
#[component]
pub fn ModeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();

    rsx! {
        div {
            class: "mode-toggle",
            button {
                r#type: "button",
                class: "mode-toggle-button",
                "aria-label": "Alternar tema",
                "aria-expanded": "{current.menu_open}",
                onclick: move |_| {
                    let open = theme.read().menu_open;
                    theme.with_mut(|t| t.reduce_in_place(ThemeAction::SetMenuOpen(!open)));
                },
                "{current.appearance().icon()}"
            }
            if current.menu_open {
                ul {
                    class: "mode-toggle-menu",
                    role: "menu",
                    for mode in ThemeMode::ALL {
                        li {
                            key: "{mode.label()}",
                            role: "menuitemradio",
                            class: if mode == current.mode { "mode-toggle-item mode-toggle-item-active" } else { "mode-toggle-item" },
                            "aria-checked": "{mode == current.mode}",
                            onclick: move |_| theme.with_mut(|t| t.reduce_in_place(ThemeAction::SetMode(mode))),
                            "{mode.label()}"
                        }
                    }
                }
            }
        }
    }
}
