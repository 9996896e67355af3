use dioxus::prelude::*;

use crate::components::display::{Icon, ModeToggle};

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header {
            class: "page-header",
            div {
                class: "page-brand",
                h1 {
                    class: "page-title",
                    span {
                        class: "page-title-icon",
                        "{Icon::MessageSquare.glyph()}"
                    }
                    "ZapFit"
                }
                p {
                    class: "page-subtitle",
                    "Seu agente de treino no Zap"
                }
            }
            div {
                ModeToggle {}
            }
        }
    }
}
