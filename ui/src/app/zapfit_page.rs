use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::{use_toast_provider, FloatingBackground, FloatingCircles, Toaster};
use crate::components::forms::StudentForm;
use crate::components::layout::{PageHeader, ThemeProvider};
use crate::services::config::get_global_config;
use crate::utils::platform::set_document_language;

const ZAPFIT_CSS: Asset = asset!("/assets/styling/zapfit.css");

/// Page content; lives under `ThemeProvider` so the header toggle can reach the theme
#[component]
fn RegistrationPage() -> Element {
    let toast_config = use_hook(|| get_global_config().toast);
    use_toast_provider(&toast_config);

    rsx! {
        div {
            class: "page",

            FloatingBackground {}

            div {
                class: "page-container",
                PageHeader {}

                main {
                    // Floating, glowing wrapper around the form
                    div {
                        class: "form-float",
                        StudentForm {}
                    }
                    FloatingCircles {}
                }
            }
        }

        Toaster {}
    }
}

#[component]
pub fn ZapFitApp() -> Element {
    use_effect(move || {
        set_document_language("pt-BR");
        console_info!("[ZapFit] Registration page mounted");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ZAPFIT_CSS }

        ThemeProvider {
            RegistrationPage {}
        }
    }
}
