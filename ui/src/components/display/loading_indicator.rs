use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Inline spinner followed by a short status message
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            span {
                class: "spinner",
                "aria-hidden": "true",
                "◌"
            }
            "{props.message}"
        }
    }
}
