use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::toast::{ToastAction, ToastSpec, ToastState};
use crate::services::config::ToastConfig;

/// Handle to the page-wide toast queue, shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    state: Signal<ToastState>,
    duration_ms: u32,
}

impl ToastHandle {
    /// Show a toast and schedule its dismissal
    pub fn show(&self, spec: ToastSpec) {
        let mut state = self.state;
        let duration_ms = self.duration_ms;
        let id = state.with_mut(|s| s.push(spec));

        spawn(async move {
            TimeoutFuture::new(duration_ms).await;
            state.with_mut(|s| s.reduce_in_place(ToastAction::Dismiss(id)));
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut state = self.state;
        state.with_mut(|s| s.reduce_in_place(ToastAction::Dismiss(id)));
    }

    pub fn state(&self) -> Signal<ToastState> {
        self.state
    }
}

/// Create the toast queue and provide it to every descendant
pub fn use_toast_provider(config: &ToastConfig) -> ToastHandle {
    let limit = config.limit;
    let duration_ms = config.duration_ms;
    let state = use_signal(move || ToastState::new(limit));
    use_context_provider(move || ToastHandle { state, duration_ms })
}

pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let visible = toasts.state().read().visible().to_vec();

    rsx! {
        ol {
            class: "toast-viewport",
            for toast in visible {
                li {
                    key: "{toast.id}",
                    class: toast.spec.variant.css_class(),
                    role: "status",
                    div {
                        class: "toast-body",
                        div {
                            class: "toast-title",
                            "{toast.spec.title}"
                        }
                        if let Some(description) = &toast.spec.description {
                            div {
                                class: "toast-description",
                                "{description}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "toast-close",
                        "aria-label": "Fechar",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
