use dioxus::prelude::*;

use super::Icon;

struct FloatingIcon {
    icon: Icon,
    top: u8,
    left: u8,
    size: &'static str,
    tone: &'static str,
    motion: &'static str,
}

// Three rows of four icons scattered over the diagonal band
const FLOATING_ICONS: [FloatingIcon; 12] = [
    FloatingIcon { icon: Icon::BicepsFlexed, top: 15, left: 10, size: "icon-md", tone: "tone-strong", motion: "float-slow" },
    FloatingIcon { icon: Icon::Dumbbell, top: 25, left: 35, size: "icon-lg", tone: "tone-medium", motion: "float" },
    FloatingIcon { icon: Icon::Scale, top: 10, left: 60, size: "icon-sm", tone: "tone-soft", motion: "float-delay" },
    FloatingIcon { icon: Icon::ClipboardList, top: 20, left: 85, size: "icon-xl", tone: "tone-strong", motion: "float-reverse" },
    FloatingIcon { icon: Icon::HeartPulse, top: 45, left: 15, size: "icon-md", tone: "tone-medium", motion: "float" },
    FloatingIcon { icon: Icon::Activity, top: 55, left: 40, size: "icon-xl", tone: "tone-soft", motion: "float-slow" },
    FloatingIcon { icon: Icon::BicepsFlexed, top: 50, left: 65, size: "icon-sm", tone: "tone-strong", motion: "float-delay" },
    FloatingIcon { icon: Icon::Scale, top: 40, left: 90, size: "icon-lg", tone: "tone-medium", motion: "float-reverse" },
    FloatingIcon { icon: Icon::Dumbbell, top: 75, left: 5, size: "icon-lg", tone: "tone-soft", motion: "float-slow" },
    FloatingIcon { icon: Icon::ClipboardList, top: 85, left: 30, size: "icon-md", tone: "tone-strong", motion: "float" },
    FloatingIcon { icon: Icon::HeartPulse, top: 70, left: 55, size: "icon-xl", tone: "tone-medium", motion: "float-delay" },
    FloatingIcon { icon: Icon::Activity, top: 80, left: 80, size: "icon-sm", tone: "tone-soft", motion: "float-reverse" },
];

/// Diagonal green band with slowly floating fitness icons
#[component]
pub fn FloatingBackground() -> Element {
    rsx! {
        div {
            class: "background",
            "aria-hidden": "true",
            div { class: "background-band" }
            div {
                class: "background-icons",
                for (index, item) in FLOATING_ICONS.iter().enumerate() {
                    span {
                        key: "{index}",
                        class: "floating-icon {item.size} {item.tone} {item.motion}",
                        style: "top: {item.top}%; left: {item.left}%;",
                        "{item.icon.glyph()}"
                    }
                }
            }
        }
    }
}

/// Soft circles drifting around the form
#[component]
pub fn FloatingCircles() -> Element {
    rsx! {
        div { class: "floating-circle circle-lg float-slow", style: "top: 10%; right: 5%;" }
        div { class: "floating-circle circle-md float-delay", style: "bottom: 15%; left: 8%;" }
        div { class: "floating-circle circle-sm float-reverse", style: "top: 35%; right: 12%;" }
    }
}
