use dioxus::prelude::*;

use crate::features::registration::FocusGroup;
use crate::utils::style::select_trigger_class;

const PLACEHOLDER: &str = "Selecione um grupo muscular";

#[derive(Props, PartialEq, Clone)]
pub struct MuscleGroupSelectProps {
    #[props(!optional)]
    pub selected: Option<FocusGroup>,
    pub disabled: bool,
    pub has_error: bool,
    pub on_change: EventHandler<FocusGroup>,
}

#[component]
pub fn MuscleGroupSelect(props: MuscleGroupSelectProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;
    let selected_code = selected.map(|group| group.code()).unwrap_or_default();

    rsx! {
        select {
            id: "focusGroup",
            class: select_trigger_class(selected.is_some(), props.has_error),
            value: "{selected_code}",
            disabled: props.disabled,
            onchange: move |evt| {
                if let Some(group) = FocusGroup::from_code(&evt.value()) {
                    on_change.call(group);
                }
            },
            // Placeholder stays visible until a group is picked
            option {
                value: "",
                disabled: true,
                hidden: true,
                selected: selected.is_none(),
                "{PLACEHOLDER}"
            }
            for group in FocusGroup::ALL {
                option {
                    key: "{group.code()}",
                    value: "{group.code()}",
                    selected: selected == Some(group),
                    "{group.label()}"
                }
            }
        }
    }
}
