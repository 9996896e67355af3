use dioxus::prelude::*;

use crate::features::registration::Gender;
use crate::utils::style::gender_radio_class;

#[derive(Props, PartialEq, Clone)]
pub struct GenderRadioGroupProps {
    #[props(!optional)]
    pub selected: Option<Gender>,
    pub disabled: bool,
    pub on_change: EventHandler<Gender>,
}

#[component]
pub fn GenderRadioGroup(props: GenderRadioGroupProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        div {
            id: "gender",
            class: "radio-group radio-group-inline",
            role: "radiogroup",
            for gender in Gender::ALL {
                label {
                    key: "{gender.code()}",
                    class: "radio-option",
                    input {
                        r#type: "radio",
                        name: "gender",
                        value: "{gender.code()}",
                        class: gender_radio_class(selected == Some(gender)),
                        checked: selected == Some(gender),
                        disabled: props.disabled,
                        onchange: move |_| on_change.call(gender)
                    }
                    span {
                        class: "radio-label",
                        "{gender.label()}"
                    }
                }
            }
        }
    }
}
