//! Input components for form fields, labels and validation messages

use dioxus::prelude::*;

use crate::features::registration::FormField;

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            class: "{props.input_class}",
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldMessageProps {
    #[props(!optional)]
    pub error: Option<String>,
}

#[component]
pub fn FieldMessage(props: FieldMessageProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            p {
                class: "field-message",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

/// Label, control, optional description and error message for one field
#[derive(Props, PartialEq, Clone)]
pub struct FormItemProps {
    pub field: FormField,
    #[props(!optional)]
    pub error: Option<String>,
    #[props(!optional)]
    pub description: Option<&'static str>,
    pub children: Element,
}

#[component]
pub fn FormItem(props: FormItemProps) -> Element {
    let label_class = if props.error.is_some() {
        "form-label form-label-invalid"
    } else {
        "form-label"
    };

    rsx! {
        div {
            class: "form-item",
            label {
                class: "{label_class}",
                r#for: "{props.field.key()}",
                "{props.field.label()}"
            }
            {props.children}
            if let Some(description) = props.description {
                p {
                    class: "form-description",
                    "{description}"
                }
            }
            FieldMessage { error: props.error.clone() }
        }
    }
}
