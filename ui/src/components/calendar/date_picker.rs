use chrono::NaiveDate;
use dioxus::prelude::*;

use super::Calendar;
use crate::components::display::Icon;
use crate::features::calendar::{format_date_br, DateBounds, DatePickerAction, DatePickerState};
use crate::services::config::get_global_config;
use crate::utils::style::date_trigger_class;

const PLACEHOLDER: &str = "Selecione uma data";

#[derive(Props, PartialEq, Clone)]
pub struct DatePickerProps {
    #[props(!optional)]
    pub selected: Option<NaiveDate>,
    pub disabled: bool,
    pub has_error: bool,
    pub on_change: EventHandler<NaiveDate>,
}

/// Trigger button showing the chosen date plus a popover calendar.
/// The popover closes when an in-range date is picked, on Escape, on a click
/// outside it, and whenever the picker becomes disabled.
#[component]
pub fn DatePicker(props: DatePickerProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;
    let mut picker = use_signal(|| {
        DatePickerState::new(DateBounds::from_config(&get_global_config().calendar))
    });

    // A disabled picker must not reopen by itself once re-enabled
    use_effect(use_reactive((&props.disabled,), move |(disabled,)| {
        if disabled && picker.peek().is_open() {
            picker.with_mut(|p| p.reduce_in_place(DatePickerAction::Close));
        }
    }));

    let is_open = picker.read().is_open() && !props.disabled;
    let trigger_text = selected
        .map(format_date_br)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    rsx! {
        div {
            class: "date-picker",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && picker.peek().is_open() {
                    picker.with_mut(|p| p.reduce_in_place(DatePickerAction::Close));
                }
            },
            button {
                id: "birthDate",
                r#type: "button",
                class: date_trigger_class(selected.is_some(), props.has_error),
                disabled: props.disabled,
                "aria-haspopup": "dialog",
                "aria-expanded": "{is_open}",
                onclick: move |_| {
                    picker.with_mut(|p| {
                        if p.is_open() {
                            p.reduce_in_place(DatePickerAction::Close);
                        } else {
                            p.reduce_in_place(DatePickerAction::Open { selected });
                        }
                    });
                },
                span { "{trigger_text}" }
                span {
                    class: "date-trigger-icon",
                    "{Icon::Calendar.glyph()}"
                }
            }

            if is_open {
                div {
                    class: "popover-backdrop",
                    "aria-hidden": "true",
                    onclick: move |_| picker.with_mut(|p| p.reduce_in_place(DatePickerAction::Close)),
                }
                div {
                    class: "popover",
                    role: "dialog",
                    Calendar {
                        picker,
                        selected,
                        on_select: move |date: NaiveDate| {
                            if let Some(picked) = picker.with_mut(|p| p.pick(date)) {
                                on_change.call(picked);
                            }
                        }
                    }
                }
            }
        }
    }
}
