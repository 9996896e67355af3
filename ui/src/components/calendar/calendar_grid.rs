use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::components::display::Icon;
use crate::features::calendar::{
    month_name, DatePickerAction, DatePickerState, MONTH_NAMES_PT_BR, WEEKDAY_SHORT_PT_BR,
};
use crate::utils::style::day_class;

#[derive(Props, PartialEq, Clone)]
pub struct CalendarProps {
    pub picker: Signal<DatePickerState>,
    #[props(!optional)]
    pub selected: Option<NaiveDate>,
    pub on_select: EventHandler<NaiveDate>,
}

/// Month grid with month/year dropdowns replacing the caption label
#[component]
pub fn Calendar(props: CalendarProps) -> Element {
    let mut picker = props.picker;
    let on_select = props.on_select;

    let current = picker();
    let visible = current.visible_month;
    let years: Vec<i32> = current.bounds.years().collect();
    let Some(grid) = current.grid(props.selected) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "calendar",
            div {
                class: "calendar-caption",
                button {
                    r#type: "button",
                    class: "calendar-nav calendar-nav-previous",
                    "aria-label": "Mês anterior",
                    disabled: !current.can_go_previous(),
                    onclick: move |_| picker.with_mut(|p| p.reduce_in_place(DatePickerAction::PreviousMonth)),
                    "{Icon::ChevronLeft.glyph()}"
                }
                div {
                    class: "calendar-dropdowns",
                    select {
                        class: "calendar-select calendar-select-month",
                        "aria-label": "Mês",
                        value: "{visible.month()}",
                        onchange: move |evt| {
                            if let Ok(month) = evt.value().parse::<u32>() {
                                picker.with_mut(|p| p.reduce_in_place(DatePickerAction::JumpToMonth(month)));
                            }
                        },
                        for (index, name) in MONTH_NAMES_PT_BR.iter().enumerate() {
                            option {
                                key: "{index}",
                                value: "{index + 1}",
                                selected: visible.month() as usize == index + 1,
                                "{name}"
                            }
                        }
                    }
                    select {
                        class: "calendar-select calendar-select-year",
                        "aria-label": "Ano",
                        value: "{visible.year()}",
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse::<i32>() {
                                picker.with_mut(|p| p.reduce_in_place(DatePickerAction::JumpToYear(year)));
                            }
                        },
                        for year in years {
                            option {
                                key: "{year}",
                                value: "{year}",
                                selected: visible.year() == year,
                                "{year}"
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "calendar-nav calendar-nav-next",
                    "aria-label": "Próximo mês",
                    disabled: !current.can_go_next(),
                    onclick: move |_| picker.with_mut(|p| p.reduce_in_place(DatePickerAction::NextMonth)),
                    "{Icon::ChevronRight.glyph()}"
                }
            }

            table {
                class: "calendar-table",
                role: "grid",
                "aria-label": "{month_name(visible.month())} {visible.year()}",
                thead {
                    tr {
                        class: "calendar-head-row",
                        for weekday in WEEKDAY_SHORT_PT_BR {
                            th {
                                key: "{weekday}",
                                class: "calendar-head-cell",
                                scope: "col",
                                "{weekday}"
                            }
                        }
                    }
                }
                tbody {
                    for (row, week) in grid.weeks.into_iter().enumerate() {
                        tr {
                            key: "{row}",
                            class: "calendar-row",
                            for cell in week {
                                td {
                                    key: "{cell.date}",
                                    class: "calendar-cell",
                                    button {
                                        r#type: "button",
                                        class: day_class(cell.outside, cell.disabled, cell.selected),
                                        disabled: cell.disabled,
                                        "aria-selected": "{cell.selected}",
                                        onclick: move |_| on_select.call(cell.date),
                                        "{cell.date.day()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
