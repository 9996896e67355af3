use dioxus::prelude::*;

use crate::features::registration::{
    clamp_weekly_workouts, MAX_WEEKLY_WORKOUTS, MIN_WEEKLY_WORKOUTS,
};
use crate::utils::style::workout_tick_class;

#[derive(Props, PartialEq, Clone)]
pub struct WeeklyWorkoutsSliderProps {
    pub value: u8,
    pub disabled: bool,
    pub on_change: EventHandler<u8>,
}

#[component]
pub fn WeeklyWorkoutsSlider(props: WeeklyWorkoutsSliderProps) -> Element {
    let value = props.value;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "slider-container",
            input {
                id: "weeklyWorkouts",
                class: "slider",
                r#type: "range",
                min: "{MIN_WEEKLY_WORKOUTS}",
                max: "{MAX_WEEKLY_WORKOUTS}",
                step: "1",
                value: "{value}",
                disabled: props.disabled,
                oninput: move |evt| {
                    // Range inputs report strings; anything unparsable falls back to the minimum
                    let raw = evt.value().trim().parse::<i64>().unwrap_or(MIN_WEEKLY_WORKOUTS as i64);
                    on_change.call(clamp_weekly_workouts(raw));
                }
            }
            div {
                class: "slider-ticks",
                for tick in MIN_WEEKLY_WORKOUTS..=MAX_WEEKLY_WORKOUTS {
                    span {
                        key: "{tick}",
                        class: workout_tick_class(tick == value),
                        "{tick}"
                    }
                }
            }
        }
    }
}
