use dioxus::prelude::*;

use crate::components::display::Icon;
use crate::features::registration::Goal;
use crate::utils::style::{goal_card_class, goal_icon_class, goal_label_class};

fn goal_icon(goal: Goal) -> Icon {
    match goal {
        Goal::PerderPeso => Icon::Scale,
        Goal::GanharMassa => Icon::BicepsFlexed,
        Goal::GanharForca => Icon::Dumbbell,
        Goal::Manter => Icon::MoveHorizontal,
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct GoalCardGroupProps {
    #[props(!optional)]
    pub selected: Option<Goal>,
    pub disabled: bool,
    pub on_change: EventHandler<Goal>,
}

/// 2x2 grid of selectable goal cards backed by hidden radio inputs
#[component]
pub fn GoalCardGroup(props: GoalCardGroupProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        div {
            id: "goal",
            class: "goal-grid",
            role: "radiogroup",
            for goal in Goal::ALL {
                label {
                    key: "{goal.code()}",
                    r#for: "{goal.code()}",
                    class: goal_card_class(selected == Some(goal)),
                    input {
                        id: "{goal.code()}",
                        r#type: "radio",
                        name: "goal",
                        value: "{goal.code()}",
                        class: "sr-only",
                        checked: selected == Some(goal),
                        disabled: props.disabled,
                        onchange: move |_| on_change.call(goal)
                    }
                    div {
                        class: "goal-icon-badge",
                        span {
                            class: goal_icon_class(selected == Some(goal)),
                            "{goal_icon(goal).glyph()}"
                        }
                    }
                    p {
                        class: goal_label_class(selected == Some(goal)),
                        "{goal.label()}"
                    }
                }
            }
        }
    }
}
