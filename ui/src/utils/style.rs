//! Conditional class helpers for the registration form.
//!
//! Selection-dependent styling lives here so components only pass booleans.

/// Join the class names whose condition holds
pub fn class_names<'a>(parts: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    parts
        .into_iter()
        .filter(|(class, enabled)| *enabled && !class.is_empty())
        .map(|(class, _)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn date_trigger_class(has_value: bool, has_error: bool) -> String {
    class_names([
        ("date-trigger", true),
        ("date-trigger-placeholder", !has_value),
        ("input-invalid", has_error),
    ])
}

pub fn gender_radio_class(selected: bool) -> &'static str {
    if selected {
        "radio-item radio-item-selected"
    } else {
        "radio-item"
    }
}

pub fn workout_tick_class(selected: bool) -> &'static str {
    if selected {
        "workout-tick workout-tick-selected"
    } else {
        "workout-tick"
    }
}

pub fn select_trigger_class(has_value: bool, has_error: bool) -> String {
    class_names([
        ("select-trigger", true),
        ("select-trigger-filled", has_value),
        ("input-invalid", has_error),
    ])
}

/// Goal card border: primary colour once selected
pub fn goal_card_class(selected: bool) -> &'static str {
    if selected {
        "goal-card goal-card-selected"
    } else {
        "goal-card"
    }
}

/// Goal icon colour: green once selected
pub fn goal_icon_class(selected: bool) -> &'static str {
    if selected {
        "goal-icon goal-icon-selected"
    } else {
        "goal-icon"
    }
}

pub fn goal_label_class(selected: bool) -> &'static str {
    if selected {
        "goal-label goal-label-selected"
    } else {
        "goal-label"
    }
}

pub fn day_class(outside: bool, disabled: bool, selected: bool) -> String {
    class_names([
        ("calendar-day", true),
        ("calendar-day-outside", outside),
        ("calendar-day-disabled", disabled),
        ("calendar-day-selected", selected),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_disabled_and_empty() {
        assert_eq!(class_names([("a", true), ("b", false), ("", true), ("c", true)]), "a c");
        assert_eq!(class_names([("a", false)]), "");
    }

    #[test]
    fn test_goal_styles_follow_selection() {
        assert_eq!(goal_card_class(true), "goal-card goal-card-selected");
        assert_eq!(goal_card_class(false), "goal-card");
        assert_eq!(goal_icon_class(true), "goal-icon goal-icon-selected");
        assert_eq!(goal_icon_class(false), "goal-icon");
    }

    #[test]
    fn test_trigger_classes() {
        assert_eq!(
            date_trigger_class(false, true),
            "date-trigger date-trigger-placeholder input-invalid"
        );
        assert_eq!(date_trigger_class(true, false), "date-trigger");
        assert_eq!(select_trigger_class(true, false), "select-trigger select-trigger-filled");
    }

    #[test]
    fn test_day_class() {
        assert_eq!(day_class(false, false, true), "calendar-day calendar-day-selected");
        assert_eq!(
            day_class(true, true, false),
            "calendar-day calendar-day-outside calendar-day-disabled"
        );
    }
}
