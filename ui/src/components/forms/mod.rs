pub mod gender_radio_group;
pub mod goal_card_group;
pub mod muscle_group_select;
pub mod student_form;
pub mod weekly_workouts_slider;

pub use gender_radio_group::*;
pub use goal_card_group::*;
pub use muscle_group_select::*;
pub use student_form::*;
pub use weekly_workouts_slider::*;
