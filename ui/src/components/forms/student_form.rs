use chrono::NaiveDate;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::{GenderRadioGroup, GoalCardGroup, MuscleGroupSelect, WeeklyWorkoutsSlider};
use crate::components::calendar::DatePicker;
use crate::components::display::{use_toasts, Icon, LoadingIndicator};
use crate::components::inputs::{FormItem, ValidatedInput};
use crate::features::registration::{
    get_field_validation_message, simulate_save, FocusGroup, FormField, Gender, Goal,
    RegistrationAction, RegistrationSchema, RegistrationState,
};
use crate::services::config::get_global_config;
use crate::utils::style::input_class;

// Import console macros
use crate::{console_debug, console_info, console_log};

const WEEKLY_WORKOUTS_DESCRIPTION: &str = "Selecione entre 1 e 6 treinos por semana.";

#[component]
pub fn StudentForm() -> Element {
    let config = use_hook(get_global_config);
    let mut state = use_signal(RegistrationState::default);
    let toasts = use_toasts();

    let schema = RegistrationSchema::from_calendar(&config.calendar);
    let save_delay_ms = config.submission.save_delay_ms;

    // Dispatch function for actions - in-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(registration) = state.with_mut(|s| s.submit(&schema)) else {
            console_debug!(
                "[Form] Submission blocked: {} invalid field(s)",
                state.read().errors.len()
            );
            return;
        };

        console_info!("[Form] Saving registration for {}", registration.name);
        spawn(async move {
            let outcome = simulate_save(registration, TimeoutFuture::new(save_delay_ms)).await;
            console_log!("{}", outcome.summary_json());
            toasts.show(outcome.toast);
            dispatch.call(RegistrationAction::SaveCompleted);
        });
    };

    let current = state();
    let saving = current.is_saving();
    let error = |field: FormField| get_field_validation_message(&current.errors, field);

    rsx! {
        div {
            class: "card form-card",

            div {
                class: "card-header",
                div { class: "card-header-glow" }
                h2 {
                    class: "card-title",
                    span {
                        class: "card-title-icon",
                        "{Icon::User.glyph()}"
                    }
                    "Cadastro de Aluno"
                }
                p {
                    class: "card-description",
                    "Preencha os dados do aluno para criar um novo cadastro."
                }
            }

            div {
                class: "card-content",
                form {
                    class: "student-form",
                    onsubmit: on_submit,

                    FormItem {
                        field: FormField::Name,
                        error: error(FormField::Name),
                        description: None,
                        ValidatedInput {
                            id: FormField::Name.key().to_string(),
                            value: current.draft.name.clone(),
                            placeholder: "Nome completo do aluno".to_string(),
                            input_class: input_class(current.error_for(FormField::Name).is_some()).to_string(),
                            disabled: saving,
                            on_change: move |name: String| dispatch.call(RegistrationAction::SetName(name))
                        }
                    }

                    FormItem {
                        field: FormField::BirthDate,
                        error: error(FormField::BirthDate),
                        description: None,
                        DatePicker {
                            selected: current.draft.birth_date,
                            disabled: saving,
                            has_error: current.error_for(FormField::BirthDate).is_some(),
                            on_change: move |date: NaiveDate| dispatch.call(RegistrationAction::SetBirthDate(date))
                        }
                    }

                    FormItem {
                        field: FormField::Gender,
                        error: error(FormField::Gender),
                        description: None,
                        GenderRadioGroup {
                            selected: current.draft.gender,
                            disabled: saving,
                            on_change: move |gender: Gender| dispatch.call(RegistrationAction::SetGender(gender))
                        }
                    }

                    FormItem {
                        field: FormField::WeeklyWorkouts,
                        error: error(FormField::WeeklyWorkouts),
                        description: Some(WEEKLY_WORKOUTS_DESCRIPTION),
                        WeeklyWorkoutsSlider {
                            value: current.draft.weekly_workouts,
                            disabled: saving,
                            on_change: move |count: u8| dispatch.call(RegistrationAction::SetWeeklyWorkouts(count as i64))
                        }
                    }

                    FormItem {
                        field: FormField::FocusGroup,
                        error: error(FormField::FocusGroup),
                        description: None,
                        MuscleGroupSelect {
                            selected: current.draft.focus_group,
                            disabled: saving,
                            has_error: current.error_for(FormField::FocusGroup).is_some(),
                            on_change: move |group: FocusGroup| dispatch.call(RegistrationAction::SetFocusGroup(group))
                        }
                    }

                    FormItem {
                        field: FormField::Goal,
                        error: error(FormField::Goal),
                        description: None,
                        GoalCardGroup {
                            selected: current.draft.goal,
                            disabled: saving,
                            on_change: move |goal: Goal| dispatch.call(RegistrationAction::SetGoal(goal))
                        }
                    }

                    div {
                        class: "button-section",
                        button {
                            r#type: "button",
                            class: "button button-outline",
                            disabled: saving,
                            onclick: move |_| dispatch.call(RegistrationAction::Reset),
                            "Limpar"
                        }
                        button {
                            r#type: "submit",
                            class: "button button-primary",
                            disabled: saving,
                            if saving {
                                LoadingIndicator { message: "Salvando...".to_string() }
                            } else {
                                span {
                                    class: "button-content",
                                    span { "{Icon::Save.glyph()}" }
                                    "Salvar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
