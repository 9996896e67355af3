// Core types for student registration - no dioxus imports needed here
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form_validation::{RegistrationSchema, ValidationErrors};
use crate::services::errors::FieldError;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_WEEKLY_WORKOUTS: u8 = 1;
pub const MAX_WEEKLY_WORKOUTS: u8 = 6;
pub const DEFAULT_WEEKLY_WORKOUTS: u8 = 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculino,
    Feminino,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Masculino, Gender::Feminino];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Feminino => "feminino",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.code() == code)
    }
}

/// Muscle group a training plan emphasizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusGroup {
    Peito,
    Costas,
    Pernas,
    Ombros,
    Bracos,
    Abdomen,
    Gluteos,
    Completo,
}

impl FocusGroup {
    pub const ALL: [FocusGroup; 8] = [
        FocusGroup::Peito,
        FocusGroup::Costas,
        FocusGroup::Pernas,
        FocusGroup::Ombros,
        FocusGroup::Bracos,
        FocusGroup::Abdomen,
        FocusGroup::Gluteos,
        FocusGroup::Completo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FocusGroup::Peito => "peito",
            FocusGroup::Costas => "costas",
            FocusGroup::Pernas => "pernas",
            FocusGroup::Ombros => "ombros",
            FocusGroup::Bracos => "bracos",
            FocusGroup::Abdomen => "abdomen",
            FocusGroup::Gluteos => "gluteos",
            FocusGroup::Completo => "completo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FocusGroup::Peito => "Peito",
            FocusGroup::Costas => "Costas",
            FocusGroup::Pernas => "Pernas",
            FocusGroup::Ombros => "Ombros",
            FocusGroup::Bracos => "Braços",
            FocusGroup::Abdomen => "Abdômen",
            FocusGroup::Gluteos => "Glúteos",
            FocusGroup::Completo => "Corpo Completo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.code() == code)
    }
}

/// The student's stated fitness objective
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    PerderPeso,
    GanharMassa,
    GanharForca,
    Manter,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::PerderPeso,
        Goal::GanharMassa,
        Goal::GanharForca,
        Goal::Manter,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Goal::PerderPeso => "perder_peso",
            Goal::GanharMassa => "ganhar_massa",
            Goal::GanharForca => "ganhar_forca",
            Goal::Manter => "manter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::PerderPeso => "Perder Peso",
            Goal::GanharMassa => "Ganhar Massa",
            Goal::GanharForca => "Ganhar Força",
            Goal::Manter => "Manter",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.code() == code)
    }
}

// Field identifiers, ordered as they appear on the form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum FormField {
    Name,
    BirthDate,
    Gender,
    WeeklyWorkouts,
    FocusGroup,
    Goal,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::BirthDate,
        FormField::Gender,
        FormField::WeeklyWorkouts,
        FormField::FocusGroup,
        FormField::Goal,
    ];

    /// Key used in the serialized registration
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::BirthDate => "birthDate",
            FormField::Gender => "gender",
            FormField::WeeklyWorkouts => "weeklyWorkouts",
            FormField::FocusGroup => "focusGroup",
            FormField::Goal => "goal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nome",
            FormField::BirthDate => "Data de Nascimento",
            FormField::Gender => "Sexo",
            FormField::WeeklyWorkouts => "Quantidade de Treinos na Semana",
            FormField::FocusGroup => "Grupo Muscular de Ênfase",
            FormField::Goal => "Objetivo Geral",
        }
    }
}

/// A fully validated registration, ready to be saved
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub weekly_workouts: u8,
    pub focus_group: FocusGroup,
    pub goal: Goal,
}

/// Values currently bound to the form inputs
#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationDraft {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub weekly_workouts: u8,
    pub focus_group: Option<FocusGroup>,
    pub goal: Option<Goal>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_date: None,
            gender: None,
            weekly_workouts: DEFAULT_WEEKLY_WORKOUTS,
            focus_group: None,
            goal: None,
        }
    }
}

/// Clamp any slider reading into the accepted weekly workout range
pub fn clamp_weekly_workouts(value: i64) -> u8 {
    value.clamp(MIN_WEEKLY_WORKOUTS as i64, MAX_WEEKLY_WORKOUTS as i64) as u8
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Saving,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    SetName(String),
    SetBirthDate(NaiveDate),
    SetGender(Gender),
    SetWeeklyWorkouts(i64),
    SetFocusGroup(FocusGroup),
    SetGoal(Goal),
    SetErrors(ValidationErrors),
    BeginSaving,
    SaveCompleted,
    Reset,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationState {
    pub draft: RegistrationDraft,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
}

impl RegistrationState {
    /// Apply an action in place, keeping the surrounding Signal reactive
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetName(name) => {
                self.draft.name = name;
                self.errors.remove(FormField::Name);
            }
            RegistrationAction::SetBirthDate(date) => {
                self.draft.birth_date = Some(date);
                self.errors.remove(FormField::BirthDate);
            }
            RegistrationAction::SetGender(gender) => {
                self.draft.gender = Some(gender);
                self.errors.remove(FormField::Gender);
            }
            RegistrationAction::SetWeeklyWorkouts(value) => {
                self.draft.weekly_workouts = clamp_weekly_workouts(value);
                self.errors.remove(FormField::WeeklyWorkouts);
            }
            RegistrationAction::SetFocusGroup(group) => {
                self.draft.focus_group = Some(group);
                self.errors.remove(FormField::FocusGroup);
            }
            RegistrationAction::SetGoal(goal) => {
                self.draft.goal = Some(goal);
                self.errors.remove(FormField::Goal);
            }
            RegistrationAction::SetErrors(errors) => {
                self.errors = errors;
            }
            RegistrationAction::BeginSaving => {
                self.errors.clear();
                self.status = SubmissionStatus::Saving;
            }
            RegistrationAction::SaveCompleted => {
                self.draft = RegistrationDraft::default();
                self.errors.clear();
                self.status = SubmissionStatus::Editing;
            }
            RegistrationAction::Reset => {
                // Reset is ignored while a save is pending, like every other input
                if !self.is_saving() {
                    self.draft = RegistrationDraft::default();
                    self.errors.clear();
                }
            }
        }
    }

    /// Validate the draft; on success switch to saving and hand back the record
    pub fn submit(&mut self, schema: &RegistrationSchema) -> Option<StudentRegistration> {
        if self.is_saving() {
            return None;
        }

        match schema.validate(&self.draft) {
            Ok(registration) => {
                self.reduce_in_place(RegistrationAction::BeginSaving);
                Some(registration)
            }
            Err(errors) => {
                self.reduce_in_place(RegistrationAction::SetErrors(errors));
                None
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        self.status == SubmissionStatus::Saving
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Maria Silva".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10),
            gender: Some(Gender::Feminino),
            weekly_workouts: 3,
            focus_group: Some(FocusGroup::Pernas),
            goal: Some(Goal::GanharMassa),
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.weekly_workouts, 1);
        assert!(draft.birth_date.is_none());
        assert!(draft.gender.is_none());
        assert!(draft.focus_group.is_none());
        assert!(draft.goal.is_none());
    }

    #[test]
    fn test_clamp_weekly_workouts() {
        assert_eq!(clamp_weekly_workouts(-4), 1);
        assert_eq!(clamp_weekly_workouts(0), 1);
        for value in 1..=6 {
            assert_eq!(clamp_weekly_workouts(value), value as u8);
        }
        assert_eq!(clamp_weekly_workouts(7), 6);
        assert_eq!(clamp_weekly_workouts(i64::MAX), 6);
    }

    #[test]
    fn test_codes_roundtrip() {
        for group in FocusGroup::ALL {
            assert_eq!(FocusGroup::from_code(group.code()), Some(group));
        }
        for goal in Goal::ALL {
            assert_eq!(Goal::from_code(goal.code()), Some(goal));
        }
        for gender in Gender::ALL {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
        }
        assert_eq!(FocusGroup::from_code("pescoco"), None);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut state = RegistrationState::default();
        assert!(state.submit(&RegistrationSchema::default()).is_none());
        assert!(state.error_for(FormField::Name).is_some());
        assert!(state.error_for(FormField::Goal).is_some());

        state.reduce_in_place(RegistrationAction::SetName("Ana".to_string()));
        assert!(state.error_for(FormField::Name).is_none());
        assert!(state.error_for(FormField::Goal).is_some());
    }

    #[test]
    fn test_short_name_and_missing_birth_date_block_submission() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SetName("Jo".to_string()));

        assert!(state.submit(&RegistrationSchema::default()).is_none());
        assert_eq!(
            state.error_for(FormField::Name),
            Some(&FieldError::NameTooShort { min: 3 })
        );
        assert_eq!(
            state.error_for(FormField::BirthDate),
            Some(&FieldError::BirthDateMissing)
        );
        assert_eq!(state.status, SubmissionStatus::Editing);
        // No reset happened
        assert_eq!(state.draft.name, "Jo");
    }

    #[test]
    fn test_valid_submission_enters_saving_and_completes_with_defaults() {
        let mut state = RegistrationState {
            draft: valid_draft(),
            ..Default::default()
        };

        let registration = state.submit(&RegistrationSchema::default()).unwrap();
        assert_eq!(registration.name, "Maria Silva");
        assert!(state.is_saving());

        // A second submit while saving is ignored
        assert!(state.submit(&RegistrationSchema::default()).is_none());

        state.reduce_in_place(RegistrationAction::SaveCompleted);
        assert_eq!(state.draft, RegistrationDraft::default());
        assert!(state.errors.is_empty());
        assert_eq!(state.status, SubmissionStatus::Editing);
    }

    #[test]
    fn test_reset_restores_defaults_but_not_while_saving() {
        let mut state = RegistrationState {
            draft: valid_draft(),
            ..Default::default()
        };
        state.reduce_in_place(RegistrationAction::Reset);
        assert_eq!(state.draft, RegistrationDraft::default());

        state.draft = valid_draft();
        state.reduce_in_place(RegistrationAction::BeginSaving);
        state.reduce_in_place(RegistrationAction::Reset);
        assert_eq!(state.draft, valid_draft());
    }

    #[test]
    fn test_registration_serializes_with_form_keys() {
        let registration = StudentRegistration {
            name: "Maria Silva".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
            gender: Gender::Feminino,
            weekly_workouts: 3,
            focus_group: FocusGroup::Pernas,
            goal: Goal::GanharMassa,
        };

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["name"], "Maria Silva");
        assert_eq!(value["birthDate"], "1990-05-10");
        assert_eq!(value["gender"], "feminino");
        assert_eq!(value["weeklyWorkouts"], 3);
        assert_eq!(value["focusGroup"], "pernas");
        assert_eq!(value["goal"], "ganhar_massa");
    }
}
