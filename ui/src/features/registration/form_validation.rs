use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

use super::types::*;
use crate::services::config::{CalendarConfig, MAX_BIRTH_DATE, MIN_BIRTH_DATE};
use crate::services::errors::FieldError;

/// Per-field validation failures, kept in form order
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("{} campo(s) inválido(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn remove(&mut self, field: FormField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Constraints every registration must satisfy before it can be saved
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationSchema {
    pub min_name_chars: usize,
    pub min_birth_date: NaiveDate,
    pub max_birth_date: NaiveDate,
    pub min_weekly_workouts: u8,
    pub max_weekly_workouts: u8,
}

impl Default for RegistrationSchema {
    fn default() -> Self {
        Self {
            min_name_chars: MIN_NAME_CHARS,
            min_birth_date: MIN_BIRTH_DATE,
            max_birth_date: MAX_BIRTH_DATE,
            min_weekly_workouts: MIN_WEEKLY_WORKOUTS,
            max_weekly_workouts: MAX_WEEKLY_WORKOUTS,
        }
    }
}

impl RegistrationSchema {
    pub fn from_calendar(calendar: &CalendarConfig) -> Self {
        Self {
            min_birth_date: calendar.min_date,
            max_birth_date: calendar.max_date,
            ..Self::default()
        }
    }

    /// Check a single field of the draft
    pub fn validate_field(&self, draft: &RegistrationDraft, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => {
                if draft.name.chars().count() < self.min_name_chars {
                    Some(FieldError::NameTooShort {
                        min: self.min_name_chars,
                    })
                } else {
                    None
                }
            }
            FormField::BirthDate => match draft.birth_date {
                None => Some(FieldError::BirthDateMissing),
                Some(date) if !self.accepts_birth_date(date) => {
                    Some(FieldError::BirthDateOutOfRange {
                        min: self.min_birth_date,
                        max: self.max_birth_date,
                    })
                }
                Some(_) => None,
            },
            FormField::Gender => draft.gender.is_none().then_some(FieldError::GenderMissing),
            FormField::WeeklyWorkouts => {
                let range = self.min_weekly_workouts..=self.max_weekly_workouts;
                (!range.contains(&draft.weekly_workouts)).then_some(
                    FieldError::WeeklyWorkoutsOutOfRange {
                        min: self.min_weekly_workouts,
                        max: self.max_weekly_workouts,
                    },
                )
            }
            FormField::FocusGroup => draft
                .focus_group
                .is_none()
                .then_some(FieldError::FocusGroupMissing),
            FormField::Goal => draft.goal.is_none().then_some(FieldError::GoalMissing),
        }
    }

    /// Validate the whole draft, reporting every failing field at once
    pub fn validate(&self, draft: &RegistrationDraft) -> Result<StudentRegistration, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in FormField::ALL {
            if let Some(error) = self.validate_field(draft, field) {
                errors.insert(field, error);
            }
        }

        match (draft.birth_date, draft.gender, draft.focus_group, draft.goal) {
            (Some(birth_date), Some(gender), Some(focus_group), Some(goal)) if errors.is_empty() => {
                Ok(StudentRegistration {
                    name: draft.name.clone(),
                    birth_date,
                    gender,
                    weekly_workouts: draft.weekly_workouts,
                    focus_group,
                    goal,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn accepts_birth_date(&self, date: NaiveDate) -> bool {
        date >= self.min_birth_date && date <= self.max_birth_date
    }
}

/// Gets the message to show under a field, if it currently has an error
pub fn get_field_validation_message(errors: &ValidationErrors, field: FormField) -> Option<String> {
    errors.get(field).map(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Maria Silva".to_string(),
            birth_date: Some(date(1990, 5, 10)),
            gender: Some(Gender::Feminino),
            weekly_workouts: 3,
            focus_group: Some(FocusGroup::Pernas),
            goal: Some(Goal::GanharMassa),
        }
    }

    #[test]
    fn test_valid_draft_produces_registration() {
        let registration = RegistrationSchema::default().validate(&valid_draft()).unwrap();
        assert_eq!(
            registration,
            StudentRegistration {
                name: "Maria Silva".to_string(),
                birth_date: date(1990, 5, 10),
                gender: Gender::Feminino,
                weekly_workouts: 3,
                focus_group: FocusGroup::Pernas,
                goal: Goal::GanharMassa,
            }
        );
    }

    #[test]
    fn test_short_names_are_rejected() {
        let schema = RegistrationSchema::default();
        for name in ["", "J", "Jo", "Zé"] {
            let draft = RegistrationDraft {
                name: name.to_string(),
                ..valid_draft()
            };
            let errors = schema.validate(&draft).unwrap_err();
            assert_eq!(
                get_field_validation_message(&errors, FormField::Name).as_deref(),
                Some("O nome deve ter pelo menos 3 caracteres.")
            );
        }
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let draft = RegistrationDraft {
            name: "Zéa".to_string(),
            ..valid_draft()
        };
        assert!(RegistrationSchema::default().validate(&draft).is_ok());
    }

    #[test]
    fn test_default_draft_reports_every_required_field() {
        let errors = RegistrationSchema::default()
            .validate(&RegistrationDraft::default())
            .unwrap_err();

        let fields: Vec<FormField> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                FormField::Name,
                FormField::BirthDate,
                FormField::Gender,
                FormField::FocusGroup,
                FormField::Goal,
            ]
        );
    }

    #[test]
    fn test_birth_date_bounds() {
        let schema = RegistrationSchema::default();
        assert!(schema.accepts_birth_date(date(1940, 1, 1)));
        assert!(schema.accepts_birth_date(date(2009, 12, 31)));
        assert!(!schema.accepts_birth_date(date(1939, 12, 31)));
        assert!(!schema.accepts_birth_date(date(2010, 1, 1)));

        let draft = RegistrationDraft {
            birth_date: Some(date(2010, 1, 1)),
            ..valid_draft()
        };
        let errors = schema.validate(&draft).unwrap_err();
        assert!(matches!(
            errors.get(FormField::BirthDate),
            Some(FieldError::BirthDateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_weekly_workouts_range() {
        let schema = RegistrationSchema::default();
        for workouts in 1..=6 {
            let draft = RegistrationDraft {
                weekly_workouts: workouts,
                ..valid_draft()
            };
            assert!(schema.validate(&draft).is_ok());
        }

        let draft = RegistrationDraft {
            weekly_workouts: 7,
            ..valid_draft()
        };
        assert_eq!(
            schema.validate(&draft).unwrap_err().get(FormField::WeeklyWorkouts),
            Some(&FieldError::WeeklyWorkoutsOutOfRange { min: 1, max: 6 })
        );
    }

    #[test]
    fn test_schema_follows_calendar_config() {
        let calendar = CalendarConfig {
            min_date: date(1950, 1, 1),
            max_date: date(2000, 12, 31),
        };
        let schema = RegistrationSchema::from_calendar(&calendar);
        assert!(!schema.accepts_birth_date(date(1945, 6, 1)));
        assert_eq!(schema.min_name_chars, MIN_NAME_CHARS);
    }
}
