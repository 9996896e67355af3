use chrono::NaiveDate;
use thiserror::Error;

/// A single field that failed registration validation.
///
/// The `Display` output is the message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("O nome deve ter pelo menos {min} caracteres.")]
    NameTooShort { min: usize },

    #[error("A data de nascimento é obrigatória.")]
    BirthDateMissing,

    #[error(
        "A data de nascimento deve estar entre {} e {}.",
        .min.format("%d/%m/%Y"),
        .max.format("%d/%m/%Y")
    )]
    BirthDateOutOfRange { min: NaiveDate, max: NaiveDate },

    #[error("Por favor selecione o sexo.")]
    GenderMissing,

    #[error("Selecione entre {min} e {max} treinos por semana.")]
    WeeklyWorkoutsOutOfRange { min: u8, max: u8 },

    #[error("Por favor selecione um grupo muscular.")]
    FocusGroupMissing,

    #[error("Por favor selecione um objetivo.")]
    GoalMissing,
}

/// Invalid application configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(field: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::NameTooShort { min: 3 }.to_string(),
            "O nome deve ter pelo menos 3 caracteres."
        );
        assert_eq!(
            FieldError::BirthDateMissing.to_string(),
            "A data de nascimento é obrigatória."
        );
        assert_eq!(
            FieldError::GoalMissing.to_string(),
            "Por favor selecione um objetivo."
        );
    }

    #[test]
    fn test_out_of_range_message_uses_brazilian_dates() {
        let error = FieldError::BirthDateOutOfRange {
            min: NaiveDate::from_ymd_opt(1940, 1, 1).unwrap(),
            max: NaiveDate::from_ymd_opt(2009, 12, 31).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "A data de nascimento deve estar entre 01/01/1940 e 31/12/2009."
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::invalid("toast.limit", 0, "must be greater than 0");
        assert_eq!(
            error.to_string(),
            "Configuration error: toast.limit = 0 (must be greater than 0)"
        );
    }
}
