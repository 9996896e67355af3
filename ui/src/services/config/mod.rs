//! Application Configuration
//!
//! Central settings for the registration page: the simulated save delay,
//! toast behaviour, the selectable birth-date range and theme persistence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::console_warn;
use crate::features::theme::ThemeMode;
use crate::services::errors::ConfigError;

/// Earliest selectable birth date (1 January 1940)
pub const MIN_BIRTH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1940, 1, 1) {
    Some(date) => date,
    None => panic!("invalid minimum birth date"),
};

/// Latest selectable birth date (31 December 2009)
pub const MAX_BIRTH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2009, 12, 31) {
    Some(date) => date,
    None => panic!("invalid maximum birth date"),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub submission: SubmissionConfig,
    pub toast: ToastConfig,
    pub calendar: CalendarConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// How long the simulated save takes before the form resets
    pub save_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Time a toast stays on screen before it dismisses itself
    pub duration_ms: u32,
    /// Maximum number of toasts visible at once
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// LocalStorage key holding the chosen theme mode
    pub storage_key: String,
    pub default_mode: ThemeMode,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 1000,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            limit: 1,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_date: MIN_BIRTH_DATE,
            max_date: MAX_BIRTH_DATE,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_mode: ThemeMode::System,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submission: SubmissionConfig::default(),
            toast: ToastConfig::default(),
            calendar: CalendarConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Check every section, collecting all problems instead of stopping at the first
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.submission.save_delay_ms == 0 {
            errors.push(ConfigError::invalid(
                "submission.save_delay_ms",
                self.submission.save_delay_ms,
                "must be greater than 0",
            ));
        }

        if self.toast.duration_ms == 0 {
            errors.push(ConfigError::invalid(
                "toast.duration_ms",
                self.toast.duration_ms,
                "must be greater than 0",
            ));
        }

        if self.toast.limit == 0 {
            errors.push(ConfigError::invalid(
                "toast.limit",
                self.toast.limit,
                "must be greater than 0",
            ));
        }

        if self.calendar.min_date > self.calendar.max_date {
            errors.push(ConfigError::invalid(
                "calendar.min_date",
                self.calendar.min_date,
                "must not be after calendar.max_date",
            ));
        }

        if self.theme.storage_key.trim().is_empty() {
            errors.push(ConfigError::invalid(
                "theme.storage_key",
                &self.theme.storage_key,
                "must not be empty",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults when invalid
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AppConfig::default();
            match config.validate() {
                Ok(()) => config,
                Err(errors) => {
                    for error in errors {
                        console_warn!("Invalid configuration: {}", error);
                    }
                    AppConfig::default()
                }
            }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.submission.save_delay_ms, 1000);
        assert_eq!(config.toast.limit, 1);
        assert_eq!(config.calendar.min_date, MIN_BIRTH_DATE);
        assert_eq!(config.calendar.max_date, MAX_BIRTH_DATE);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.default_mode, ThemeMode::System);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = AppConfig::default();
        config.toast.limit = 0;
        config.calendar.min_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        config.theme.storage_key = "  ".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
