//! Simulated save of a validated registration.
//!
//! There is no backend: the save waits on a delay future and then reports
//! success. The caller picks the delay (a browser timer in the app, an
//! immediately ready future in tests).

use std::future::Future;
use tracing::{info, instrument};

use super::types::StudentRegistration;
use crate::features::toast::{ToastSpec, ToastVariant};

pub const SUCCESS_TITLE: &str = "Dados salvos com sucesso!";
pub const SUCCESS_DESCRIPTION: &str = "Os dados do aluno foram salvos com sucesso.";

#[derive(Clone, PartialEq, Debug)]
pub struct SaveOutcome {
    pub registration: StudentRegistration,
    pub toast: ToastSpec,
}

impl SaveOutcome {
    /// Captured values as JSON for the console
    pub fn summary_json(&self) -> String {
        serde_json::to_string_pretty(&self.registration)
            .unwrap_or_else(|_| format!("{:?}", self.registration))
    }
}

pub fn success_toast() -> ToastSpec {
    ToastSpec {
        title: SUCCESS_TITLE.to_string(),
        description: Some(SUCCESS_DESCRIPTION.to_string()),
        variant: ToastVariant::Success,
    }
}

/// Wait for `delay`, then report the registration as saved. Cannot fail.
#[instrument(skip_all, fields(student = %registration.name))]
pub async fn simulate_save<D>(registration: StudentRegistration, delay: D) -> SaveOutcome
where
    D: Future<Output = ()>,
{
    delay.await;
    info!("Student registration saved");

    SaveOutcome {
        registration,
        toast: success_toast(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::{
        FocusGroup, Gender, Goal, RegistrationAction, RegistrationDraft, RegistrationSchema,
        RegistrationState,
    };
    use crate::features::toast::ToastState;
    use chrono::NaiveDate;
    use tokio::sync::oneshot;

    fn maria() -> RegistrationDraft {
        RegistrationDraft {
            name: "Maria Silva".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10),
            gender: Some(Gender::Feminino),
            weekly_workouts: 3,
            focus_group: Some(FocusGroup::Pernas),
            goal: Some(Goal::GanharMassa),
        }
    }

    #[tokio::test]
    async fn test_simulated_save_reports_success() {
        let registration = RegistrationSchema::default().validate(&maria()).unwrap();
        let outcome = simulate_save(registration.clone(), std::future::ready(())).await;

        assert_eq!(outcome.registration, registration);
        assert_eq!(outcome.toast.title, SUCCESS_TITLE);
        assert_eq!(outcome.toast.description.as_deref(), Some(SUCCESS_DESCRIPTION));
        assert_eq!(outcome.toast.variant, ToastVariant::Success);
    }

    #[tokio::test]
    async fn test_full_submission_flow_resets_form_and_notifies() {
        let mut state = RegistrationState {
            draft: maria(),
            ..Default::default()
        };
        let mut toasts = ToastState::new(1);

        let registration = state.submit(&RegistrationSchema::default()).unwrap();
        assert!(state.is_saving());
        assert!(toasts.visible().is_empty());

        let outcome = simulate_save(registration, std::future::ready(())).await;
        toasts.push(outcome.toast);
        state.reduce_in_place(RegistrationAction::SaveCompleted);

        assert_eq!(state.draft, RegistrationDraft::default());
        assert!(!state.is_saving());
        assert_eq!(toasts.visible().len(), 1);
        assert_eq!(toasts.visible()[0].spec.title, SUCCESS_TITLE);
    }

    #[tokio::test]
    async fn test_form_stays_saving_until_delay_elapses() {
        let mut state = RegistrationState {
            draft: maria(),
            ..Default::default()
        };
        let mut toasts = ToastState::new(1);
        let registration = state.submit(&RegistrationSchema::default()).unwrap();

        let (elapsed_tx, elapsed_rx) = oneshot::channel::<()>();
        let save = tokio::spawn(simulate_save(registration, async move {
            let _ = elapsed_rx.await;
        }));

        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(!save.is_finished());
        assert!(state.is_saving());
        assert!(toasts.visible().is_empty());
        assert_eq!(state.draft, maria());

        elapsed_tx.send(()).unwrap();
        let outcome = save.await.unwrap();
        toasts.push(outcome.toast);
        state.reduce_in_place(RegistrationAction::SaveCompleted);

        assert!(!state.is_saving());
        assert_eq!(state.draft, RegistrationDraft::default());
        assert_eq!(toasts.visible()[0].spec.title, SUCCESS_TITLE);
    }

    #[tokio::test]
    async fn test_summary_json_contains_captured_values() {
        let registration = RegistrationSchema::default().validate(&maria()).unwrap();
        let outcome = simulate_save(registration, std::future::ready(())).await;
        let json = outcome.summary_json();

        assert!(json.contains("\"name\": \"Maria Silva\""));
        assert!(json.contains("\"focusGroup\": \"pernas\""));
    }
}
