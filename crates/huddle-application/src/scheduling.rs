//! Create-session use case.
//!
//! `SessionComposer` drives the pure `SessionWizard` over the scheduling
//! service. State transitions happen under a lock, the service call happens
//! outside it; re-entrant submits are rejected by the wizard's own
//! `Submitting` step rather than by lock contention.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use huddle_core::i18n::Locale;
use huddle_core::meeting::{
    DraftField, MeetingType, SchedulingApi, SessionWizard, WizardStep, WizardView,
};

/// Outcome of a submit attempt, tagged for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SubmitOutcome {
    /// The session was created; the wizard has been reset.
    Created {
        session_id: String,
        view: WizardView,
    },
    /// Validation rejected the draft; per-field messages are in the view.
    Invalid { view: WizardView },
    /// The service call failed; the details form is back with a notice and
    /// the entered values intact.
    Failed { view: WizardView },
    /// A submit was already in flight; nothing changed.
    Busy { view: WizardView },
}

/// Drives the create-session wizard over the scheduling service.
///
/// # Thread Safety
///
/// The wizard sits behind a `tokio::sync::Mutex` that is never held across
/// the service await: `submit` takes the payload out under the lock,
/// performs the call unlocked, then applies the outcome. While the call
/// runs the wizard reports `Submitting`, so a second submit is a `Busy`
/// no-op instead of a queued duplicate.
pub struct SessionComposer {
    wizard: Mutex<SessionWizard>,
    scheduling: Arc<dyn SchedulingApi>,
}

impl SessionComposer {
    pub fn new(locale: Locale, scheduling: Arc<dyn SchedulingApi>) -> Self {
        Self {
            wizard: Mutex::new(SessionWizard::new(locale)),
            scheduling,
        }
    }

    pub async fn view(&self) -> WizardView {
        self.wizard.lock().await.view()
    }

    pub async fn select_type(&self, meeting_type: MeetingType) -> WizardView {
        let mut wizard = self.wizard.lock().await;
        wizard.select_type(meeting_type);
        wizard.view()
    }

    pub async fn set_field(&self, field: DraftField, value: &str) -> WizardView {
        let mut wizard = self.wizard.lock().await;
        wizard.set_field(field, value);
        wizard.view()
    }

    pub async fn back(&self) -> WizardView {
        let mut wizard = self.wizard.lock().await;
        wizard.back();
        wizard.view()
    }

    pub async fn cancel(&self) -> WizardView {
        let mut wizard = self.wizard.lock().await;
        if !wizard.cancel() {
            tracing::debug!("[SessionComposer] Cancel refused while submit in flight");
        }
        wizard.view()
    }

    pub async fn set_locale(&self, locale: Locale) {
        self.wizard.lock().await.set_locale(locale);
    }

    /// Validates and submits the current draft.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut wizard = self.wizard.lock().await;
            match wizard.begin_submit() {
                Some(payload) => payload,
                None => {
                    let view = wizard.view();
                    return match view.step {
                        WizardStep::Submitting => SubmitOutcome::Busy { view },
                        _ => SubmitOutcome::Invalid { view },
                    };
                }
            }
        };

        tracing::info!(
            "[SessionComposer] Submitting create request: {}",
            payload.title
        );
        let outcome = self.scheduling.create_session(&payload).await;

        let mut wizard = self.wizard.lock().await;
        match outcome {
            Ok(created) => {
                let session_id = created.id.clone();
                wizard.finish_submit(Ok(created));
                tracing::info!("[SessionComposer] Session created: {}", session_id);
                SubmitOutcome::Created {
                    session_id,
                    view: wizard.view(),
                }
            }
            Err(err) => {
                tracing::warn!("[SessionComposer] Create session failed: {}", err);
                wizard.finish_submit(Err(err));
                SubmitOutcome::Failed {
                    view: wizard.view(),
                }
            }
        }
    }

    /// One-click create: a defaults-only draft pushed through the same
    /// validate and submit pipeline, without touching the interactive
    /// wizard's state.
    pub async fn quick_create(&self, meeting_type: MeetingType) -> SubmitOutcome {
        let locale = self.wizard.lock().await.locale();

        let mut shadow = SessionWizard::new(locale);
        shadow.select_type(meeting_type);
        let Some(payload) = shadow.begin_submit() else {
            return SubmitOutcome::Invalid {
                view: shadow.view(),
            };
        };

        tracing::info!("[SessionComposer] Quick-creating a {:?}", meeting_type);
        match self.scheduling.create_session(&payload).await {
            Ok(created) => {
                let session_id = created.id.clone();
                shadow.finish_submit(Ok(created));
                SubmitOutcome::Created {
                    session_id,
                    view: shadow.view(),
                }
            }
            Err(err) => {
                tracing::warn!("[SessionComposer] Quick create failed: {}", err);
                shadow.finish_submit(Err(err));
                SubmitOutcome::Failed {
                    view: shadow.view(),
                }
            }
        }
    }
}
