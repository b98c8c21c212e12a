//! Two-step create-session wizard state machine.
//!
//! Step flow: type selection, then a details form, then a single submit in
//! flight. The machine itself is pure; a driver performs the service call
//! between `begin_submit` and `finish_submit`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::i18n::Locale;

use super::draft::{DraftField, FieldErrors, SessionDraft};
use super::model::{CreateSessionPayload, CreatedSession, MeetingType};

/// Current step of the create-session wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    /// Picking which kind of session to create.
    Selection,
    /// Editing the details form.
    Details,
    /// A create request is in flight; further submits are rejected.
    Submitting,
}

/// Serializable snapshot of the wizard for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub draft: Option<SessionDraft>,
    pub field_errors: FieldErrors,
    pub submit_error: Option<String>,
}

/// State machine for the create-session dialog.
///
/// `Details` and `Submitting` always hold a draft, and `Submitting` is only
/// ever entered through a fully valid one. Going back keeps the old draft
/// around, but the next type selection rebuilds it from defaults.
#[derive(Debug, Clone)]
pub struct SessionWizard {
    locale: Locale,
    step: WizardStep,
    draft: Option<SessionDraft>,
    field_errors: FieldErrors,
    submit_error: Option<String>,
}

impl SessionWizard {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            step: WizardStep::Selection,
            draft: None,
            field_errors: FieldErrors::default(),
            submit_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> Option<&SessionDraft> {
        self.draft.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches the language used for freshly produced messages and titles.
    /// Text already in the draft or in errors is left as it is.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Enters the details step with a defaulted draft. Ignored outside the
    /// selection step.
    pub fn select_type(&mut self, meeting_type: MeetingType) {
        self.select_type_at(meeting_type, Utc::now());
    }

    /// As `select_type`, with an explicit clock.
    pub fn select_type_at(&mut self, meeting_type: MeetingType, now: DateTime<Utc>) {
        if self.step != WizardStep::Selection {
            return;
        }
        self.draft = Some(SessionDraft::with_defaults(meeting_type, self.locale, now));
        self.field_errors = FieldErrors::default();
        self.submit_error = None;
        self.step = WizardStep::Details;
    }

    /// Edits one draft field and clears that field's validation message
    /// along with any earlier submit failure notice. Only possible while
    /// the details form is shown.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        if self.step != WizardStep::Details {
            return;
        }
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        draft.set_field(field, value);
        self.field_errors.clear(field);
        self.submit_error = None;
    }

    /// Returns from the details form to type selection. The draft is rebuilt
    /// on the next selection, so nothing from it survives.
    pub fn back(&mut self) {
        if self.step == WizardStep::Details {
            self.step = WizardStep::Selection;
            self.field_errors = FieldErrors::default();
            self.submit_error = None;
        }
    }

    /// Validates the draft and, when it is clean, enters `Submitting` and
    /// yields the request payload.
    ///
    /// With violations the wizard stays on the details form and
    /// `field_errors` lists every problem at once. Returns `None` while a
    /// submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<CreateSessionPayload> {
        if self.step != WizardStep::Details {
            return None;
        }
        let draft = self.draft.as_ref()?;

        let errors = draft.validate(self.locale);
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }

        let payload = draft.payload()?;
        self.field_errors = FieldErrors::default();
        self.submit_error = None;
        self.step = WizardStep::Submitting;
        Some(payload)
    }

    /// Applies the service outcome of an in-flight submit.
    ///
    /// Success yields the created session id and resets the wizard. Failure
    /// returns to the details form with every entered value intact and a
    /// localized notice, so the user can try again.
    pub fn finish_submit(
        &mut self,
        outcome: Result<CreatedSession, ServiceError>,
    ) -> Option<String> {
        if self.step != WizardStep::Submitting {
            return None;
        }
        match outcome {
            Ok(created) => {
                self.reset();
                Some(created.id)
            }
            Err(_) => {
                self.step = WizardStep::Details;
                self.submit_error = Some(text::submit_failed(self.locale).to_string());
                None
            }
        }
    }

    /// Abandons the wizard and returns to type selection. Refused while a
    /// submit is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.step == WizardStep::Submitting {
            return false;
        }
        self.reset();
        true
    }

    /// Back to a pristine selection step.
    pub fn reset(&mut self) {
        self.step = WizardStep::Selection;
        self.draft = None;
        self.field_errors = FieldErrors::default();
        self.submit_error = None;
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            step: self.step,
            draft: self.draft.clone(),
            field_errors: self.field_errors.clone(),
            submit_error: self.submit_error.clone(),
        }
    }
}

mod text {
    use crate::i18n::Locale;

    pub fn submit_failed(locale: Locale) -> &'static str {
        locale.pick(
            "Could not create the session. Please try again.",
            "تعذر إنشاء الجلسة، يرجى المحاولة مرة أخرى.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn wizard_at_details() -> SessionWizard {
        let mut wizard = SessionWizard::new(Locale::En);
        wizard.select_type_at(MeetingType::ProjectMeeting, fixed_now());
        wizard
    }

    #[test]
    fn test_starts_at_selection() {
        let wizard = SessionWizard::new(Locale::En);
        assert_eq!(wizard.step(), WizardStep::Selection);
        assert!(wizard.draft().is_none());
    }

    #[test]
    fn test_select_type_builds_defaulted_draft() {
        let wizard = wizard_at_details();
        assert_eq!(wizard.step(), WizardStep::Details);

        let draft = wizard.draft().unwrap();
        assert_eq!(draft.meeting_type, MeetingType::ProjectMeeting);
        assert_eq!(draft.title, "Project meeting - 2026-03-14 09:30");
        assert_eq!(draft.start_time, "09:30");
        assert_eq!(draft.end_time, "10:30");
    }

    #[test]
    fn test_select_type_ignored_outside_selection() {
        let mut wizard = wizard_at_details();
        let before = wizard.draft().cloned();

        wizard.select_type_at(MeetingType::StudySession, fixed_now());

        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.draft().cloned(), before);
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut wizard = wizard_at_details();
        wizard.set_field(DraftField::Title, "");
        wizard.set_field(DraftField::StartDate, "");
        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.view().field_errors.len(), 2);

        wizard.set_field(DraftField::Title, "Planning");

        let errors = wizard.view().field_errors;
        assert_eq!(errors.get(DraftField::Title), None);
        assert!(errors.get(DraftField::StartDate).is_some());
    }

    #[test]
    fn test_invalid_submit_keeps_details_step() {
        let mut wizard = wizard_at_details();
        wizard.set_field(DraftField::Title, "   ");
        wizard.set_field(DraftField::EndDate, "");

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.step(), WizardStep::Details);

        let errors = wizard.view().field_errors;
        assert_eq!(errors.len(), 2);
        assert!(errors.get(DraftField::Title).is_some());
        assert!(errors.get(DraftField::EndDate).is_some());
    }

    #[test]
    fn test_submit_happy_path() {
        let mut wizard = wizard_at_details();
        wizard.set_field(DraftField::Title, "Kickoff");

        let payload = wizard.begin_submit().expect("valid draft should submit");
        assert_eq!(payload.title, "Kickoff");
        assert_eq!(wizard.step(), WizardStep::Submitting);

        let id = wizard.finish_submit(Ok(CreatedSession {
            id: "abc".to_string(),
        }));
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(wizard.step(), WizardStep::Selection);
        assert!(wizard.draft().is_none());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut wizard = wizard_at_details();
        assert!(wizard.begin_submit().is_some());
        assert_eq!(wizard.step(), WizardStep::Submitting);

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.step(), WizardStep::Submitting);
    }

    #[test]
    fn test_failed_submit_returns_to_details_with_values_intact() {
        let mut wizard = wizard_at_details();
        wizard.set_field(DraftField::Title, "Budget review");
        wizard.set_field(DraftField::Description, "Q3 numbers");
        assert!(wizard.begin_submit().is_some());

        let id = wizard.finish_submit(Err(ServiceError::transport("connection refused")));

        assert_eq!(id, None);
        assert_eq!(wizard.step(), WizardStep::Details);
        let view = wizard.view();
        assert_eq!(
            view.submit_error.as_deref(),
            Some("Could not create the session. Please try again.")
        );
        let draft = view.draft.unwrap();
        assert_eq!(draft.title, "Budget review");
        assert_eq!(draft.description, "Q3 numbers");
    }

    #[test]
    fn test_retry_after_failure_succeeds() {
        let mut wizard = wizard_at_details();
        assert!(wizard.begin_submit().is_some());
        wizard.finish_submit(Err(ServiceError::status(500, "boom")));

        let payload = wizard.begin_submit();
        assert!(payload.is_some(), "retry after failure must be allowed");
    }

    #[test]
    fn test_editing_clears_submit_error() {
        let mut wizard = wizard_at_details();
        assert!(wizard.begin_submit().is_some());
        wizard.finish_submit(Err(ServiceError::status(502, "bad gateway")));
        assert!(wizard.view().submit_error.is_some());

        wizard.set_field(DraftField::Title, "Another go");
        assert!(wizard.view().submit_error.is_none());
    }

    #[test]
    fn test_finish_submit_outside_submitting_is_noop() {
        let mut wizard = wizard_at_details();
        let id = wizard.finish_submit(Ok(CreatedSession {
            id: "zzz".to_string(),
        }));
        assert_eq!(id, None);
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[test]
    fn test_back_returns_to_selection() {
        let mut wizard = wizard_at_details();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Selection);

        // A new selection rebuilds the draft from defaults
        wizard.select_type_at(MeetingType::StudySession, fixed_now());
        assert_eq!(
            wizard.draft().unwrap().meeting_type,
            MeetingType::StudySession
        );
    }

    #[test]
    fn test_cancel_rules() {
        let mut wizard = wizard_at_details();
        assert!(wizard.cancel());
        assert_eq!(wizard.step(), WizardStep::Selection);

        let mut wizard = wizard_at_details();
        assert!(wizard.begin_submit().is_some());
        assert!(!wizard.cancel(), "cancel while submitting must be refused");
        assert_eq!(wizard.step(), WizardStep::Submitting);
    }

    #[test]
    fn test_arabic_submit_failure_notice() {
        let mut wizard = SessionWizard::new(Locale::Ar);
        wizard.select_type_at(MeetingType::ProjectMeeting, fixed_now());
        assert!(wizard.begin_submit().is_some());
        wizard.finish_submit(Err(ServiceError::transport("timeout")));

        assert_eq!(
            wizard.view().submit_error.as_deref(),
            Some("تعذر إنشاء الجلسة، يرجى المحاولة مرة أخرى.")
        );
    }
}
