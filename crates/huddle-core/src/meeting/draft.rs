//! Working draft of a session and its validation rules.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

use super::model::{CreateSessionPayload, MeetingType};

/// Format of the draft's date fields (`2026-03-14`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of the draft's time fields (`14:30`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Editable fields of a session draft.
///
/// Declaration order is form order; `FieldErrors` relies on it to report
/// problems top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    Description,
    ProjectId,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

/// Validation messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Removes the message for one field, called when that field is edited.
    pub fn clear(&mut self, field: DraftField) {
        self.0.remove(&field);
    }

    fn put(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Form state for a session being created.
///
/// Date and time fields hold exactly what the form inputs hold (dates as
/// `2026-03-14`, times as `14:30`, empty string = not filled in). Parsing
/// happens during validation so every field can carry its own message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub meeting_type: MeetingType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
}

impl SessionDraft {
    /// Builds the draft a fresh type selection starts from: a one hour
    /// window beginning now and a localized default title.
    pub fn with_defaults(meeting_type: MeetingType, locale: Locale, now: DateTime<Utc>) -> Self {
        let end = now + Duration::hours(1);
        Self {
            meeting_type,
            title: format!(
                "{} - {}",
                meeting_type.label(locale),
                now.format("%Y-%m-%d %H:%M")
            ),
            description: String::new(),
            project_id: None,
            start_date: now.format(DATE_FORMAT).to_string(),
            start_time: now.format(TIME_FORMAT).to_string(),
            end_date: end.format(DATE_FORMAT).to_string(),
            end_time: end.format(TIME_FORMAT).to_string(),
        }
    }

    /// Writes one field. A blank project id clears the project reference.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Title => self.title = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::ProjectId => {
                let trimmed = value.trim();
                self.project_id = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            DraftField::StartDate => self.start_date = value.to_string(),
            DraftField::StartTime => self.start_time = value.to_string(),
            DraftField::EndDate => self.end_date = value.to_string(),
            DraftField::EndTime => self.end_time = value.to_string(),
        }
    }

    /// Checks every rule and reports all violations at once.
    ///
    /// Presence first (title and all four date/time parts), then
    /// parseability of whatever is present, then end-after-start once both
    /// instants exist. The ordering violation is attached to the end time
    /// field.
    pub fn validate(&self, locale: Locale) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.put(DraftField::Title, text::required(DraftField::Title, locale));
        }

        let start = self.check_instant(
            &mut errors,
            locale,
            &self.start_date,
            &self.start_time,
            DraftField::StartDate,
            DraftField::StartTime,
        );
        let end = self.check_instant(
            &mut errors,
            locale,
            &self.end_date,
            &self.end_time,
            DraftField::EndDate,
            DraftField::EndTime,
        );

        if let (Some(start), Some(end)) = (start, end)
            && end <= start
        {
            errors.put(DraftField::EndTime, text::end_after_start(locale));
        }

        errors
    }

    fn check_instant(
        &self,
        errors: &mut FieldErrors,
        locale: Locale,
        date: &str,
        time: &str,
        date_field: DraftField,
        time_field: DraftField,
    ) -> Option<DateTime<Utc>> {
        let date = date.trim();
        let time = time.trim();

        let parsed_date = if date.is_empty() {
            errors.put(date_field, text::required(date_field, locale));
            None
        } else {
            match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    errors.put(date_field, text::invalid_date(locale));
                    None
                }
            }
        };

        let parsed_time = if time.is_empty() {
            errors.put(time_field, text::required(time_field, locale));
            None
        } else {
            match NaiveTime::parse_from_str(time, TIME_FORMAT) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    errors.put(time_field, text::invalid_time(locale));
                    None
                }
            }
        };

        match (parsed_date, parsed_time) {
            // Form times are taken as UTC wall clock
            (Some(date), Some(time)) => Some(date.and_time(time).and_utc()),
            _ => None,
        }
    }

    /// Normalized request payload: trimmed title, blank description dropped,
    /// date and time pairs combined into instants.
    ///
    /// Returns `None` when a date/time pair does not parse; callers validate
    /// first, so a `None` here means the draft was never validated.
    pub fn payload(&self) -> Option<CreateSessionPayload> {
        let start = combine(&self.start_date, &self.start_time)?;
        let end = combine(&self.end_date, &self.end_time)?;
        let description = self.description.trim();

        Some(CreateSessionPayload {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            meeting_type: self.meeting_type,
            project_id: self.project_id.clone(),
            start_time: start,
            end_time: end,
        })
    }
}

fn combine(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).ok()?;
    Some(date.and_time(time).and_utc())
}

mod text {
    use crate::i18n::Locale;

    use super::DraftField;

    pub fn required(field: DraftField, locale: Locale) -> &'static str {
        match field {
            DraftField::Title => locale.pick("Title is required", "العنوان مطلوب"),
            DraftField::StartDate => locale.pick("Start date is required", "تاريخ البدء مطلوب"),
            DraftField::StartTime => locale.pick("Start time is required", "وقت البدء مطلوب"),
            DraftField::EndDate => locale.pick("End date is required", "تاريخ الانتهاء مطلوب"),
            DraftField::EndTime => locale.pick("End time is required", "وقت الانتهاء مطلوب"),
            _ => locale.pick("This field is required", "هذا الحقل مطلوب"),
        }
    }

    pub fn invalid_date(locale: Locale) -> &'static str {
        locale.pick("Enter a valid date", "أدخل تاريخًا صالحًا")
    }

    pub fn invalid_time(locale: Locale) -> &'static str {
        locale.pick("Enter a valid time", "أدخل وقتًا صالحًا")
    }

    pub fn end_after_start(locale: Locale) -> &'static str {
        locale.pick(
            "End time must be after start time",
            "يجب أن يكون وقت الانتهاء بعد وقت البدء",
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

    #[test]
    fn test_defaults_give_one_hour_window() {
        let draft = SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());

        assert_eq!(draft.start_date, "2026-03-14");
        assert_eq!(draft.start_time, "09:30");
        assert_eq!(draft.end_date, "2026-03-14");
        assert_eq!(draft.end_time, "10:30");
        assert!(draft.validate(Locale::En).is_empty());

        let payload = draft.payload().unwrap();
        assert_eq!(payload.end_time - payload.start_time, Duration::hours(1));
    }

    #[test]
    fn test_default_title_is_localized_and_non_blank() {
        let en = SessionDraft::with_defaults(MeetingType::StudySession, Locale::En, fixed_now());
        assert_eq!(en.title, "Study session - 2026-03-14 09:30");

        let ar = SessionDraft::with_defaults(MeetingType::StudySession, Locale::Ar, fixed_now());
        assert!(ar.title.starts_with("جلسة دراسية"));
        assert!(!ar.title.trim().is_empty());
    }

    #[test]
    fn test_defaults_roll_over_midnight() {
        let late = Utc.with_ymd_and_hms(2026, 3, 14, 23, 30, 0).unwrap();
        let draft = SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, late);

        assert_eq!(draft.start_date, "2026-03-14");
        assert_eq!(draft.end_date, "2026-03-15");
        assert_eq!(draft.end_time, "00:30");
        assert!(draft.validate(Locale::En).is_empty());
    }

    #[test]
    fn test_validate_reports_all_violations_at_once() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        draft.set_field(DraftField::Title, "   ");
        draft.set_field(DraftField::StartDate, "");
        draft.set_field(DraftField::EndTime, "");

        let errors = draft.validate(Locale::En);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(DraftField::Title), Some("Title is required"));
        assert_eq!(
            errors.get(DraftField::StartDate),
            Some("Start date is required")
        );
        assert_eq!(errors.get(DraftField::EndTime), Some("End time is required"));
    }

    #[test]
    fn test_validate_all_fields_missing() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        for field in [
            DraftField::Title,
            DraftField::StartDate,
            DraftField::StartTime,
            DraftField::EndDate,
            DraftField::EndTime,
        ] {
            draft.set_field(field, "");
        }

        let errors = draft.validate(Locale::En);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_validate_flags_unparseable_values() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        draft.set_field(DraftField::StartDate, "14/03/2026");
        draft.set_field(DraftField::EndTime, "25:99");

        let errors = draft.validate(Locale::En);
        assert_eq!(errors.get(DraftField::StartDate), Some("Enter a valid date"));
        assert_eq!(errors.get(DraftField::EndTime), Some("Enter a valid time"));
    }

    #[test]
    fn test_validate_rejects_end_not_after_start() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        draft.set_field(DraftField::EndDate, "2026-03-14");
        draft.set_field(DraftField::EndTime, "09:00");

        let errors = draft.validate(Locale::En);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(DraftField::EndTime),
            Some("End time must be after start time")
        );

        // An end equal to the start is a violation too
        draft.set_field(DraftField::EndTime, "09:30");
        let errors = draft.validate(Locale::En);
        assert_eq!(
            errors.get(DraftField::EndTime),
            Some("End time must be after start time")
        );
    }

    #[test]
    fn test_validate_messages_follow_locale() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::Ar, fixed_now());
        draft.set_field(DraftField::Title, "");

        let errors = draft.validate(Locale::Ar);
        assert_eq!(errors.get(DraftField::Title), Some("العنوان مطلوب"));
    }

    #[test]
    fn test_blank_project_id_clears_reference() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        draft.set_field(DraftField::ProjectId, "p-7");
        assert_eq!(draft.project_id.as_deref(), Some("p-7"));

        draft.set_field(DraftField::ProjectId, "   ");
        assert_eq!(draft.project_id, None);
    }

    #[test]
    fn test_payload_normalizes() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::StudySession, Locale::En, fixed_now());
        draft.set_field(DraftField::Title, "  Rust reading group  ");
        draft.set_field(DraftField::Description, "   ");
        draft.set_field(DraftField::ProjectId, "p-2");

        let payload = draft.payload().unwrap();
        assert_eq!(payload.title, "Rust reading group");
        assert_eq!(payload.description, None);
        assert_eq!(payload.project_id.as_deref(), Some("p-2"));
        assert_eq!(payload.start_time.to_rfc3339(), "2026-03-14T09:30:00+00:00");
    }

    #[test]
    fn test_payload_keeps_description_text() {
        let mut draft =
            SessionDraft::with_defaults(MeetingType::StudySession, Locale::En, fixed_now());
        draft.set_field(DraftField::Description, "Chapter 4 and 5");

        let payload = draft.payload().unwrap();
        assert_eq!(payload.description.as_deref(), Some("Chapter 4 and 5"));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = SessionDraft::with_defaults(MeetingType::ProjectMeeting, Locale::En, fixed_now());
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(value["meetingType"], "projectMeeting");
        assert_eq!(value["startDate"], "2026-03-14");
        assert_eq!(value["endTime"], "10:30");
    }
}
