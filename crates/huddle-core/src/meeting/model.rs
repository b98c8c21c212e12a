//! Meeting domain models and create-session wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Kind of session a user can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeetingType {
    /// A meeting attached to project work.
    ProjectMeeting,
    /// A shared study or reading session.
    StudySession,
}

impl MeetingType {
    /// Localized display label, also used in computed default titles.
    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            MeetingType::ProjectMeeting => locale.pick("Project meeting", "اجتماع مشروع"),
            MeetingType::StudySession => locale.pick("Study session", "جلسة دراسية"),
        }
    }
}

/// A scheduled meeting or study session as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub meeting_type: MeetingType,
    #[serde(default)]
    pub project_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Meeting {
    /// Whether the meeting has not started yet at `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }
}

/// Request body of the create-session endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionPayload {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub meeting_type: MeetingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Response body of the create-session endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedSession {
    pub id: String,
}
