//! Chat message types for the knowledge hub conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message typed by the user.
    User,
    /// Answer (or placeholder for one) from the knowledge hub.
    Assistant,
}

/// One bubble in the knowledge chat transcript.
///
/// Ids come from a per-conversation counter, so ascending id order is
/// display order. An assistant message starts out as a pending placeholder
/// and is resolved in place once the answer or a failure arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Still waiting for the assistant's answer.
    #[serde(default)]
    pub pending: bool,
    /// The answer failed; `content` carries a localized notice.
    #[serde(default)]
    pub error: bool,
}
