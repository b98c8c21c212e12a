//! Single-flight conversation log for the knowledge chat.
//!
//! The log is pure state: `begin_query` appends the user message plus a
//! pending placeholder and hands back a ticket, a driver performs the
//! service call, and `finish_query` resolves the placeholder in place. At
//! most one query is ever in flight.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::i18n::Locale;

use super::message::{ChatMessage, ChatRole};
use super::service::{KnowledgeAnswer, KnowledgeQuery};

/// Whether a knowledge query is currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPhase {
    /// Ready to accept the next question.
    Idle,
    /// Waiting for the answer that will fill the given placeholder.
    AwaitingReply { placeholder_id: u64 },
}

/// Handle for an accepted query.
///
/// Carries what a driver needs to perform the call and hand the outcome
/// back to the right placeholder. The epoch ties the ticket to the
/// conversation it was issued for; `clear` invalidates outstanding tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub placeholder_id: u64,
    pub query: KnowledgeQuery,
    epoch: u64,
}

/// Serializable snapshot of the conversation for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
    pub error: Option<String>,
}

/// Conversation state for one knowledge chat session.
///
/// Invariants: at most one pending placeholder exists, a pending
/// placeholder sits immediately after its user message, and message ids
/// strictly increase in display order.
#[derive(Debug, Clone)]
pub struct ChatLog {
    locale: Locale,
    messages: Vec<ChatMessage>,
    phase: QueryPhase,
    next_id: u64,
    epoch: u64,
    error: Option<String>,
}

impl ChatLog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            messages: Vec::new(),
            phase: QueryPhase::Idle,
            next_id: 1,
            epoch: 0,
            error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        matches!(self.phase, QueryPhase::AwaitingReply { .. })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    fn mint_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Accepts a question: appends the user message and a pending assistant
    /// placeholder right after it, then moves to `AwaitingReply`.
    ///
    /// Blank input, and questions asked while an answer is already in
    /// flight, are rejected without touching the log.
    pub fn begin_query(&mut self, text: &str) -> Option<QueryTicket> {
        let text = text.trim();
        if text.is_empty() || self.is_awaiting_reply() {
            return None;
        }

        let now = Utc::now();
        let user_id = self.mint_id();
        self.messages.push(ChatMessage {
            id: user_id,
            role: ChatRole::User,
            content: text.to_string(),
            created_at: now,
            pending: false,
            error: false,
        });

        let placeholder_id = self.mint_id();
        self.messages.push(ChatMessage {
            id: placeholder_id,
            role: ChatRole::Assistant,
            content: String::new(),
            created_at: now,
            pending: true,
            error: false,
        });

        self.error = None;
        self.phase = QueryPhase::AwaitingReply { placeholder_id };

        Some(QueryTicket {
            placeholder_id,
            query: KnowledgeQuery::for_question(text),
            epoch: self.epoch,
        })
    }

    /// Resolves the placeholder named by `ticket` in place: same id, same
    /// position. Success fills in the answer; failure turns the placeholder
    /// into a localized notice and sets the session-level error.
    ///
    /// A ticket issued before the last `clear` is stale; its outcome is
    /// dropped without touching the log.
    pub fn finish_query(
        &mut self,
        ticket: &QueryTicket,
        outcome: Result<KnowledgeAnswer, ServiceError>,
    ) {
        if ticket.epoch != self.epoch {
            return;
        }

        if let Some(message) = self
            .messages
            .iter_mut()
            .find(|m| m.id == ticket.placeholder_id)
        {
            match outcome {
                Ok(answer) => {
                    message.content = answer.answer;
                    message.pending = false;
                    message.error = false;
                }
                Err(_) => {
                    message.content = text::answer_failed(self.locale).to_string();
                    message.pending = false;
                    message.error = true;
                    self.error = Some(text::answer_failed(self.locale).to_string());
                }
            }
        }
        self.phase = QueryPhase::Idle;
    }

    /// Content of the most recent user message, if any.
    pub fn last_user_text(&self) -> Option<String> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.clone())
    }

    /// Drops assistant bubbles that carry a failure notice. Called right
    /// before a retry so the failed bubble does not linger above the new
    /// attempt.
    pub fn drop_errored_replies(&mut self) {
        self.messages
            .retain(|m| !(m.role == ChatRole::Assistant && m.error));
    }

    /// Wipes the conversation. Any answer still in flight becomes stale and
    /// is discarded when it lands. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
        self.phase = QueryPhase::Idle;
        self.epoch += 1;
    }

    pub fn view(&self) -> ChatView {
        ChatView {
            messages: self.messages.clone(),
            awaiting_reply: self.is_awaiting_reply(),
            error: self.error.clone(),
        }
    }
}

mod text {
    use crate::i18n::Locale;

    pub fn answer_failed(locale: Locale) -> &'static str {
        locale.pick(
            "Sorry, I could not get an answer. Please try again.",
            "عذرًا، لم أتمكن من الحصول على إجابة. يرجى المحاولة مرة أخرى.",
        )
    }
}
