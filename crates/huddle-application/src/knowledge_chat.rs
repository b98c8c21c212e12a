//! Knowledge chat use case.
//!
//! `KnowledgeChat` drives the pure `ChatLog` over the knowledge service.
//! The log hands out a ticket under the lock, the query runs unlocked, and
//! the outcome is applied under the lock again. Tickets issued before a
//! `clear` land on a bumped epoch and are discarded by the log itself, so
//! a clear during an in-flight query needs no cancellation plumbing.

use std::sync::Arc;

use tokio::sync::Mutex;

use huddle_core::i18n::Locale;
use huddle_core::knowledge::{suggested_prompts, ChatLog, ChatView, KnowledgeApi};

/// Drives the knowledge chat over the knowledge service.
pub struct KnowledgeChat {
    log: Mutex<ChatLog>,
    knowledge: Arc<dyn KnowledgeApi>,
}

impl KnowledgeChat {
    pub fn new(locale: Locale, knowledge: Arc<dyn KnowledgeApi>) -> Self {
        Self {
            log: Mutex::new(ChatLog::new(locale)),
            knowledge,
        }
    }

    pub async fn view(&self) -> ChatView {
        self.log.lock().await.view()
    }

    pub async fn set_locale(&self, locale: Locale) {
        self.log.lock().await.set_locale(locale);
    }

    /// Starter questions for an empty conversation, in the current locale.
    pub async fn suggestions(&self) -> Vec<String> {
        let locale = self.log.lock().await.locale();
        suggested_prompts(locale)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Sends a question and resolves its placeholder when the answer lands.
    ///
    /// Blank input and questions asked while a reply is in flight leave the
    /// conversation untouched; the returned view reflects whatever state
    /// the log is in.
    pub async fn send(&self, text: &str) -> ChatView {
        let ticket = {
            let mut log = self.log.lock().await;
            match log.begin_query(text) {
                Some(ticket) => ticket,
                None => return log.view(),
            }
        };

        tracing::debug!("[KnowledgeChat] Querying knowledge hub");
        let outcome = self.knowledge.query_knowledge(&ticket.query).await;
        if let Err(err) = &outcome {
            tracing::warn!("[KnowledgeChat] Knowledge query failed: {}", err);
        }

        let mut log = self.log.lock().await;
        log.finish_query(&ticket, outcome);
        log.view()
    }

    /// Re-sends the most recent question through the normal pipeline,
    /// dropping any failure notice first. Does nothing when there is no
    /// question to repeat or a reply is already in flight.
    pub async fn retry_last(&self) -> ChatView {
        let last = {
            let mut log = self.log.lock().await;
            if log.is_awaiting_reply() {
                return log.view();
            }
            match log.last_user_text() {
                Some(text) => {
                    log.drop_errored_replies();
                    text
                }
                None => return log.view(),
            }
        };

        self.send(&last).await
    }

    /// Wipes the conversation. An answer still in flight becomes stale and
    /// is discarded when it arrives.
    pub async fn clear(&self) -> ChatView {
        let mut log = self.log.lock().await;
        log.clear();
        log.view()
    }
}
