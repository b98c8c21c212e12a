//! Knowledge hub service contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::i18n::Locale;

/// Options sent with every knowledge query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeQuery {
    pub query: String,
    pub include_documents: bool,
    pub include_meetings: bool,
    pub limit: u32,
}

impl KnowledgeQuery {
    /// The chat always asks with the same retrieval options: documents and
    /// meetings included, at most five sources.
    pub fn for_question(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_documents: true,
            include_meetings: true,
            limit: 5,
        }
    }
}

/// Answer returned by the knowledge hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeAnswer {
    pub answer: String,
}

/// Backend operations for the knowledge hub.
#[async_trait]
pub trait KnowledgeApi: Send + Sync {
    /// Answers a question grounded in the organization's documents and
    /// past meetings.
    async fn query_knowledge(&self, query: &KnowledgeQuery) -> ServiceResult<KnowledgeAnswer>;
}

/// Starter questions shown over an empty conversation.
pub fn suggested_prompts(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &[
            "What did we decide in the last project meeting?",
            "Summarize the onboarding documents",
            "When is the next study session?",
        ],
        Locale::Ar => &[
            "ما الذي قررناه في اجتماع المشروع الأخير؟",
            "لخص مستندات التهيئة",
            "متى الجلسة الدراسية القادمة؟",
        ],
    }
}
