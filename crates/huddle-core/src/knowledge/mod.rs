//! Knowledge hub module.
//!
//! The chat transcript with its single-flight query state machine, and the
//! knowledge service contract.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`ChatMessage`, `ChatRole`)
//! - `chat`: Conversation state machine (`ChatLog`, `QueryPhase`)
//! - `service`: Knowledge service trait and wire types (`KnowledgeApi`,
//!   `KnowledgeQuery`, `KnowledgeAnswer`)

mod chat;
mod message;
mod service;

// Re-export public API
pub use chat::{ChatLog, ChatView, QueryPhase, QueryTicket};
pub use message::{ChatMessage, ChatRole};
pub use service::{KnowledgeAnswer, KnowledgeApi, KnowledgeQuery, suggested_prompts};
