//! Application layer for Huddle.
//!
//! Use case services that drive the pure core flows over the backend
//! service traits: the create-session composer, the knowledge chat, and
//! the browsing directories.

pub mod directory;
pub mod knowledge_chat;
pub mod scheduling;

pub use directory::{
    ListingSource, MeetingDirectory, MeetingListing, ProjectDirectory, ProjectListing,
};
pub use knowledge_chat::KnowledgeChat;
pub use scheduling::{SessionComposer, SubmitOutcome};
