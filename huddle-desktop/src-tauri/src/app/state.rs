use std::sync::Arc;

use huddle_application::{KnowledgeChat, MeetingDirectory, ProjectDirectory, SessionComposer};
use huddle_infrastructure::ConfigService;

/// Application state shared across Tauri commands.
pub struct AppState {
    pub config: Arc<ConfigService>,
    pub composer: Arc<SessionComposer>,
    pub chat: Arc<KnowledgeChat>,
    pub meetings: Arc<MeetingDirectory>,
    pub projects: Arc<ProjectDirectory>,
}
