use huddle_application::{MeetingListing, ProjectListing};
use huddle_core::project::ProjectDetail;
use tauri::State;

use crate::app::AppState;

/// Lists meetings, newest first, optionally filtered
#[tauri::command]
pub async fn list_meetings(
    filter: Option<String>,
    state: State<'_, AppState>,
) -> Result<MeetingListing, String> {
    state
        .meetings
        .list(filter.as_deref())
        .await
        .map_err(|e| e.to_string())
}

/// Lists projects, optionally filtered
#[tauri::command]
pub async fn list_projects(
    filter: Option<String>,
    state: State<'_, AppState>,
) -> Result<ProjectListing, String> {
    state
        .projects
        .list(filter.as_deref())
        .await
        .map_err(|e| e.to_string())
}

/// Gets a project with its linked meetings, or `None` when it does not exist
#[tauri::command]
pub async fn project_detail(
    project_id: String,
    state: State<'_, AppState>,
) -> Result<Option<ProjectDetail>, String> {
    state
        .projects
        .detail(&project_id)
        .await
        .map_err(|e| e.to_string())
}
