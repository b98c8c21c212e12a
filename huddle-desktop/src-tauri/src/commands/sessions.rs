use huddle_application::SubmitOutcome;
use huddle_core::meeting::{DraftField, MeetingType, WizardView};
use tauri::State;

use crate::app::AppState;

/// Gets the current state of the create-session wizard
#[tauri::command]
pub async fn wizard_view(state: State<'_, AppState>) -> Result<WizardView, String> {
    Ok(state.composer.view().await)
}

/// Starts a draft for the chosen session type
#[tauri::command]
pub async fn wizard_select_type(
    meeting_type: MeetingType,
    state: State<'_, AppState>,
) -> Result<WizardView, String> {
    Ok(state.composer.select_type(meeting_type).await)
}

/// Writes one field of the draft
#[tauri::command]
pub async fn wizard_set_field(
    field: DraftField,
    value: String,
    state: State<'_, AppState>,
) -> Result<WizardView, String> {
    Ok(state.composer.set_field(field, &value).await)
}

/// Returns to the type selection, keeping the draft
#[tauri::command]
pub async fn wizard_back(state: State<'_, AppState>) -> Result<WizardView, String> {
    Ok(state.composer.back().await)
}

/// Validates the draft and submits it to the scheduling backend
#[tauri::command]
pub async fn wizard_submit(state: State<'_, AppState>) -> Result<SubmitOutcome, String> {
    Ok(state.composer.submit().await)
}

/// Abandons the wizard, unless a submit is in flight
#[tauri::command]
pub async fn wizard_cancel(state: State<'_, AppState>) -> Result<WizardView, String> {
    Ok(state.composer.cancel().await)
}

/// Creates a session of the given type with defaults in one step
#[tauri::command]
pub async fn quick_create_session(
    meeting_type: MeetingType,
    state: State<'_, AppState>,
) -> Result<SubmitOutcome, String> {
    Ok(state.composer.quick_create(meeting_type).await)
}
