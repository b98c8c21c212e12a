use huddle_core::knowledge::ChatView;
use tauri::State;

use crate::app::AppState;

/// Gets the current conversation snapshot
#[tauri::command]
pub async fn chat_view(state: State<'_, AppState>) -> Result<ChatView, String> {
    Ok(state.chat.view().await)
}

/// Sends a question to the knowledge hub
#[tauri::command]
pub async fn chat_send(text: String, state: State<'_, AppState>) -> Result<ChatView, String> {
    Ok(state.chat.send(&text).await)
}

/// Repeats the last question after a failure
#[tauri::command]
pub async fn chat_retry_last(state: State<'_, AppState>) -> Result<ChatView, String> {
    Ok(state.chat.retry_last().await)
}

/// Wipes the conversation
#[tauri::command]
pub async fn chat_clear(state: State<'_, AppState>) -> Result<ChatView, String> {
    Ok(state.chat.clear().await)
}

/// Gets the starter questions for an empty conversation
#[tauri::command]
pub async fn chat_suggestions(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    Ok(state.chat.suggestions().await)
}
