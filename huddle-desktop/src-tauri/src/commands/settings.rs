use huddle_core::config::AppConfig;
use huddle_core::i18n::Locale;
use tauri::State;

use crate::app::AppState;

/// Gets the persisted application configuration
#[tauri::command]
pub async fn get_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    Ok(state.config.get())
}

/// Switches the interface language and applies it to the running flows
#[tauri::command]
pub async fn set_locale(locale: Locale, state: State<'_, AppState>) -> Result<AppConfig, String> {
    let config = state.config.set_locale(locale).map_err(|e| e.to_string())?;
    state.composer.set_locale(locale).await;
    state.chat.set_locale(locale).await;
    tracing::info!("[Settings] Locale switched to {}", locale.tag());
    Ok(config)
}

/// Toggles offline mode. The service wiring follows on the next launch.
#[tauri::command]
pub async fn set_offline(offline: bool, state: State<'_, AppState>) -> Result<AppConfig, String> {
    state.config.set_offline(offline).map_err(|e| e.to_string())
}
