pub mod directory;
pub mod knowledge;
pub mod sessions;
pub mod settings;

pub use directory::*;
pub use knowledge::*;
pub use sessions::*;
pub use settings::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        sessions::wizard_view,
        sessions::wizard_select_type,
        sessions::wizard_set_field,
        sessions::wizard_back,
        sessions::wizard_submit,
        sessions::wizard_cancel,
        sessions::quick_create_session,
        knowledge::chat_view,
        knowledge::chat_send,
        knowledge::chat_retry_last,
        knowledge::chat_clear,
        knowledge::chat_suggestions,
        directory::list_meetings,
        directory::list_projects,
        directory::project_detail,
        settings::get_config,
        settings::set_locale,
        settings::set_offline,
    ]
}
