pub mod app;
pub mod commands;

use huddle_infrastructure::HuddlePaths;
use tracing_subscriber::EnvFilter;

/// Sets up tracing with a daily rolling file in the Huddle logs directory.
/// Falls back to stderr when the directory cannot be resolved. The returned
/// guard must stay alive for the lifetime of the app.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match HuddlePaths::logs_dir() {
        Ok(logs_dir) => {
            let appender = tracing_appender::rolling::daily(logs_dir, "huddle-desktop.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            tracing::warn!("[Startup] File logging disabled: {}", err);
            None
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _log_guard = init_tracing();
    tracing::info!("[Startup] Launching Huddle");

    let state = tauri::async_runtime::block_on(app::bootstrap())
        .expect("Failed to initialize application services");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(state)
        .invoke_handler(commands::handlers())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
