use std::sync::Arc;

use anyhow::{anyhow, Result};

use huddle_application::{KnowledgeChat, MeetingDirectory, ProjectDirectory, SessionComposer};
use huddle_client::{HttpBackendClient, SampleCatalog};
use huddle_core::knowledge::KnowledgeApi;
use huddle_core::meeting::SchedulingApi;
use huddle_core::project::ProjectApi;
use huddle_infrastructure::ConfigService;

use crate::app::AppState;

/// Builds every service the commands need, honoring the persisted
/// configuration. Offline mode and an unreachable backend both land on the
/// sample catalog, so the app always starts with working data.
pub async fn bootstrap() -> Result<AppState> {
    // Composition root: wire concrete services behind the trait objects
    let config_service = Arc::new(
        ConfigService::new().map_err(|e| anyhow!("Failed to locate the config directory: {}", e))?,
    );
    let config = config_service.get();

    tracing::info!(
        "[Bootstrap] Locale: {}, offline: {}, backend: {}",
        config.locale.tag(),
        config.offline,
        config.backend.base_url
    );

    let samples = Arc::new(SampleCatalog::new());

    let (scheduling, knowledge, project): (
        Arc<dyn SchedulingApi>,
        Arc<dyn KnowledgeApi>,
        Arc<dyn ProjectApi>,
    ) = if config.offline {
        tracing::info!("[Bootstrap] Offline mode, serving the sample catalog");
        (samples.clone(), samples.clone(), samples.clone())
    } else {
        match HttpBackendClient::new(&config.backend) {
            Ok(client) => {
                let client = Arc::new(client);
                (client.clone(), client.clone(), client)
            }
            Err(err) => {
                tracing::warn!(
                    "[Bootstrap] Backend client unavailable, serving the sample catalog: {}",
                    err
                );
                (samples.clone(), samples.clone(), samples.clone())
            }
        }
    };

    let composer = Arc::new(SessionComposer::new(config.locale, scheduling.clone()));
    let chat = Arc::new(KnowledgeChat::new(config.locale, knowledge));
    let meetings = Arc::new(MeetingDirectory::new(
        scheduling,
        samples.clone() as Arc<dyn SchedulingApi>,
    ));
    let projects = Arc::new(ProjectDirectory::new(project, samples as Arc<dyn ProjectApi>));

    Ok(AppState {
        config: config_service,
        composer,
        chat,
        meetings,
        projects,
    })
}
