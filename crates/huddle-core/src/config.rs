//! Application configuration model.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

fn default_base_url() -> String {
    "http://127.0.0.1:8998/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the Huddle backend service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Root configuration persisted as `config.toml` in the app config directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    /// Interface language, handed to every flow at construction.
    #[serde(default)]
    pub locale: Locale,
    /// When set, the bundled sample catalog is used instead of the backend.
    #[serde(default)]
    pub offline: bool,
}
