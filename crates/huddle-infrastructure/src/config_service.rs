//! Configuration service implementation.
//!
//! Loads the app configuration from config.toml in the Huddle config
//! directory, caches it, and persists updates atomically.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::warn;

use huddle_core::config::AppConfig;
use huddle_core::i18n::Locale;

use crate::paths::{HuddlePaths, PathError};
use crate::storage::{StorageError, TomlStore};

/// Loads, caches, and updates the persisted app configuration.
#[derive(Clone)]
pub struct ConfigService {
    store: Arc<TomlStore<AppConfig>>,
    /// Cached configuration. RwLock for thread-safe lazy loading.
    cache: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service over the default config file location.
    pub fn new() -> Result<Self, PathError> {
        Ok(Self::with_path(HuddlePaths::config_file()?))
    }

    /// Creates a service over an explicit file. Used by tests and portable
    /// installs.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            store: Arc::new(TomlStore::new(path)),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Current configuration, loading it on first access.
    ///
    /// A missing file is written out with defaults so later updates have a
    /// file to edit. An unreadable file falls back to defaults for this run
    /// without overwriting whatever is on disk.
    pub fn get(&self) -> AppConfig {
        {
            let read_lock = self.cache.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_or_init();

        {
            let mut write_lock = self.cache.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    fn load_or_init(&self) -> AppConfig {
        match self.store.load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = AppConfig::default();
                if let Err(err) = self.store.save(&config) {
                    warn!("[ConfigService] Could not write default config: {}", err);
                }
                config
            }
            Err(err) => {
                warn!(
                    "[ConfigService] Could not read config, using defaults: {}",
                    err
                );
                AppConfig::default()
            }
        }
    }

    /// Applies `f` to the stored configuration, persists it atomically, and
    /// refreshes the cache. Returns the updated configuration.
    pub fn update<F>(&self, f: F) -> Result<AppConfig, StorageError>
    where
        F: FnOnce(&mut AppConfig),
    {
        self.store.update(AppConfig::default(), |config| {
            f(config);
            Ok(())
        })?;

        let updated = self.store.load()?.unwrap_or_default();
        {
            let mut write_lock = self.cache.write().unwrap();
            *write_lock = Some(updated.clone());
        }
        Ok(updated)
    }

    pub fn set_locale(&self, locale: Locale) -> Result<AppConfig, StorageError> {
        self.update(|config| config.locale = locale)
    }

    pub fn set_offline(&self, offline: bool) -> Result<AppConfig, StorageError> {
        self.update(|config| config.offline = offline)
    }

    /// Replaces the backend connection settings.
    pub fn set_backend(
        &self,
        base_url: String,
        timeout_secs: u64,
    ) -> Result<AppConfig, StorageError> {
        self.update(|config| {
            config.backend.base_url = base_url;
            config.backend.timeout_secs = timeout_secs;
        })
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.cache.write().unwrap();
        *write_lock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> ConfigService {
        ConfigService::with_path(dir.path().join("config.toml"))
    }

    #[test]
    fn test_first_access_creates_default_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        let config = service.get();
        assert_eq!(config, AppConfig::default());
        assert!(temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_set_locale_persists_across_services() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        let updated = service.set_locale(Locale::Ar).unwrap();
        assert_eq!(updated.locale, Locale::Ar);
        assert_eq!(service.get().locale, Locale::Ar);

        // A fresh service over the same file sees the change
        let reopened = service_in(&temp_dir);
        assert_eq!(reopened.get().locale, Locale::Ar);
    }

    #[test]
    fn test_update_refreshes_cache() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);
        assert!(!service.get().offline);

        service.set_offline(true).unwrap();
        assert!(service.get().offline);
    }

    #[test]
    fn test_unreadable_config_falls_back_without_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get(), AppConfig::default());

        // The broken file must be left alone for manual repair
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "not [ valid toml");
    }

    #[test]
    fn test_set_backend() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        let updated = service
            .set_backend("https://huddle.example.com/api".to_string(), 10)
            .unwrap();
        assert_eq!(updated.backend.base_url, "https://huddle.example.com/api");
        assert_eq!(updated.backend.timeout_secs, 10);
    }
}
