//! Atomic TOML file storage.
//!
//! A thin layer for safe access to TOML files: writes go through a
//! temporary file plus rename, updates take an exclusive lock file, and a
//! missing file reads as "nothing stored yet".

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

/// Errors that can occur during atomic TOML operations.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error.
    Io(std::io::Error),
    /// TOML parse error on load.
    Parse(toml::de::Error),
    /// TOML serialization error on save.
    Serialize(toml::ser::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Parse(e) => write!(f, "TOML parse error: {}", e),
            StorageError::Serialize(e) => write!(f, "TOML serialization error: {}", e),
            StorageError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        StorageError::Parse(e)
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        StorageError::Serialize(e)
    }
}

/// A handle to one TOML file with atomic writes.
///
/// Saves are all-or-nothing (temporary file in the same directory, fsync,
/// then rename) and `update` serializes concurrent writers through an
/// exclusive lock file next to the target.
pub struct TomlStore<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> TomlStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file. A missing or empty file reads as
    /// `None`; a present but unparseable file is an error.
    pub fn load(&self) -> Result<Option<T>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves the data atomically: temporary file in the same directory,
    /// fsync, then rename over the target. The parent directory is created
    /// on demand.
    pub fn save(&self, data: &T) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Transactional read-modify-write under an exclusive lock.
    ///
    /// `f` receives the stored data (or `default_value` when nothing is
    /// stored) and the result is written back atomically.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut T) -> Result<(), StorageError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    fn temp_path(&self) -> Result<PathBuf, StorageError> {
        let parent = self.path.parent().ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;
        let file_name = self.path.file_name().ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Lock guard backing `update`. Dropping it releases the lock and removes
/// the lock file on a best-effort basis.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| StorageError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        // Non-Unix platforms run without advisory locking; acceptable for a
        // single-user desktop app.

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_core::config::AppConfig;
    use huddle_core::i18n::Locale;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TomlStore<AppConfig> {
        TomlStore::new(dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut config = AppConfig::default();
        config.locale = Locale::Ar;
        config.offline = true;
        store.save(&config).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_unparseable_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "this is [ not toml").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_update_creates_then_edits() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .update(AppConfig::default(), |config| {
                config.locale = Locale::Ar;
                Ok(())
            })
            .unwrap();
        assert_eq!(store.load().unwrap().unwrap().locale, Locale::Ar);

        store
            .update(AppConfig::default(), |config| {
                config.offline = true;
                Ok(())
            })
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        // The earlier edit must survive the second update
        assert_eq!(loaded.locale, Locale::Ar);
        assert!(loaded.offline);
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store: TomlStore<AppConfig> =
            TomlStore::new(temp_dir.path().join("nested/dir/config.toml"));

        store.save(&AppConfig::default()).unwrap();

        assert!(store.path().exists());
        assert!(!temp_dir.path().join("nested/dir/.config.toml.tmp").exists());
    }
}
