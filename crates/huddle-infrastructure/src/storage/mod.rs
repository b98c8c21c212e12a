//! Storage layer for atomic file operations.

mod toml_store;

pub use toml_store::{StorageError, TomlStore};
