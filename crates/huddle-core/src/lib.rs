pub mod config;
pub mod error;
pub mod i18n;
pub mod knowledge;
pub mod meeting;
pub mod project;

// Re-export common error type
pub use error::{ServiceError, ServiceResult};
