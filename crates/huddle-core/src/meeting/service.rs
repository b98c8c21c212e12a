//! Scheduling service contract.

use async_trait::async_trait;

use crate::error::ServiceResult;

use super::model::{CreateSessionPayload, CreatedSession, Meeting};

/// Backend operations for scheduling and listing sessions.
///
/// Implementations live in `huddle-client`: the HTTP backend client and the
/// bundled sample catalog.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    /// Creates a session and returns its backend id.
    async fn create_session(&self, payload: &CreateSessionPayload)
    -> ServiceResult<CreatedSession>;

    /// All sessions visible to the current user.
    async fn list_meetings(&self) -> ServiceResult<Vec<Meeting>>;
}
