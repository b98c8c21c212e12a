//! Project domain models and service contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::meeting::Meeting;

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

/// A project that sessions can be attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub member_count: u32,
}

/// A project together with its scheduled sessions, as shown on the project
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: Project,
    pub meetings: Vec<Meeting>,
}

/// Backend operations for browsing projects.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// All projects visible to the current user.
    async fn list_projects(&self) -> ServiceResult<Vec<Project>>;

    /// A project with its sessions. `None` when the project does not exist.
    async fn project_detail(&self, id: &str) -> ServiceResult<Option<ProjectDetail>>;
}
