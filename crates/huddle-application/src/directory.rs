//! Meeting and project directories.
//!
//! Listings are backend-first: the primary API answers when it can, and on
//! a service error the sample catalog steps in. Each listing records which
//! source produced it so the frontend can badge demo data.

use std::cmp::Reverse;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use huddle_core::error::ServiceResult;
use huddle_core::meeting::{Meeting, SchedulingApi};
use huddle_core::project::{Project, ProjectApi, ProjectDetail};

/// Which service produced a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingSource {
    Backend,
    Samples,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListing {
    pub meetings: Vec<Meeting>,
    pub source: ListingSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    pub source: ListingSource,
}

/// Lowercased filter text, or `None` when the filter is blank.
fn normalized(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
}

fn matches_filter(needle: &str, primary: &str, description: Option<&str>) -> bool {
    primary.to_lowercase().contains(needle)
        || description
            .map(|d| d.to_lowercase().contains(needle))
            .unwrap_or(false)
}

/// Lists meetings from the backend, with the sample catalog as fallback.
pub struct MeetingDirectory {
    primary: Arc<dyn SchedulingApi>,
    fallback: Arc<dyn SchedulingApi>,
}

impl MeetingDirectory {
    pub fn new(primary: Arc<dyn SchedulingApi>, fallback: Arc<dyn SchedulingApi>) -> Self {
        Self { primary, fallback }
    }

    /// Lists meetings newest first, optionally filtered by a
    /// case-insensitive substring over title and description.
    pub async fn list(&self, filter: Option<&str>) -> ServiceResult<MeetingListing> {
        let (mut meetings, source) = match self.primary.list_meetings().await {
            Ok(meetings) => (meetings, ListingSource::Backend),
            Err(err) => {
                tracing::warn!(
                    "[MeetingDirectory] Backend listing failed, serving samples: {}",
                    err
                );
                (self.fallback.list_meetings().await?, ListingSource::Samples)
            }
        };

        if let Some(needle) = normalized(filter) {
            meetings.retain(|m| matches_filter(&needle, &m.title, m.description.as_deref()));
        }
        meetings.sort_by_key(|m| Reverse(m.start_time));

        Ok(MeetingListing { meetings, source })
    }
}

/// Lists projects and project details, same backend-first policy.
pub struct ProjectDirectory {
    primary: Arc<dyn ProjectApi>,
    fallback: Arc<dyn ProjectApi>,
}

impl ProjectDirectory {
    pub fn new(primary: Arc<dyn ProjectApi>, fallback: Arc<dyn ProjectApi>) -> Self {
        Self { primary, fallback }
    }

    pub async fn list(&self, filter: Option<&str>) -> ServiceResult<ProjectListing> {
        let (mut projects, source) = match self.primary.list_projects().await {
            Ok(projects) => (projects, ListingSource::Backend),
            Err(err) => {
                tracing::warn!(
                    "[ProjectDirectory] Backend listing failed, serving samples: {}",
                    err
                );
                (self.fallback.list_projects().await?, ListingSource::Samples)
            }
        };

        if let Some(needle) = normalized(filter) {
            projects.retain(|p| matches_filter(&needle, &p.name, p.description.as_deref()));
        }

        Ok(ProjectListing { projects, source })
    }

    /// A project with its linked meetings. A backend `None` means the
    /// project does not exist; only a service error triggers the fallback.
    pub async fn detail(&self, id: &str) -> ServiceResult<Option<ProjectDetail>> {
        match self.primary.project_detail(id).await {
            Ok(detail) => Ok(detail),
            Err(err) => {
                tracing::warn!(
                    "[ProjectDirectory] Backend detail failed, serving samples: {}",
                    err
                );
                self.fallback.project_detail(id).await
            }
        }
    }
}
