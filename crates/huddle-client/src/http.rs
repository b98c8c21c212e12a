//! HttpBackendClient - REST client for the Huddle backend service.
//!
//! One client instance owns one `reqwest::Client` configured from the
//! backend section of the app config. Every non-success response is mapped
//! to a `ServiceError`; callers decide how to surface it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use huddle_core::config::BackendConfig;
use huddle_core::error::{ServiceError, ServiceResult};
use huddle_core::knowledge::{KnowledgeAnswer, KnowledgeApi, KnowledgeQuery};
use huddle_core::meeting::{CreateSessionPayload, CreatedSession, Meeting, SchedulingApi};
use huddle_core::project::{Project, ProjectApi, ProjectDetail};

/// REST client for the Huddle backend.
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    client: Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Creates a client with the configured base URL and request timeout.
    pub fn new(config: &BackendConfig) -> ServiceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| {
                ServiceError::transport(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> ServiceResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        debug!("[HttpBackendClient] GET /{}", path);
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(request_error)?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + Sync,
        T: for<'de> Deserialize<'de>,
    {
        debug!("[HttpBackendClient] POST /{}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(request_error)?;
        decode(response).await
    }
}

#[async_trait]
impl SchedulingApi for HttpBackendClient {
    async fn create_session(
        &self,
        payload: &CreateSessionPayload,
    ) -> ServiceResult<CreatedSession> {
        self.post_json("sessions", payload).await
    }

    async fn list_meetings(&self) -> ServiceResult<Vec<Meeting>> {
        self.get_json("meetings").await
    }
}

#[async_trait]
impl KnowledgeApi for HttpBackendClient {
    async fn query_knowledge(&self, query: &KnowledgeQuery) -> ServiceResult<KnowledgeAnswer> {
        self.post_json("knowledge/query", query).await
    }
}

#[async_trait]
impl ProjectApi for HttpBackendClient {
    async fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        self.get_json("projects").await
    }

    async fn project_detail(&self, id: &str) -> ServiceResult<Option<ProjectDetail>> {
        match self.get_json(&format!("projects/{id}")).await {
            Ok(detail) => Ok(Some(detail)),
            Err(ServiceError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

fn request_error(err: reqwest::Error) -> ServiceError {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else {
        "request"
    };
    warn!("[HttpBackendClient] {} failure: {}", kind, err);
    ServiceError::transport(format!("{kind} failure: {err}"))
}

async fn decode<T>(response: reqwest::Response) -> ServiceResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".to_string());
        return Err(map_http_error(status, &body));
    }

    response
        .json()
        .await
        .map_err(|err| ServiceError::payload(format!("failed to decode response body: {err}")))
}

/// Error responses carry `{"message": …}` or `{"error": …}`; anything else
/// falls back to a snippet of the raw body.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn map_http_error(status: StatusCode, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .unwrap_or_else(|| snippet(body));
    warn!("[HttpBackendClient] backend returned {}: {}", status, message);
    ServiceError::status(status.as_u16(), message)
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    body.trim().chars().take(MAX_CHARS).collect()
}
