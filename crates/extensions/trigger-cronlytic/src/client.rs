//! HTTP client for the Cronlytic API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use flowhook_protocols::error::TriggerError;

use crate::api::{ApiErrorBody, Job, JobRequest, PingResponse};
use crate::credentials::CronlyticCredentials;
use crate::retry::{retry, RetryConfig};

/// Production API base URL.
pub const BASE_URL: &str = "https://api.cronlytic.com/prog";

/// Timeout for warm-up probes.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for authenticated calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Cronlytic programmatic API.
///
/// The backend is serverless and prone to cold starts; callers are
/// expected to [`warm_up`](Self::warm_up) before state-changing calls.
pub struct CronlyticClient {
    base_url: String,
    http: reqwest::Client,
    auth_headers: HashMap<String, String>,
    warm_up_config: RetryConfig,
}

impl CronlyticClient {
    /// Client against the production base URL.
    pub fn new(credentials: &CronlyticCredentials) -> Self {
        Self::with_base_url(credentials, BASE_URL)
    }

    /// Client against a non-default base URL.
    pub fn with_base_url(credentials: &CronlyticCredentials, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            auth_headers: credentials.header_map(),
            warm_up_config: RetryConfig::default(),
        }
    }

    /// Override the warm-up retry schedule.
    pub fn with_warm_up_config(mut self, config: RetryConfig) -> Self {
        self.warm_up_config = config;
        self
    }

    /// One unauthenticated readiness probe against `GET /ping`.
    async fn ping(&self) -> Result<(), TriggerError> {
        let url = format!("{}/ping", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map_err(|e| TriggerError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TriggerError::Network(e.to_string()))?;

        match serde_json::from_str::<PingResponse>(&body) {
            Ok(ping) if ping.message == "pong" => Ok(()),
            _ => Err(TriggerError::Network(format!(
                "unexpected ping response: {}",
                body
            ))),
        }
    }

    /// Warm the backend before state-changing calls.
    ///
    /// Retries with exponential backoff; exhaustion is fatal and is not
    /// retried again by callers.
    pub async fn warm_up(&self) -> Result<(), TriggerError> {
        let attempts = self.warm_up_config.max_attempts;
        retry(&self.warm_up_config, |attempt| {
            debug!("Warm-up attempt {}/{}", attempt, attempts);
            self.ping()
        })
        .await
        .map_err(|e| TriggerError::WarmUpFailed {
            attempts,
            message: e.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, &url).timeout(REQUEST_TIMEOUT);
        for (name, value) in &self.auth_headers {
            builder = builder.header(name, value);
        }
        builder
    }

    /// Send an authenticated request, decoding error responses into the
    /// most specific message available.
    async fn send_request(&self, builder: RequestBuilder) -> Result<reqwest::Response, TriggerError> {
        let response = builder
            .send()
            .await
            .map_err(|e| TriggerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("request failed")
                            .to_string()
                    } else {
                        body
                    }
                });
            return Err(TriggerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Fetch one job. `None` when the service answers with a null body.
    pub async fn get_job(&self, job_id: &str) -> Result<Option<Job>, TriggerError> {
        let response = self
            .send_request(self.request(Method::GET, &format!("/jobs/{}", job_id)))
            .await?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| TriggerError::Network(e.to_string()))?;

        if value.is_null() {
            return Ok(None);
        }

        let job = serde_json::from_value(value).map_err(|e| TriggerError::Network(e.to_string()))?;
        Ok(Some(job))
    }

    /// Create a job. The returned object carries `job_id` on success.
    pub async fn create_job(&self, request: &JobRequest) -> Result<Job, TriggerError> {
        let response = self
            .send_request(self.request(Method::POST, "/jobs").json(request))
            .await?;

        response
            .json()
            .await
            .map_err(|e| TriggerError::Network(e.to_string()))
    }

    /// Delete a job.
    pub async fn delete_job(&self, job_id: &str) -> Result<(), TriggerError> {
        self.send_request(self.request(Method::DELETE, &format!("/jobs/{}", job_id)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
