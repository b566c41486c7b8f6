//! Remote job lifecycle.
//!
//! Keeps at most one Cronlytic job per trigger instance across
//! enable/disable/resume cycles. Only the job id is retained locally, in
//! the host's static data bag; the job itself lives on the remote
//! service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use flowhook_protocols::error::TriggerError;
use flowhook_protocols::static_data::StaticDataStore;
use flowhook_protocols::types::HttpMethod;

use crate::api::JobRequest;
use crate::client::CronlyticClient;

/// Static data key holding the remote job id.
pub const JOB_ID_KEY: &str = "jobId";

/// Identifies webhook calls originating from jobs created here.
const WEBHOOK_USER_AGENT: &str = "flowhook-cronlytic-trigger";

/// One name/value header pair supplied by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderPair {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// What to create remotely.
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// Unique per-user job name (alphanumerics, hyphens, underscores).
    pub name: String,
    /// Host-owned callback URL the job will POST to.
    pub url: String,
    /// 5-field cron expression.
    pub cron_expression: String,
    /// JSON text sent as the webhook body.
    pub body: Option<String>,
    /// Extra headers sent with webhook calls.
    pub headers: Vec<HeaderPair>,
}

/// Build the webhook header set: fixed entries overlaid with user pairs.
///
/// Pairs with an empty name or value are dropped; user entries win on
/// collision.
pub fn build_headers(user: &[HeaderPair]) -> HashMap<String, String> {
    let mut headers = HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("User-Agent".to_string(), WEBHOOK_USER_AGENT.to_string()),
    ]);

    for pair in user {
        if !pair.name.is_empty() && !pair.value.is_empty() {
            headers.insert(pair.name.clone(), pair.value.clone());
        }
    }

    headers
}

/// Read the job id stored for this trigger instance, if any.
pub fn stored_job_id(static_data: &dyn StaticDataStore) -> Option<String> {
    match static_data.get(JOB_ID_KEY) {
        Some(Value::String(id)) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Lifecycle operations for the remote job backing one trigger instance.
pub struct JobLifecycle<'a> {
    client: &'a CronlyticClient,
    static_data: &'a dyn StaticDataStore,
}

impl<'a> JobLifecycle<'a> {
    pub fn new(client: &'a CronlyticClient, static_data: &'a dyn StaticDataStore) -> Self {
        Self {
            client,
            static_data,
        }
    }

    /// Whether the remote job still exists.
    ///
    /// Best-effort: without a stored id no network call is made, and any
    /// failure reads as "does not exist". Never fails.
    pub async fn check_exists(&self) -> bool {
        let Some(job_id) = stored_job_id(self.static_data) else {
            return false;
        };

        if let Err(e) = self.client.warm_up().await {
            debug!("Existence check aborted: {}", e);
            return false;
        }

        match self.client.get_job(&job_id).await {
            Ok(job) => job.is_some(),
            Err(e) => {
                debug!("Existence check failed for job {}: {}", job_id, e);
                false
            }
        }
    }

    /// Create the remote job and store its id.
    ///
    /// Returns `false` without storing anything when the service answered
    /// without a job id. Every other failure is fatal.
    pub async fn create(&self, spec: &JobSpec) -> Result<bool, TriggerError> {
        self.create_inner(spec)
            .await
            .map_err(|e| TriggerError::CreateFailed(e.to_string()))
    }

    async fn create_inner(&self, spec: &JobSpec) -> Result<bool, TriggerError> {
        self.client.warm_up().await?;

        let request = JobRequest {
            name: spec.name.clone(),
            url: spec.url.clone(),
            method: HttpMethod::Post,
            headers: build_headers(&spec.headers),
            body: spec
                .body
                .clone()
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| "{}".to_string()),
            cron_expression: spec.cron_expression.clone(),
        };

        let job = self.client.create_job(&request).await?;
        match job.job_id {
            Some(job_id) => {
                debug!("Created job {} for '{}'", job_id, spec.name);
                self.static_data.set(JOB_ID_KEY, Value::String(job_id));
                Ok(true)
            }
            None => {
                warn!("Create response for '{}' carried no job id", spec.name);
                Ok(false)
            }
        }
    }

    /// Delete the remote job.
    ///
    /// Without a stored id this is a no-op reported as success. A
    /// not-found answer means the job was removed out-of-band: the local
    /// id is cleared and the delete counts as successful. Any other
    /// failure is fatal and leaves the id in place for a later retry.
    pub async fn delete(&self) -> Result<bool, TriggerError> {
        let Some(job_id) = stored_job_id(self.static_data) else {
            return Ok(true);
        };

        match self.delete_inner(&job_id).await {
            Ok(()) => {
                self.static_data.remove(JOB_ID_KEY);
                Ok(true)
            }
            Err(e) if is_not_found(&e) => {
                debug!("Job {} was already deleted remotely", job_id);
                self.static_data.remove(JOB_ID_KEY);
                Ok(true)
            }
            Err(e) => Err(TriggerError::DeleteFailed(e.to_string())),
        }
    }

    async fn delete_inner(&self, job_id: &str) -> Result<(), TriggerError> {
        self.client.warm_up().await?;
        self.client.delete_job(job_id).await
    }
}

/// Whether an error indicates the job no longer exists remotely.
fn is_not_found(error: &TriggerError) -> bool {
    match error {
        TriggerError::Api { status: 404, .. } => true,
        other => other.to_string().to_lowercase().contains("not found"),
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
