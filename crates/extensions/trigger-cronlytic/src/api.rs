//! Cronlytic API types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use flowhook_protocols::types::HttpMethod;

/// Response from `GET /ping`.
#[derive(Debug, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Request body for `POST /jobs`.
#[derive(Debug, Clone, Serialize)]
pub struct JobRequest {
    /// Unique per-user job name.
    pub name: String,
    /// Callback URL invoked on schedule.
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    /// JSON text forwarded as the webhook body.
    pub body: String,
    pub cron_expression: String,
}

/// A job as returned by the API.
///
/// Only `job_id` matters to this extension; everything else is kept
/// loosely typed because the service owns the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub cron_expression: Option<String>,
}

/// Structured error body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}
