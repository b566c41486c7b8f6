//! Webhook call types.
//!
//! The host terminates the HTTP connection and hands the plugin an
//! already-parsed request; the plugin returns the records to emit into
//! the owning workflow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inbound webhook call, exactly as delivered by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Query parameters.
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub body: Value,
}

impl WebhookRequest {
    /// Create a request carrying only a body.
    pub fn new(body: Value) -> Self {
        Self {
            headers: HashMap::new(),
            query: HashMap::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

/// Workflow output produced for one webhook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Records emitted to the owning workflow.
    pub records: Vec<Value>,
}

impl WebhookResponse {
    /// A response carrying exactly one output record.
    pub fn single(record: Value) -> Self {
        Self {
            records: vec![record],
        }
    }
}
