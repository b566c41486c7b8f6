//! Webhook trigger trait definition.
//!
//! A webhook trigger node registers itself with an external service so
//! that the service calls the node's host-owned webhook URL. The host
//! drives the lifecycle: `check_exists` on resume, `create` on enable,
//! `delete` on disable, and `webhook` for every inbound call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::credential::CredentialData;
use crate::error::TriggerError;
use crate::node::NodeDescriptor;
use crate::static_data::StaticDataStore;
use crate::webhook::{WebhookRequest, WebhookResponse};

/// Context passed to trigger lifecycle calls.
#[derive(Clone)]
pub struct TriggerContext {
    /// Node parameter values keyed by property name.
    pub parameters: serde_json::Value,

    /// Decrypted credentials for the node's credential type.
    pub credentials: CredentialData,

    /// Externally reachable URL of the node's webhook endpoint.
    pub webhook_url: String,

    /// Per-node static data owned by the host.
    pub static_data: Arc<dyn StaticDataStore>,
}

impl TriggerContext {
    /// Create a new trigger context.
    pub fn new(
        parameters: serde_json::Value,
        credentials: CredentialData,
        webhook_url: impl Into<String>,
        static_data: Arc<dyn StaticDataStore>,
    ) -> Self {
        Self {
            parameters,
            credentials,
            webhook_url: webhook_url.into(),
            static_data,
        }
    }

    /// Get a parameter value by property name.
    pub fn get_parameter<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.parameters
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Core trait for webhook-backed trigger nodes.
///
/// The host guarantees per-instance serialization of lifecycle calls and
/// never calls `create` while the trigger is already registered.
#[async_trait]
pub trait WebhookTrigger: Send + Sync + 'static {
    /// Returns the node descriptor.
    fn descriptor(&self) -> &NodeDescriptor;

    /// Whether the remote registration backing this trigger still exists.
    ///
    /// Best-effort: any failure reads as "does not exist". Never raises.
    async fn check_exists(&self, ctx: &TriggerContext) -> bool;

    /// Register the trigger with the external service.
    ///
    /// Returns `false` when the service accepted the request but did not
    /// return a usable registration.
    async fn create(&self, ctx: &TriggerContext) -> Result<bool, TriggerError>;

    /// Remove the remote registration.
    ///
    /// Deleting an unregistered trigger is a no-op reported as success.
    async fn delete(&self, ctx: &TriggerContext) -> Result<bool, TriggerError>;

    /// Translate one inbound webhook call into workflow output.
    async fn webhook(&self, request: WebhookRequest) -> WebhookResponse;
}
