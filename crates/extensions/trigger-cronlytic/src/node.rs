//! Cronlytic trigger node.

use async_trait::async_trait;
use serde::Deserialize;

use flowhook_protocols::error::TriggerError;
use flowhook_protocols::node::{
    ConnectionType, CredentialRef, NodeDescriptor, NodeGroup, NodeProperty, PropertyKind,
    ResponseMode, WebhookDescriptor,
};
use flowhook_protocols::trigger::{TriggerContext, WebhookTrigger};
use flowhook_protocols::types::HttpMethod;
use flowhook_protocols::webhook::{WebhookRequest, WebhookResponse};

use crate::client::{CronlyticClient, BASE_URL};
use crate::credentials::CronlyticCredentials;
use crate::lifecycle::{stored_job_id, HeaderPair, JobLifecycle, JobSpec};
use crate::retry::RetryConfig;
use crate::webhook::handle_webhook;

/// Node parameter values as collected by the host.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TriggerParameters {
    job_name: String,
    cron_expression: String,
    #[serde(default)]
    webhook_body: Option<String>,
    #[serde(default)]
    webhook_headers: HeadersCollection,
}

/// Repeated name/value pairs as the host delivers a collection property.
#[derive(Debug, Default, Deserialize)]
struct HeadersCollection {
    #[serde(default)]
    headers: Vec<HeaderPair>,
}

/// Trigger node backed by a Cronlytic-scheduled cron job.
pub struct CronlyticTrigger {
    descriptor: NodeDescriptor,
    base_url: String,
    warm_up_config: RetryConfig,
}

impl CronlyticTrigger {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Trigger bound to a non-default API base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            descriptor: build_descriptor(),
            base_url: base_url.into(),
            warm_up_config: RetryConfig::default(),
        }
    }

    /// Override the warm-up retry schedule.
    pub fn with_warm_up_config(mut self, config: RetryConfig) -> Self {
        self.warm_up_config = config;
        self
    }

    fn client(&self, ctx: &TriggerContext) -> Result<CronlyticClient, TriggerError> {
        let credentials = CronlyticCredentials::try_from(&ctx.credentials)?;
        Ok(CronlyticClient::with_base_url(&credentials, &self.base_url)
            .with_warm_up_config(self.warm_up_config.clone()))
    }

    fn job_spec(ctx: &TriggerContext) -> Result<JobSpec, TriggerError> {
        let params: TriggerParameters = serde_json::from_value(ctx.parameters.clone())
            .map_err(|e| TriggerError::InvalidParameters(e.to_string()))?;

        Ok(JobSpec {
            name: params.job_name,
            url: ctx.webhook_url.clone(),
            cron_expression: params.cron_expression,
            body: params.webhook_body,
            headers: params.webhook_headers.headers,
        })
    }
}

impl Default for CronlyticTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookTrigger for CronlyticTrigger {
    fn descriptor(&self) -> &NodeDescriptor {
        &self.descriptor
    }

    async fn check_exists(&self, ctx: &TriggerContext) -> bool {
        let Ok(client) = self.client(ctx) else {
            return false;
        };
        JobLifecycle::new(&client, ctx.static_data.as_ref())
            .check_exists()
            .await
    }

    async fn create(&self, ctx: &TriggerContext) -> Result<bool, TriggerError> {
        let spec =
            Self::job_spec(ctx).map_err(|e| TriggerError::CreateFailed(e.to_string()))?;
        let client = self
            .client(ctx)
            .map_err(|e| TriggerError::CreateFailed(e.to_string()))?;

        JobLifecycle::new(&client, ctx.static_data.as_ref())
            .create(&spec)
            .await
    }

    async fn delete(&self, ctx: &TriggerContext) -> Result<bool, TriggerError> {
        // Nothing stored means nothing to delete; skip credential parsing
        // and network entirely.
        if stored_job_id(ctx.static_data.as_ref()).is_none() {
            return Ok(true);
        }

        let client = self
            .client(ctx)
            .map_err(|e| TriggerError::DeleteFailed(e.to_string()))?;

        JobLifecycle::new(&client, ctx.static_data.as_ref())
            .delete()
            .await
    }

    async fn webhook(&self, request: WebhookRequest) -> WebhookResponse {
        handle_webhook(&request)
    }
}

fn build_descriptor() -> NodeDescriptor {
    let mut descriptor =
        NodeDescriptor::new("cronlyticTrigger", "Cronlytic Trigger", NodeGroup::Trigger);
    descriptor.icon = Some("fa:clock".to_string());
    descriptor.subtitle = Some("={{$parameter[\"cronExpression\"]}}".to_string());
    descriptor.description =
        "Trigger workflows using Cronlytic advanced cron scheduling".to_string();
    descriptor.outputs = vec![ConnectionType::Main];
    descriptor.credentials = vec![CredentialRef::required("cronlyticApi")];
    descriptor.webhooks = vec![WebhookDescriptor {
        name: "default".to_string(),
        http_method: HttpMethod::Post,
        response_mode: ResponseMode::LastNode,
        path: "webhook".to_string(),
    }];
    descriptor.properties = vec![
        NodeProperty::new("jobName", "Job Name", PropertyKind::String)
            .required()
            .with_default(serde_json::json!(""))
            .with_description("Unique name for the cron job (alphanumeric, hyphens, underscores only)")
            .with_placeholder("my-workflow-trigger"),
        NodeProperty::new("cronExpression", "Cron Expression", PropertyKind::String)
            .required()
            .with_default(serde_json::json!("0 9 * * *"))
            .with_description("5-field cron expression (minute hour day month day-of-week)")
            .with_placeholder("*/5 * * * * (every 5 minutes)"),
        NodeProperty::new("webhookBody", "Webhook Body", PropertyKind::Json)
            .with_default(serde_json::json!("{}"))
            .with_description("JSON data to send with webhook trigger (optional)"),
        NodeProperty::new(
            "webhookHeaders",
            "Additional Headers",
            PropertyKind::Collection {
                values: vec![
                    NodeProperty::new("name", "Name", PropertyKind::String)
                        .with_description("Header name"),
                    NodeProperty::new("value", "Value", PropertyKind::String)
                        .with_description("Header value"),
                ],
                multiple_values: true,
            },
        )
        .with_default(serde_json::json!({}))
        .with_description("Additional headers for webhook requests"),
    ];
    descriptor
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
