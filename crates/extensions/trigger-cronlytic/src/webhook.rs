//! Inbound webhook translation.

use chrono::Utc;
use serde_json::json;

use flowhook_protocols::webhook::{WebhookRequest, WebhookResponse};

/// Provenance marker carried by every emitted record.
pub const SOURCE: &str = "cronlytic";

/// Translate one inbound call into exactly one workflow record.
///
/// The call is passed through as delivered: no filtering and no payload
/// validation.
pub fn handle_webhook(request: &WebhookRequest) -> WebhookResponse {
    WebhookResponse::single(json!({
        "headers": request.headers,
        "params": request.query,
        "body": request.body,
        "timestamp": Utc::now().to_rfc3339(),
        "source": SOURCE,
        "cronlytic_trigger": true,
    }))
}
