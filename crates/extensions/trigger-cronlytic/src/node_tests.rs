use super::*;

use std::sync::Arc;
use std::time::Duration;

use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use flowhook_protocols::credential::CredentialData;
use flowhook_protocols::static_data::MemoryStaticData;

use crate::lifecycle::JOB_ID_KEY;

fn test_trigger(base_url: &str) -> CronlyticTrigger {
    CronlyticTrigger::with_base_url(base_url).with_warm_up_config(RetryConfig {
        max_attempts: 3,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_secs(1),
        backoff_multiplier: 2.0,
    })
}

fn test_context(parameters: serde_json::Value) -> TriggerContext {
    TriggerContext::new(
        parameters,
        CredentialData::from_pairs([("apiKey", "key-123"), ("userId", "user-456")]),
        "https://host.example/webhook/abc",
        Arc::new(MemoryStaticData::new()),
    )
}

fn sample_parameters() -> serde_json::Value {
    serde_json::json!({
        "jobName": "nightly-sync",
        "cronExpression": "*/5 * * * *"
    })
}

async fn mount_pong(server: &MockServer) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "pong"
        })))
        .mount(server)
        .await;
}

#[test]
fn test_descriptor_identity() {
    let trigger = CronlyticTrigger::new();
    let descriptor = trigger.descriptor();

    assert_eq!(descriptor.name, "cronlyticTrigger");
    assert_eq!(descriptor.display_name, "Cronlytic Trigger");
    assert_eq!(descriptor.group, NodeGroup::Trigger);
    assert_eq!(descriptor.version, 1);
    assert!(descriptor.inputs.is_empty());
    assert_eq!(descriptor.outputs, vec![ConnectionType::Main]);
}

#[test]
fn test_descriptor_credentials_and_webhook() {
    let trigger = CronlyticTrigger::new();
    let descriptor = trigger.descriptor();

    assert_eq!(descriptor.credentials.len(), 1);
    assert_eq!(descriptor.credentials[0].name, "cronlyticApi");
    assert!(descriptor.credentials[0].required);

    let webhook = descriptor.webhook("default").unwrap();
    assert_eq!(webhook.http_method, HttpMethod::Post);
    assert_eq!(webhook.response_mode, ResponseMode::LastNode);
    assert_eq!(webhook.path, "webhook");
}

#[test]
fn test_descriptor_properties() {
    let trigger = CronlyticTrigger::new();
    let descriptor = trigger.descriptor();

    let job_name = descriptor.property("jobName").unwrap();
    assert!(job_name.required);

    let cron = descriptor.property("cronExpression").unwrap();
    assert!(cron.required);
    assert_eq!(cron.default, serde_json::json!("0 9 * * *"));

    let body = descriptor.property("webhookBody").unwrap();
    assert!(!body.required);
    assert_eq!(body.default, serde_json::json!("{}"));

    let headers = descriptor.property("webhookHeaders").unwrap();
    match &headers.kind {
        PropertyKind::Collection { values, multiple_values } => {
            assert_eq!(values.len(), 2);
            assert!(multiple_values);
        }
        _ => panic!("expected collection kind"),
    }
}

#[tokio::test]
async fn test_create_stores_job_id() {
    let server = MockServer::start().await;
    mount_pong(&server).await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/jobs"))
        .and(matchers::header("X-API-Key", "key-123"))
        .and(matchers::body_partial_json(serde_json::json!({
            "name": "nightly-sync",
            "url": "https://host.example/webhook/abc",
            "method": "POST",
            "cron_expression": "*/5 * * * *"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "job_id": "job-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(sample_parameters());

    assert!(trigger.create(&ctx).await.unwrap());
    assert_eq!(
        ctx.static_data.get(JOB_ID_KEY),
        Some(serde_json::json!("job-abc"))
    );
}

#[tokio::test]
async fn test_create_sends_user_headers() {
    let server = MockServer::start().await;
    mount_pong(&server).await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/jobs"))
        .and(matchers::body_partial_json(serde_json::json!({
            "headers": { "X-Foo": "bar" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "job_id": "job-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(serde_json::json!({
        "jobName": "nightly-sync",
        "cronExpression": "*/5 * * * *",
        "webhookHeaders": {
            "headers": [
                { "name": "X-Foo", "value": "bar" },
                { "name": "", "value": "ignored" }
            ]
        }
    }));

    assert!(trigger.create(&ctx).await.unwrap());
}

#[tokio::test]
async fn test_create_without_job_id_reports_false() {
    let server = MockServer::start().await;
    mount_pong(&server).await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(sample_parameters());

    assert!(!trigger.create(&ctx).await.unwrap());
    assert!(ctx.static_data.get(JOB_ID_KEY).is_none());
}

#[tokio::test]
async fn test_create_with_missing_parameters_fails() {
    let server = MockServer::start().await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(serde_json::json!({ "cronExpression": "*/5 * * * *" }));

    let err = trigger.create(&ctx).await.unwrap_err();
    assert!(matches!(err, TriggerError::CreateFailed(_)));
    assert!(err.to_string().contains("jobName"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_missing_credentials_fails() {
    let server = MockServer::start().await;

    let trigger = test_trigger(&server.uri());
    let ctx = TriggerContext::new(
        sample_parameters(),
        CredentialData::new(),
        "https://host.example/webhook/abc",
        Arc::new(MemoryStaticData::new()),
    );

    let err = trigger.create(&ctx).await.unwrap_err();
    assert!(matches!(err, TriggerError::CreateFailed(_)));
    assert!(err.to_string().contains("apiKey"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_without_stored_id_skips_everything() {
    let server = MockServer::start().await;

    let trigger = test_trigger(&server.uri());
    // Even credentials are not needed when nothing was registered.
    let ctx = TriggerContext::new(
        sample_parameters(),
        CredentialData::new(),
        "https://host.example/webhook/abc",
        Arc::new(MemoryStaticData::new()),
    );

    assert!(trigger.delete(&ctx).await.unwrap());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_tolerates_remote_drift() {
    let server = MockServer::start().await;
    mount_pong(&server).await;

    Mock::given(matchers::method("DELETE"))
        .and(matchers::path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Job not found"
        })))
        .mount(&server)
        .await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(sample_parameters());
    ctx.static_data.set(JOB_ID_KEY, serde_json::json!("job-1"));

    assert!(trigger.delete(&ctx).await.unwrap());
    assert!(ctx.static_data.get(JOB_ID_KEY).is_none());
}

#[tokio::test]
async fn test_check_exists_with_bad_credentials_is_false() {
    let trigger = test_trigger("http://127.0.0.1:9");
    let ctx = TriggerContext::new(
        sample_parameters(),
        CredentialData::new(),
        "https://host.example/webhook/abc",
        Arc::new(MemoryStaticData::new()),
    );
    ctx.static_data.set(JOB_ID_KEY, serde_json::json!("job-1"));

    assert!(!trigger.check_exists(&ctx).await);
}

#[tokio::test]
async fn test_check_exists_round_trip() {
    let server = MockServer::start().await;
    mount_pong(&server).await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "job_id": "job-1"
        })))
        .mount(&server)
        .await;

    let trigger = test_trigger(&server.uri());
    let ctx = test_context(sample_parameters());
    ctx.static_data.set(JOB_ID_KEY, serde_json::json!("job-1"));

    assert!(trigger.check_exists(&ctx).await);
}

#[tokio::test]
async fn test_webhook_emits_one_record() {
    let trigger = CronlyticTrigger::new();
    let request = WebhookRequest::new(serde_json::json!({"a": 1}))
        .with_query("b", "2")
        .with_header("h", "v");

    let response = trigger.webhook(request).await;
    assert_eq!(response.records.len(), 1);

    let record = &response.records[0];
    assert_eq!(record["body"], serde_json::json!({"a": 1}));
    assert_eq!(record["params"]["b"], "2");
    assert_eq!(record["headers"]["h"], "v");
    assert_eq!(record["source"], "cronlytic");
    assert_eq!(record["cronlytic_trigger"], true);
    assert!(record["timestamp"].is_string());
}
