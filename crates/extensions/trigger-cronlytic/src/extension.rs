//! Cronlytic extension definition.

use std::sync::Arc;

use flowhook_protocols::credential::CredentialType;
use flowhook_protocols::extension::{Extension, ExtensionManifest, Provides};
use flowhook_protocols::trigger::WebhookTrigger;
use flowhook_protocols::types::Version;

use crate::credentials::CronlyticApi;
use crate::node::CronlyticTrigger;

/// Extension providing the Cronlytic trigger node and its credential type.
pub struct CronlyticExtension {
    manifest: ExtensionManifest,
}

impl CronlyticExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new(
            "trigger-cronlytic",
            "Cronlytic Trigger",
            Version::new(0, 1, 0),
        );
        manifest.description = "Remote cron scheduling via Cronlytic".to_string();
        manifest.provides = Provides {
            trigger_nodes: vec!["cronlyticTrigger".to_string()],
            credential_types: vec!["cronlyticApi".to_string()],
        };

        Self { manifest }
    }
}

impl Default for CronlyticExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for CronlyticExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    fn credential_types(&self) -> Vec<Arc<dyn CredentialType>> {
        vec![Arc::new(CronlyticApi::new())]
    }

    fn trigger_nodes(&self) -> Vec<Arc<dyn WebhookTrigger>> {
        vec![Arc::new(CronlyticTrigger::new())]
    }
}
