//! Extension manifest and trait.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::credential::CredentialType;
use crate::trigger::WebhookTrigger;
use crate::types::Version;

/// Extension manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    pub id: String,
    pub name: String,
    pub version: Version,
    pub description: String,
    #[serde(default)]
    pub provides: Provides,
}

impl ExtensionManifest {
    /// Create a new extension manifest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: Version) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version,
            description: String::new(),
            provides: Provides::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// What an extension provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provides {
    #[serde(default)]
    pub trigger_nodes: Vec<String>,
    #[serde(default)]
    pub credential_types: Vec<String>,
}

/// Core trait for all plugins.
///
/// An extension bundles the node types and credential types it
/// contributes; the host enumerates them at load time.
pub trait Extension: Send + Sync {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Credential types contributed by this extension.
    fn credential_types(&self) -> Vec<Arc<dyn CredentialType>> {
        Vec::new()
    }

    /// Trigger nodes contributed by this extension.
    fn trigger_nodes(&self) -> Vec<Arc<dyn WebhookTrigger>> {
        Vec::new()
    }
}
