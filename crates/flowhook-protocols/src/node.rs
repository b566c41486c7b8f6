//! Node descriptor types.
//!
//! A node descriptor is the host-facing declaration of a node: its
//! identity, parameter schema, credential references, and webhook
//! endpoints. The host renders the parameter schema and delivers the
//! collected values back through [`crate::trigger::TriggerContext`].

use serde::{Deserialize, Serialize};

use crate::types::HttpMethod;

/// Node grouping within the host's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    Trigger,
    Action,
}

/// Connection type for node inputs/outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Main,
}

/// Reference to a credential type required by a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRef {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl CredentialRef {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

/// How the host answers the caller of a webhook endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Keep the connection open until the workflow's final node produced
    /// its output, then respond with it.
    LastNode,
    /// Acknowledge immediately on receipt.
    OnReceived,
}

/// Declaration of a webhook endpoint owned by a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookDescriptor {
    pub name: String,
    pub http_method: HttpMethod,
    pub response_mode: ResponseMode,
    /// Path relative to the host-assigned webhook base URL.
    pub path: String,
}

/// Kind of a node parameter, with kind-specific schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    String,
    /// JSON text edited as a structured value.
    Json,
    /// A collection of sub-properties, optionally repeatable.
    Collection {
        values: Vec<NodeProperty>,
        #[serde(default)]
        multiple_values: bool,
    },
}

/// Schema for a single node parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    pub kind: PropertyKind,
    #[serde(default)]
    pub default: serde_json::Value,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl NodeProperty {
    /// Create a new optional property of the given kind.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind,
            default: serde_json::Value::Null,
            required: false,
            description: String::new(),
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = default;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Host-facing declaration of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub display_name: String,
    /// Unique node type name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub group: NodeGroup,
    pub version: u32,
    /// Template rendered below the node title (host expression syntax).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub inputs: Vec<ConnectionType>,
    #[serde(default)]
    pub outputs: Vec<ConnectionType>,
    #[serde(default)]
    pub credentials: Vec<CredentialRef>,
    #[serde(default)]
    pub webhooks: Vec<WebhookDescriptor>,
    #[serde(default)]
    pub properties: Vec<NodeProperty>,
}

impl NodeDescriptor {
    /// Create a descriptor with empty schema sections.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, group: NodeGroup) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            icon: None,
            group,
            version: 1,
            subtitle: None,
            description: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            credentials: Vec::new(),
            webhooks: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Find a property schema by name.
    pub fn property(&self, name: &str) -> Option<&NodeProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Find a webhook descriptor by name.
    pub fn webhook(&self, name: &str) -> Option<&WebhookDescriptor> {
        self.webhooks.iter().find(|w| w.name == name)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
