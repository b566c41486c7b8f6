//! Credential type definitions.
//!
//! The host owns credential storage and encryption. Plugins declare a
//! property schema describing what the host should collect, and receive
//! the decrypted values at call time via [`CredentialData`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;
use crate::types::HttpMethod;

/// Decrypted credential values as delivered by the host.
///
/// Never persisted by plugins; the host hands a fresh copy to each
/// lifecycle call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialData(HashMap<String, String>);

impl CredentialData {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Get a credential value by field name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get a credential value, failing if it is absent or empty.
    pub fn require(&self, key: &str) -> Result<&str, CredentialError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CredentialError::MissingField(key.to_string())),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Build credential data from field name/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Schema for a single credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialProperty {
    pub display_name: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    /// Mask the value in input fields.
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl CredentialProperty {
    /// Create a new optional string property.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            required: false,
            password: false,
            description: String::new(),
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
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

/// Probe request used by the host's "test credentials" affordance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialTestRequest {
    pub base_url: String,
    pub path: String,
    pub method: HttpMethod,
}

/// Core trait for credential type definitions.
///
/// A credential type declares what the host should collect from the user
/// and how to attach the collected values to outgoing HTTP requests.
pub trait CredentialType: Send + Sync + 'static {
    /// Unique credential type name referenced by node descriptors.
    fn name(&self) -> &str;

    /// Human-readable name.
    fn display_name(&self) -> &str;

    /// Link to the external service's API documentation.
    fn documentation_url(&self) -> Option<&str> {
        None
    }

    /// The fields the host should collect.
    fn properties(&self) -> &[CredentialProperty];

    /// Headers to attach to any HTTP call made under these credentials.
    fn authenticate(
        &self,
        data: &CredentialData,
    ) -> Result<HashMap<String, String>, CredentialError>;

    /// Connectivity probe for the host's credential test affordance.
    fn test_request(&self) -> Option<CredentialTestRequest> {
        None
    }
}
