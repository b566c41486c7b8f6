//! Cronlytic API credential type.

use std::collections::HashMap;

use flowhook_protocols::credential::{
    CredentialData, CredentialProperty, CredentialTestRequest, CredentialType,
};
use flowhook_protocols::error::CredentialError;
use flowhook_protocols::types::HttpMethod;

use crate::client::BASE_URL;

pub(crate) const API_KEY_FIELD: &str = "apiKey";
pub(crate) const USER_ID_FIELD: &str = "userId";

/// Typed view over decrypted Cronlytic credentials.
#[derive(Debug, Clone)]
pub struct CronlyticCredentials {
    pub api_key: String,
    pub user_id: String,
}

impl CronlyticCredentials {
    pub fn new(api_key: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: user_id.into(),
        }
    }

    /// Headers carried by every authenticated API call.
    pub fn header_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("X-API-Key".to_string(), self.api_key.clone()),
            ("X-User-ID".to_string(), self.user_id.clone()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
    }
}

impl TryFrom<&CredentialData> for CronlyticCredentials {
    type Error = CredentialError;

    fn try_from(data: &CredentialData) -> Result<Self, Self::Error> {
        Ok(Self {
            api_key: data.require(API_KEY_FIELD)?.to_string(),
            user_id: data.require(USER_ID_FIELD)?.to_string(),
        })
    }
}

/// Cronlytic API credential type definition.
pub struct CronlyticApi {
    properties: Vec<CredentialProperty>,
}

impl CronlyticApi {
    pub fn new() -> Self {
        Self {
            properties: vec![
                CredentialProperty::new(API_KEY_FIELD, "API Key")
                    .required()
                    .password()
                    .with_description("Your Cronlytic API key"),
                CredentialProperty::new(USER_ID_FIELD, "User ID")
                    .required()
                    .with_description("Your Cronlytic User ID"),
            ],
        }
    }
}

impl Default for CronlyticApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialType for CronlyticApi {
    fn name(&self) -> &str {
        "cronlyticApi"
    }

    fn display_name(&self) -> &str {
        "Cronlytic API"
    }

    fn documentation_url(&self) -> Option<&str> {
        Some("https://www.cronlytic.com/api-documentation")
    }

    fn properties(&self) -> &[CredentialProperty] {
        &self.properties
    }

    fn authenticate(
        &self,
        data: &CredentialData,
    ) -> Result<HashMap<String, String>, CredentialError> {
        Ok(CronlyticCredentials::try_from(data)?.header_map())
    }

    /// The ping endpoint needs no authentication; the probe only verifies
    /// the service is reachable, not that the key is valid.
    fn test_request(&self) -> Option<CredentialTestRequest> {
        Some(CredentialTestRequest {
            base_url: BASE_URL.to_string(),
            path: "/ping".to_string(),
            method: HttpMethod::Get,
        })
    }
}
