//! Trigger and credential errors.

use thiserror::Error;

/// Errors raised by trigger lifecycle operations.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Failed to warm lambda after {attempts} attempts: {message}")]
    WarmUpFailed { attempts: u32, message: String },

    #[error("API error: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to create job: {0}")]
    CreateFailed(String),

    #[error("Failed to delete job: {0}")]
    DeleteFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

/// Errors raised while reading decrypted credential data.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Missing credential field: {0}")]
    MissingField(String),

    #[error("Invalid credential field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_up_failed_display() {
        let err = TriggerError::WarmUpFailed {
            attempts: 3,
            message: "connection refused".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("warm lambda"));
        assert!(display.contains("3 attempts"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_api_error_display() {
        let err = TriggerError::Api {
            status: 422,
            message: "name already in use".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("API error"));
        assert!(display.contains("name already in use"));
    }

    #[test]
    fn test_network_error_display() {
        let err = TriggerError::Network("dns failure".to_string());
        assert!(err.to_string().contains("dns failure"));
    }

    #[test]
    fn test_create_failed_display() {
        let err = TriggerError::CreateFailed("API error: quota exceeded".to_string());
        let display = err.to_string();
        assert!(display.contains("Failed to create job"));
        assert!(display.contains("quota exceeded"));
    }

    #[test]
    fn test_delete_failed_display() {
        let err = TriggerError::DeleteFailed("timeout".to_string());
        assert!(err.to_string().contains("Failed to delete job"));
    }

    #[test]
    fn test_credential_error_from() {
        let err: TriggerError = CredentialError::MissingField("apiKey".to_string()).into();
        let display = err.to_string();
        assert!(display.contains("Credential error"));
        assert!(display.contains("apiKey"));
    }

    #[test]
    fn test_invalid_field_display() {
        let err = CredentialError::InvalidField {
            field: "userId".to_string(),
            reason: "not a UUID".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("userId"));
        assert!(display.contains("not a UUID"));
    }
}
