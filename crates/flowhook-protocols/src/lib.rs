//! # Flowhook Protocols
//!
//! Core protocol definitions (traits) for Flowhook node plugins.
//! Contains only interface definitions - no host runtime.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for all plugins
//! - [`CredentialType`] - Trait for credential type definitions
//! - [`WebhookTrigger`] - Trait for webhook-backed trigger nodes
//! - [`StaticDataStore`] - Per-node key-value storage owned by the host

pub mod credential;
pub mod error;
pub mod extension;
pub mod node;
pub mod static_data;
pub mod trigger;
pub mod types;
pub mod webhook;

// Re-export core traits
pub use credential::{CredentialData, CredentialProperty, CredentialTestRequest, CredentialType};
pub use error::{CredentialError, TriggerError};
pub use extension::{Extension, ExtensionManifest, Provides};
pub use node::{
    ConnectionType, CredentialRef, NodeDescriptor, NodeGroup, NodeProperty, PropertyKind,
    ResponseMode, WebhookDescriptor,
};
pub use static_data::{MemoryStaticData, StaticDataStore};
pub use trigger::{TriggerContext, WebhookTrigger};
pub use types::{HttpMethod, Version};
pub use webhook::{WebhookRequest, WebhookResponse};
