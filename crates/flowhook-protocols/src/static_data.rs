//! Per-node static data storage.
//!
//! The host keeps a small key-value bag per node instance whose lifetime
//! equals the owning workflow's. It is modeled here as an explicit store
//! injected into lifecycle calls rather than accessed ambiently.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// Key-value storage scoped to one node instance.
pub trait StaticDataStore: Send + Sync {
    /// Get a stored value.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: Value);

    /// Remove a value, returning it if present.
    fn remove(&self, key: &str) -> Option<Value>;
}

/// In-memory static data store.
///
/// Used by tests and embedders; a real host persists this alongside the
/// workflow.
#[derive(Debug, Default)]
pub struct MemoryStaticData {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStaticData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StaticDataStore for MemoryStaticData {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().expect("static data lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries
            .write()
            .expect("static data lock poisoned")
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().expect("static data lock poisoned").remove(key)
    }
}
