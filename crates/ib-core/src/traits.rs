//! # Core Traits (Ports)
//!
//! Any persistence plugin must implement these traits to back an `IdeaStore`.

use std::sync::Arc;

/// Synchronous string key-value store scoped to a single origin.
///
/// Values are opaque text to the store; the board writes JSON into them.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key was never set.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}
