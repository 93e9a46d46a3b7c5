//! Snapshot persistence port.
//!
//! The store writes its whole state under two keys after every mutation and
//! reads it back once when opened. Adapters only move strings around, the
//! same contract browser local storage offers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use thiserror::Error;

use crate::alert::TransientAlert;
use crate::product::Product;

/// Key holding the product list.
pub const PRODUCTS_KEY: &str = "products";
/// Key holding the transient alerts. Stock alerts are never persisted.
pub const ALERTS_KEY: &str = "alerts";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot storage unavailable for key `{key}`: {reason}")]
    Unavailable { key: String, reason: String },

    #[error("snapshot under key `{key}` is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("failed to encode snapshot for key `{key}`: {reason}")]
    Encode { key: String, reason: String },

    #[error("snapshot lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl SnapshotError {
    pub fn unavailable(key: &str, reason: impl ToString) -> Self {
        Self::Unavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Key-value snapshot storage.
pub trait SnapshotStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Write (or overwrite) the value under `key`, all-or-nothing.
    fn set(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Remove `key`. Returns true if a value existed.
    fn remove(&self, key: &str) -> Result<bool, SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, SnapshotError> {
        (**self).remove(key)
    }
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let map = self
            .inner
            .read()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot read"))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot write"))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, SnapshotError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| SnapshotError::LockPoisoned("snapshot write"))?;
        Ok(map.remove(key).is_some())
    }
}

/// Persisted alert element: the structured form, or a bare string written by
/// older versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAlert {
    Legacy(String),
    Structured(TransientAlert),
}

impl From<StoredAlert> for TransientAlert {
    fn from(value: StoredAlert) -> Self {
        match value {
            StoredAlert::Legacy(message) => TransientAlert::legacy(message),
            StoredAlert::Structured(alert) => alert,
        }
    }
}

pub(crate) fn read_products<S: SnapshotStore + ?Sized>(
    port: &S,
) -> Result<Vec<Product>, SnapshotError> {
    read_list(port, PRODUCTS_KEY)
}

pub(crate) fn read_alerts<S: SnapshotStore + ?Sized>(
    port: &S,
) -> Result<Vec<TransientAlert>, SnapshotError> {
    let stored: Vec<StoredAlert> = read_list(port, ALERTS_KEY)?;
    Ok(stored.into_iter().map(TransientAlert::from).collect())
}

pub(crate) fn write_snapshot<S: SnapshotStore + ?Sized>(
    port: &S,
    products: &[Product],
    alerts: &[TransientAlert],
) -> Result<(), SnapshotError> {
    write_list(port, PRODUCTS_KEY, products)?;
    write_list(port, ALERTS_KEY, alerts)?;
    tracing::debug!(products = products.len(), alerts = alerts.len(), "snapshot written");
    Ok(())
}

fn read_list<S, T>(port: &S, key: &str) -> Result<Vec<T>, SnapshotError>
where
    S: SnapshotStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = port.get(key)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| SnapshotError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn write_list<S, T>(port: &S, key: &str, items: &[T]) -> Result<(), SnapshotError>
where
    S: SnapshotStore + ?Sized,
    T: serde::Serialize,
{
    let payload = serde_json::to_string(items).map_err(|e| SnapshotError::Encode {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    port.set(key, &payload)
}
