//! In-memory reference implementation of [`StateStore`].
//!
//! This adapter is deterministic and test-friendly. Hosts that need
//! durability should provide their own backend or use the JSON-file store.

use crate::traits::StateStore;
use crate::{StorageError, StorageResult};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory state store keyed by raw bytes.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
        I: IntoIterator<Item = (K, V)>,
    {
        let state = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            state: RwLock::new(state),
        }
    }

    /// Copy of every entry currently held, ordered by key.
    pub fn snapshot(&self) -> StorageResult<BTreeMap<Vec<u8>, Vec<u8>>> {
        let guard = self
            .state
            .read()
            .map_err(|_| StorageError::Backend("state lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    pub fn len(&self) -> StorageResult<usize> {
        let guard = self
            .state
            .read()
            .map_err(|_| StorageError::Backend("state lock poisoned".to_string()))?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl StateStore for InMemoryStateStore {
    fn get_state(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        let guard = self
            .state
            .read()
            .map_err(|_| StorageError::Backend("state lock poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn put_state(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| StorageError::Backend("state lock poisoned".to_string()))?;
        guard.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
