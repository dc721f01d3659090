//! JSON-file backed [`StateStore`].
//!
//! The whole key space lives in one JSON object whose keys and values are
//! hex-encoded bytes. The file is loaded once on open and rewritten on every
//! `put_state` through a temporary sibling file and a rename, so a crash
//! mid-write leaves the previous document intact.

use crate::traits::StateStore;
use crate::{StorageError, StorageResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// File-backed state store.
#[derive(Debug)]
pub struct JsonFileStateStore {
    path: PathBuf,
    state: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl JsonFileStateStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            decode_document(&contents)?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = state.len(), "Opened state file");

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, state: &BTreeMap<Vec<u8>, Vec<u8>>) -> StorageResult<()> {
        let document = encode_document(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), entries = state.len(), "Persisted state file");
        Ok(())
    }
}

impl StateStore for JsonFileStateStore {
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

        let previous = guard.insert(key.to_vec(), value.to_vec());
        if let Err(err) = self.persist(&guard) {
            // keep memory consistent with disk
            match previous {
                Some(old) => guard.insert(key.to_vec(), old),
                None => guard.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

fn encode_document(state: &BTreeMap<Vec<u8>, Vec<u8>>) -> StorageResult<String> {
    let encoded: BTreeMap<String, String> = state
        .iter()
        .map(|(k, v)| (hex::encode(k), hex::encode(v)))
        .collect();
    serde_json::to_string_pretty(&encoded).map_err(|e| StorageError::Serialization(e.to_string()))
}

fn decode_document(contents: &str) -> StorageResult<BTreeMap<Vec<u8>, Vec<u8>>> {
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let encoded: BTreeMap<String, String> =
        serde_json::from_str(contents).map_err(|e| StorageError::Serialization(e.to_string()))?;

    encoded
        .into_iter()
        .map(|(k, v)| {
            let key = hex::decode(&k)
                .map_err(|e| StorageError::Serialization(format!("key {k}: {e}")))?;
            let value = hex::decode(&v)
                .map_err(|e| StorageError::Serialization(format!("value for {k}: {e}")))?;
            Ok((key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStateStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get_state(b"ttp").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let store = JsonFileStateStore::open(&path).unwrap();
            store.put_state(b"ttp", b"TTPOrg").unwrap();
            store.put_state(b"TTPOrg", b"50").unwrap();
        }

        let reopened = JsonFileStateStore::open(&path).unwrap();
        assert_eq!(reopened.get_state(b"ttp").unwrap(), Some(b"TTPOrg".to_vec()));
        assert_eq!(reopened.get_state(b"TTPOrg").unwrap(), Some(b"50".to_vec()));
    }

    #[test]
    fn non_utf8_keys_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let key = [0xff, 0x00, 0x7f];

        JsonFileStateStore::open(&path)
            .unwrap()
            .put_state(&key, b"1")
            .unwrap();

        let reopened = JsonFileStateStore::open(&path).unwrap();
        assert_eq!(reopened.get_state(&key).unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger").join("state.json");

        let store = JsonFileStateStore::open(&path).unwrap();
        store.put_state(b"ttp", b"TTPOrg").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{\"zz\": \"00\"}").unwrap();

        let result = JsonFileStateStore::open(&path);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
