//! File-backed storage
//!
//! Keeps the whole map in memory and rewrites a single JSON object file on
//! every mutation, so data survives process restarts. The file is re-read
//! whenever its size or modification time changes, so writes made by
//! another handle or process on the same path become visible.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::storage::Storage;

/// Modification time and length of the backing file when last seen.
type FileStamp = (SystemTime, u64);

#[derive(Debug, Default)]
struct Snapshot {
    items: HashMap<String, String>,
    stamp: Option<FileStamp>,
}

// == File Storage ==
/// Storage persisted to a JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    state: RwLock<Snapshot>,
}

impl FileStorage {
    // == Constructor ==
    /// Opens the storage file at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file also
    /// starts empty and is overwritten on the first write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let stamp = stamp_of(&path);
        let items = read_items(&path).unwrap_or_default();
        debug!("Opened storage {} with {} keys", path.display(), items.len());

        Self {
            path,
            state: RwLock::new(Snapshot { items, stamp }),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locks the snapshot, first reloading it if the file changed on disk.
    fn fresh(&self) -> RwLockWriteGuard<'_, Snapshot> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let stamp = stamp_of(&self.path);
        if stamp != state.stamp {
            // A corrupt or vanished file keeps what we already hold
            if let Some(items) = read_items(&self.path) {
                debug!("Reloaded storage {} with {} keys", self.path.display(), items.len());
                state.items = items;
            }
            state.stamp = stamp;
        }
        state
    }

    fn flush(&self, state: &mut Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(&state.items)?;
        fs::write(&self.path, raw)?;
        state.stamp = stamp_of(&self.path);
        Ok(())
    }
}

fn stamp_of(path: &Path) -> Option<FileStamp> {
    let meta = fs::metadata(path).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}

/// Parses the file, or None when it is missing, unreadable or corrupt.
fn read_items(path: &Path) -> Option<HashMap<String, String>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!("Storage file {} unreadable: {}", path.display(), err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(err) => {
            warn!("Storage file {} is corrupt: {}", path.display(), err);
            None
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.fresh().items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.fresh();
        state.items.insert(key.to_string(), value.to_string());
        self.flush(&mut state)
    }

    fn remove_item(&self, key: &str) {
        let mut state = self.fresh();
        if state.items.remove(key).is_some() {
            if let Err(err) = self.flush(&mut state) {
                warn!("Failed to persist removal of {}: {}", key, err);
            }
        }
    }

    fn keys(&self) -> Vec<String> {
        self.fresh().items.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = FileStorage::open(&path);
        storage.set_item("pokemon_details_25", "{}").unwrap();
        storage.set_item("theme", "dark").unwrap();
        storage.remove_item("theme");
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item("pokemon_details_25").as_deref(), Some("{}"));
        assert!(reopened.get_item("theme").is_none());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path);
        assert!(storage.keys().is_empty());

        storage.set_item("k", "v").unwrap();
        assert_eq!(FileStorage::open(&path).get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let storage = FileStorage::open(dir.path());

        assert!(storage.set_item("k", "v").is_err());
    }

    #[test]
    fn test_second_handle_sees_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let writer = FileStorage::open(&path);
        let reader = FileStorage::open(&path);
        assert!(reader.get_item("pokemon-config:cache_enabled").is_none());

        writer.set_item("pokemon-config:cache_enabled", "false").unwrap();
        assert_eq!(
            reader.get_item("pokemon-config:cache_enabled").as_deref(),
            Some("false")
        );

        writer.remove_item("pokemon-config:cache_enabled");
        assert!(reader.get_item("pokemon-config:cache_enabled").is_none());
        assert!(reader.keys().is_empty());
    }

    #[test]
    fn test_dev_mode_flag_follows_other_handle() {
        use crate::cache::CacheStore;
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = CacheStore::open(Arc::new(FileStorage::open(&path)), true);
        assert!(store.is_enabled());

        let other = FileStorage::open(&path);
        other.set_item("pokemon-config:cache_enabled", "false").unwrap();

        assert!(!store.is_enabled());
    }
}
