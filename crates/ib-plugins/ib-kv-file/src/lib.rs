//! # ib-kv-file
//!
//! Local filesystem implementation of `KeyValueStore`.
//! All keys of one origin live in a single JSON object on disk. Every `set`
//! rewrites that document through a temp file and an atomic rename, so a
//! crash leaves either the old or the new snapshot, never a torn one.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ib_core::traits::KeyValueStore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileKvError {
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode store document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

pub struct FileKvStore {
    /// The origin document, e.g. "./data/local.json"
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileKvStore {
    /// Opens (or prepares to create) the document at `path`.
    ///
    /// A missing file is an empty store. A document that is not a JSON object
    /// of strings is logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileKvError> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| FileKvError::Io {
                action: "create",
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable store {}: {err}", path.display());
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(FileKvError::Io {
                    action: "read",
                    path,
                    source,
                })
            }
        };

        log::debug!("opened {} with {} keys", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, entries: &BTreeMap<String, String>) -> Result<(), FileKvError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let io_err = |action, source| FileKvError::Io {
            action,
            path: self.path.clone(),
            source,
        };

        let encoded = serde_json::to_vec_pretty(entries)?;
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| io_err("stage", e))?;
        temp.write_all(&encoded).map_err(|e| io_err("write", e))?;
        temp.as_file().sync_all().map_err(|e| io_err("sync", e))?;
        temp.persist(&self.path).map_err(|e| io_err("replace", e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| FileKvError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| FileKvError::Poisoned)?;
        // Memory only advances once the new document is on disk.
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_document(&next)?;
        *entries = next;
        Ok(())
    }
}

impl std::fmt::Debug for FileKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKvStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ib_core::persist::{IDEAS_KEY, SAVED_KEY};
    use ib_core::IdeaStore;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKvStore::open(dir.path().join("nested/origin.json")).unwrap();
        assert_eq!(kv.get("theme").unwrap(), None);
        assert!(!kv.path().exists());
    }

    #[test]
    fn test_values_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("origin.json");

        let kv = FileKvStore::open(&path).unwrap();
        kv.set("theme", "\"light\"").unwrap();
        kv.set("saved_v1", "[]").unwrap();
        drop(kv);

        let kv = FileKvStore::open(&path).unwrap();
        assert_eq!(kv.get("theme").unwrap().as_deref(), Some("\"light\""));
        assert_eq!(kv.get("saved_v1").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_document_starts_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("origin.json");
        fs::write(&path, "this is not json").unwrap();

        let kv = FileKvStore::open(&path).unwrap();
        assert_eq!(kv.get("theme").unwrap(), None);

        kv.set("theme", "\"dark\"").unwrap();
        let reopened = FileKvStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("origin.json");
        let kv = FileKvStore::open(&path).unwrap();
        kv.set("theme", "\"dark\"").unwrap();

        // A directory at the target path makes the atomic rename fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(kv.set("theme", "\"light\"").is_err());
        assert_eq!(kv.get("theme").unwrap().as_deref(), Some("\"dark\""));
        assert!(kv.set("saved_v1", "[]").is_err());
        assert_eq!(kv.get("saved_v1").unwrap(), None);
    }

    #[test]
    fn test_board_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("origin.json");

        let mut store = IdeaStore::load(FileKvStore::open(&path).unwrap());
        let _ = store.submit_idea("Pinned ideas", "Keep one idea at the top", "ui, Pinning");
        let id = store.ideas()[0].id.clone();
        let _ = store.vote(&id, 1);
        let _ = store.add_comment(&id, "would use this daily");
        let _ = store.toggle_save(&id);
        let ideas = store.ideas().to_vec();
        drop(store);

        let kv = FileKvStore::open(&path).unwrap();
        assert!(kv.get(IDEAS_KEY).unwrap().is_some());
        assert!(kv.get(SAVED_KEY).unwrap().is_some());

        let reloaded = IdeaStore::load(kv);
        assert_eq!(reloaded.ideas(), ideas.as_slice());
        assert!(reloaded.is_saved(&id));
    }
}
