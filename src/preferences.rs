// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User preferences facade
//!
//! Tracks the list of files the user has opened, persisted under the
//! `"files"` key of the backing store. Most callers construct one handle at
//! startup and pass clones around; [`UserPreferences::shared`] exists for
//! the process-wide single-instance contract.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::store::{JsonFileStore, MemoryStore, PreferenceStore};

/// Document key holding the opened-files list
const FILES_KEY: &str = "files";

/// A user-opened file as stored in the preferences list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Display name for the file
    pub name: String,
    /// Path string identifying the file; removal matches on exact equality
    pub path: String,
}

impl FileReference {
    /// Create a new file reference
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Process-wide shared instance handed out by [`UserPreferences::shared`]
static SHARED: OnceLock<UserPreferences> = OnceLock::new();

/// Handle to the persisted user preferences.
///
/// Cloning is cheap and every clone refers to the same store. Mutations hold
/// the store lock across the whole read-modify-write sequence, so concurrent
/// calls through clones of one handle cannot lose updates. Two handles
/// opened independently on the same file (or two processes) still can.
#[derive(Clone)]
pub struct UserPreferences {
    inner: Arc<Inner>,
}

struct Inner {
    store: Mutex<Box<dyn PreferenceStore>>,
}

impl UserPreferences {
    /// Create a handle over an explicit backing store.
    pub fn new<S: PreferenceStore + 'static>(store: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: Mutex::new(Box::new(store)),
            }),
        }
    }

    /// Create a handle over an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open preferences backed by the default on-disk document.
    pub fn open() -> Result<Self> {
        Ok(Self::new(JsonFileStore::open_default()?))
    }

    /// Open preferences backed by a document at a specific path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(JsonFileStore::open(path)?))
    }

    /// Get the process-wide shared instance, opening the default on-disk
    /// store on first call. Every call returns a clone of the same handle.
    pub fn shared() -> Result<Self> {
        if let Some(prefs) = SHARED.get() {
            return Ok(prefs.clone());
        }

        let prefs = Self::open()?;
        Ok(SHARED.get_or_init(|| prefs).clone())
    }

    /// Append a file to the opened-files list.
    ///
    /// No validation and no duplicate check: adding the same path twice
    /// stores it twice.
    pub fn add_file(&self, name: impl Into<String>, path: impl Into<String>) -> Result<()> {
        let entry = FileReference::new(name, path);

        let mut store = self.inner.store.lock().unwrap();
        let mut files = load_files(store.as_ref())?;
        tracing::debug!("Adding file {:?} ({})", entry.name, entry.path);
        files.push(entry);
        save_files(store.as_mut(), &files)
    }

    /// Remove every entry whose path exactly equals `path`.
    ///
    /// The filtered list is written back even when nothing matched.
    pub fn remove_file(&self, path: &str) -> Result<()> {
        let mut store = self.inner.store.lock().unwrap();
        let mut files = load_files(store.as_ref())?;

        let before = files.len();
        files.retain(|file| file.path != path);
        tracing::debug!("Removing {} entries for path {}", before - files.len(), path);

        save_files(store.as_mut(), &files)
    }

    /// Get the opened-files list in insertion order, empty if never written.
    pub fn files(&self) -> Result<Vec<FileReference>> {
        let store = self.inner.store.lock().unwrap();
        load_files(store.as_ref())
    }
}

fn load_files(store: &dyn PreferenceStore) -> Result<Vec<FileReference>> {
    let value = store.get(FILES_KEY, Value::Array(Vec::new()))?;
    Ok(serde_json::from_value(value)?)
}

fn save_files(store: &mut dyn PreferenceStore, files: &[FileReference]) -> Result<()> {
    store.set(FILES_KEY, serde_json::to_value(files)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_reference_serialization() {
        let entry = FileReference::new("notes.txt", "/home/user/notes.txt");

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: FileReference = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"path\""));
    }

    #[test]
    fn test_clones_share_state() {
        let prefs = UserPreferences::in_memory();
        let other = prefs.clone();

        prefs.add_file("a", "/p/a").unwrap();

        assert!(Arc::ptr_eq(&prefs.inner, &other.inner));
        assert_eq!(other.files().unwrap().len(), 1);
    }

    // The one test exercising the process-wide static; keeping it in a
    // single #[test] avoids ordering dependencies between tests.
    #[test]
    fn test_shared_is_one_instance() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("PREFSTORE_HOME", temp_dir.path());

        let first = UserPreferences::shared().unwrap();
        let second = UserPreferences::shared().unwrap();

        assert!(Arc::ptr_eq(&first.inner, &second.inner));

        first.add_file("shared.txt", "/tmp/shared.txt").unwrap();
        let files = second.files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/tmp/shared.txt");

        std::env::remove_var("PREFSTORE_HOME");
    }
}
