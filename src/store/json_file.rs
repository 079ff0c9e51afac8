// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{PrefsError, Result};

use super::PreferenceStore;

/// File-backed preference store.
///
/// The whole store is one pretty-printed JSON object. Every `get` reads the
/// document from disk and every `set` rewrites it, so two handles on the
/// same path observe each other's writes and a completed `set` is on disk
/// before the call returns. Keys other than the one being set survive a
/// rewrite, including keys this crate knows nothing about.
pub struct JsonFileStore {
    /// Path to the preferences document
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at the given path, creating the parent directory and an
    /// empty document if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            tracing::debug!("Creating preferences document at {:?}", path);
            std::fs::write(&path, "{}")?;
        }

        Ok(Self { path })
    }

    /// Open the store at the default path.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path())
    }

    /// Get the default preferences document path.
    pub fn default_path() -> PathBuf {
        Self::prefstore_home().join("preferences.json")
    }

    /// Get the prefstore home directory (~/.prefstore or $PREFSTORE_HOME).
    pub fn prefstore_home() -> PathBuf {
        if let Ok(home) = std::env::var("PREFSTORE_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prefstore")
    }

    /// Path of the document backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        // A truncated write can leave a zero-length file; read it as empty.
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(PrefsError::Store(format!(
                "preferences document root must be a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str, default: Value) -> Result<Value> {
        let document = self.read_document()?;
        Ok(document.get(key).cloned().unwrap_or(default))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
