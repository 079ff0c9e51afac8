// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;

use super::PreferenceStore;

/// In-memory preference store.
///
/// Same contract as [`JsonFileStore`](super::JsonFileStore) minus
/// durability. Used as the test double for the facade and for embedders that
/// do not want anything on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str, default: Value) -> Result<Value> {
        Ok(self.entries.get(key).cloned().unwrap_or(default))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
