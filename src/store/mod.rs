// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backing store abstraction for preferences
//!
//! Preferences live in a durable key-value document. The trait keeps the
//! facade independent of the on-disk format and lets tests substitute an
//! in-memory map for the real file-backed store.

use serde_json::Value;

use crate::error::Result;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage contract for preference documents.
///
/// Values are owned whole-key: `set` replaces the value under `key`, and
/// `get` hands back a copy (or the caller's default when the key has never
/// been written). Implementations must be durable once `set` returns, to
/// whatever degree their medium allows.
pub trait PreferenceStore: Send {
    /// Get the value under `key`, or `default` if the key is unset
    fn get(&self, key: &str, default: Value) -> Result<Value>;

    /// Set the value under `key`
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}
