// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for prefstore
//!
//! All failures surface the backing store's own error; nothing is retried
//! or recovered here.

use thiserror::Error;

/// Main error type for preferences operations
#[derive(Error, Debug)]
pub enum PrefsError {
    /// IO errors from the backing store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backing store errors that are not IO or serialization failures
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type alias for preferences operations
pub type Result<T> = std::result::Result<T, PrefsError>;
