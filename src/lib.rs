// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! prefstore - persistent user preferences for desktop tooling.
//!
//! The crate tracks the list of files a user has opened and persists it in
//! a durable key-value document, surviving restarts of the host process.
//!
//! Architecture:
//! - `preferences`: the `UserPreferences` facade (add/remove/list opened
//!   files, process-wide shared handle)
//! - `store`: the backing-store trait plus the file-backed and in-memory
//!   implementations
//! - `error`: crate error type; backing-store failures pass through
//!   unmodified

pub mod error;
pub mod preferences;
pub mod store;

pub use error::{PrefsError, Result};
pub use preferences::{FileReference, UserPreferences};
