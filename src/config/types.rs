// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for resource-mirror.
//!
//! # Config Structure
//!
//! ```text
//! Config: GithubConfig, FetchConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Upper bound for `fetch.max_retries`; the tenth wait is already ~9 minutes.
pub const MAX_RETRIES_LIMIT: u32 = 10;

/// Hosting API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// Base URL of the REST API.
    pub api_url: String,
    /// Client identifier sent with every call.
    pub user_agent: String,
    /// Environment variable holding the optional bearer credential.
    pub token_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: "awesome-claude-code Downloader/1.0".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GithubConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry and pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Retries after the first attempt of a retrieval call.
    pub max_retries: u32,
    /// Length of one backoff "second" in milliseconds.
    pub backoff_unit_ms: u64,
    /// Lower bound of the pause between manifest rows.
    pub row_delay_min_ms: u64,
    /// Upper bound of the pause between manifest rows.
    pub row_delay_max_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_unit_ms: 1000,
            row_delay_min_ms: 1000,
            row_delay_max_ms: 2000,
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub const fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_unit_ms)
    }

    #[must_use]
    pub const fn row_delay(&self) -> RangeInclusive<u64> {
        self.row_delay_min_ms..=self.row_delay_max_ms
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the row delay bounds are
    /// inverted or `max_retries` exceeds [`MAX_RETRIES_LIMIT`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::InvalidValue {
                section: "fetch".to_string(),
                key: "max_retries".to_string(),
                message: format!(
                    "must be at most {MAX_RETRIES_LIMIT}, got {}",
                    self.max_retries
                ),
            });
        }
        if self.row_delay_max_ms < self.row_delay_min_ms {
            return Err(ConfigError::InvalidValue {
                section: "fetch".to_string(),
                key: "row_delay_max_ms".to_string(),
                message: format!(
                    "must not be below row_delay_min_ms ({} < {})",
                    self.row_delay_max_ms, self.row_delay_min_ms
                ),
            });
        }
        Ok(())
    }
}

/// Input manifest and output trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// CSV manifest listing all candidate resources.
    pub manifest: PathBuf,
    /// Archive tree (every fetched resource).
    pub archive: PathBuf,
    /// Hosted tree (open-source resources only).
    pub hosted: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(".myob/scripts/resource-metadata.csv"),
            archive: PathBuf::from(".myob/downloads"),
            hosted: PathBuf::from("resources"),
        }
    }
}
