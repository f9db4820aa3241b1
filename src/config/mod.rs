// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for resource-mirror.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. mirror.toml (cwd)
//! 3. --config
//! 4. MIRROR_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MIRROR_FETCH__MAX_RETRIES=5        → fetch.max_retries = 5
//! MIRROR_GITHUB__API_URL=http://...  → github.api_url = "http://..."
//! MIRROR_PATHS__HOSTED=out/hosted    → paths.hosted = "out/hosted"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

use loader::ConfigLoader;
use types::{FetchConfig, GithubConfig, PathsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hosting API options.
    pub github: GithubConfig,
    /// Retry and pacing options.
    pub fetch: FetchConfig,
    /// Manifest and output locations.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use resource_mirror::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("mirror.toml")
    ///     .with_env_prefix("MIRROR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty API URL or an
    /// inverted row delay range.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.github.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "github".to_string(),
                key: "api_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.fetch.validate()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("github.api_url", self.github.api_url.clone());
        options.insert("github.user_agent", self.github.user_agent.clone());
        options.insert("github.token_env", self.github.token_env.clone());
        options.insert("github.timeout_secs", self.github.timeout_secs.to_string());
        options.insert("fetch.max_retries", self.fetch.max_retries.to_string());
        options.insert(
            "fetch.backoff_unit_ms",
            self.fetch.backoff_unit_ms.to_string(),
        );
        options.insert(
            "fetch.row_delay_ms",
            format!(
                "{}..={}",
                self.fetch.row_delay_min_ms, self.fetch.row_delay_max_ms
            ),
        );
        options.insert("paths.manifest", self.paths.manifest.display().to_string());
        options.insert("paths.archive", self.paths.archive.display().to_string());
        options.insert("paths.hosted", self.paths.hosted.display().to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
