// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("mirror.toml")
//!   .add_toml_file("--config FILE")      later files win
//!   .with_env_prefix("MIRROR")           MIRROR_FETCH__MAX_RETRIES=5
//!   .set_opt("paths.archive", cli)       always wins
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// One layer that went into a configuration, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File { path: PathBuf, required: bool },
    Inline,
    Env { prefix: String },
    Override { key: String },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File {
                path,
                required: true,
            } => write!(f, "[file] {}", path.display()),
            Self::File {
                path,
                required: false,
            } => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
            Self::Env { prefix } => write!(f, "[env] {prefix}_*"),
            Self::Override { key } => write!(f, "[override] {key}"),
        }
    }
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self.builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
        if required || path.exists() {
            self.sources.push(ConfigSource::File {
                path: path.to_path_buf(),
                required,
            });
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` environment variables on top of all files.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a value that beats every file and environment source, e.g.
    /// `set("paths.archive", "out")`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid configuration path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        self.sources.push(ConfigSource::Override {
            key: key.to_string(),
        });
        Ok(self)
    }

    /// Like [`set`](Self::set), skipping `None`.
    ///
    /// # Errors
    ///
    /// Same as [`set`](Self::set).
    pub fn set_opt<T: Into<config::Value>>(self, key: &str, value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => self.set(key, value),
            None => Ok(self),
        }
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized or fails validation.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Sources in precedence order, lowest first.
    #[must_use]
    pub fn sources(&self) -> Vec<ConfigSource> {
        let (overrides, mut layers): (Vec<_>, Vec<_>) = self
            .sources
            .iter()
            .cloned()
            .partition(|s| matches!(s, ConfigSource::Override { .. }));
        if let Some(prefix) = &self.env_prefix {
            layers.push(ConfigSource::Env {
                prefix: prefix.clone(),
            });
        }
        layers.extend(overrides);
        layers
    }

    /// Numbered source lines for logging.
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources()
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
