// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           MirrorError (~24 bytes)
//!                  |
//!   +--------+-----+-----+--------+-------+
//!   |        |           |        |       |
//!   v        v           v        v       v
//! Network  Config    Manifest    Fs    Io/Other
//!   Box     Box        Box       Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Network   Reqwest, HttpError, RateLimited, InvalidResponse, Unsupported
//!   Config    InvalidValue
//!   Manifest  Open, Row
//!   Fs        IoError
//!
//! All variants boxed => MirrorError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MirrorError`].
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Manifest could not be read.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl MirrorError {
    /// Whether the underlying cause is worth another attempt.
    ///
    /// Everything network-shaped is retried, including explicit rate limiting.
    /// An unsupported reference or a local write failure will not get better.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(err) => !matches!(**err, NetworkError::Unsupported(_)),
            _ => false,
        }
    }

    /// Whether the reference kind is never fetched.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Network(err) if matches!(**err, NetworkError::Unsupported(_)))
    }
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MirrorError {
                fn from(err: $error) -> Self {
                    MirrorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ManifestError => Manifest,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// The API signalled that the call budget is exhausted.
    #[error("rate limited: {url}")]
    RateLimited { url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Reference kind that is never fetched.
    #[error("unsupported reference: {0}")]
    Unsupported(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Manifest Errors ---

/// Errors reading the CSV manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be opened.
    #[error("failed to open manifest '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A row could not be decoded.
    #[error("malformed manifest row {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests;
