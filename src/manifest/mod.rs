// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CSV manifest of community resources.
//!
//! ```text
//! Display Name | Category | Active | Primary Link | Secondary Link | License | ...
//! ```
//!
//! Columns are matched by header name; extra columns are ignored and missing
//! optional columns read as empty.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ManifestError, MirrorResult};

/// License recorded when the manifest has no license column.
pub const LICENSE_NOT_FOUND: &str = "NOT_FOUND";

/// One resource row. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestRow {
    #[serde(rename = "Display Name")]
    pub display_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Active", default)]
    pub active: String,
    #[serde(rename = "Primary Link", default)]
    pub primary_link: String,
    #[serde(rename = "Secondary Link", default)]
    pub secondary_link: String,
    #[serde(rename = "License", default)]
    pub license: Option<String>,
}

impl ManifestRow {
    /// `Active` holds `TRUE` in any letter case.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.trim().eq_ignore_ascii_case("true")
    }

    /// Primary link, falling back to the secondary one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        [&self.primary_link, &self.secondary_link]
            .into_iter()
            .map(|link| link.trim())
            .find(|link| !link.is_empty())
    }

    /// License as written, for matching `--license`.
    #[must_use]
    pub fn license_raw(&self) -> &str {
        self.license.as_deref().unwrap_or("")
    }

    /// License used for the hosting decision.
    #[must_use]
    pub fn license(&self) -> &str {
        self.license.as_deref().map_or(LICENSE_NOT_FOUND, str::trim)
    }
}

/// Streaming reader over manifest rows in file order.
pub struct ManifestReader<R> {
    inner: csv::Reader<R>,
}

impl ManifestReader<File> {
    /// Open a manifest file.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError::Open` if the file cannot be opened.
    pub fn open(path: &Path) -> MirrorResult<Self> {
        let inner = builder()
            .from_path(path)
            .map_err(|source| ManifestError::Open {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { inner })
    }
}

impl<R: Read> ManifestReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            inner: builder().from_reader(reader),
        }
    }

    /// Iterate rows; a malformed row yields an error and iteration continues.
    pub fn rows(&mut self) -> impl Iterator<Item = MirrorResult<ManifestRow>> + '_ {
        self.inner.deserialize::<ManifestRow>().map(|row| {
            row.map_err(|source| {
                let line = source.position().map_or(0, csv::Position::line);
                ManifestError::Row { line, source }.into()
            })
        })
    }
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
