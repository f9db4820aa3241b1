// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource retrieval.
//!
//! ```text
//! File        contents?ref (raw)  ──> dest                 (retried)
//! Directory   contents?ref (json) ──> [entries]            (retried)
//!               type == "file" ──> download_url ──> dest/name (once each)
//! Gist        gists/{id}   (json) ──> {name: content}      (retried)
//!               truncated ──> raw_url ──> dest/name          (once each)
//! Repository  refused, no request
//! ```
//!
//! Entry failures inside a listing or gist do not fail the fetch; they are
//! reported back in [`FetchReport::failed_entries`].

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::classify::ClassifiedRef;
use super::retry::RetryPolicy;
use crate::error::{FsError, MirrorError, MirrorResult, NetworkError};
use crate::net::{ACCEPT_RAW, ApiClient};

/// One item of a contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// The parts of a gist document that are mirrored.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

/// What a successful fetch put on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Files written under the destination.
    pub written: Vec<PathBuf>,
    /// Listing or gist entries that could not be written.
    pub failed_entries: Vec<String>,
}

impl FetchReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed_entries.is_empty()
    }
}

/// Performs the retrieval calls for a classified reference.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ApiClient,
    retry: RetryPolicy,
}

impl Fetcher {
    #[must_use]
    pub const fn new(client: ApiClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Fetch `reference` into `dest`.
    ///
    /// For a `File`, `dest` is the output file; for a `Directory` or `Gist`
    /// it is the output directory.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Unsupported` for a `Repository` without making a
    /// request, the last network error once retries are spent, or a filesystem
    /// error if `dest` cannot be written.
    pub async fn fetch(&self, reference: &ClassifiedRef, dest: &Path) -> MirrorResult<FetchReport> {
        match reference {
            ClassifiedRef::File {
                owner,
                repo,
                branch,
                path,
            } => {
                let url = self.client.contents_url(owner, repo, path, branch);
                self.fetch_file(&url, dest).await
            }
            ClassifiedRef::Directory {
                owner,
                repo,
                branch,
                path,
            } => {
                let url = self.client.contents_url(owner, repo, path, branch);
                self.fetch_directory(&url, dest).await
            }
            ClassifiedRef::Gist { gist_id, .. } => {
                let url = self.client.gist_url(gist_id);
                self.fetch_gist(&url, dest).await
            }
            ClassifiedRef::Repository { owner, repo } => Err(NetworkError::Unsupported(
                format!("full repository download of {owner}/{repo} is not implemented"),
            )
            .into()),
        }
    }

    async fn fetch_file(&self, url: &str, dest: &Path) -> MirrorResult<FetchReport> {
        let bytes = self
            .retry
            .run("file download", || self.client.download_to(url, ACCEPT_RAW, dest))
            .await?;
        debug!(path = %dest.display(), bytes, "file written");

        Ok(FetchReport {
            written: vec![dest.to_path_buf()],
            failed_entries: Vec::new(),
        })
    }

    async fn fetch_directory(&self, url: &str, dest: &Path) -> MirrorResult<FetchReport> {
        let entries: Vec<DirectoryEntry> = self
            .retry
            .run("directory listing", || self.client.get_json(url))
            .await?;

        create_dir(dest).await?;

        let mut report = FetchReport::default();
        // Sub-directories are not descended into.
        for entry in entries.iter().filter(|e| e.kind == "file") {
            let result: MirrorResult<PathBuf> = match (&entry.download_url, entry_path(dest, &entry.name)) {
                (Some(download_url), Some(target)) => self
                    .client
                    .download_to(download_url, ACCEPT_RAW, &target)
                    .await
                    .map(|_| target),
                (None, _) => Err(NetworkError::InvalidResponse {
                    url: url.to_string(),
                    message: format!("entry '{}' has no download_url", entry.name),
                }
                .into()),
                (_, None) => Err(unsafe_name(&entry.name)),
            };
            record(&mut report, &entry.name, result);
        }

        Ok(report)
    }

    async fn fetch_gist(&self, url: &str, dest: &Path) -> MirrorResult<FetchReport> {
        let gist: Gist = self
            .retry
            .run("gist fetch", || self.client.get_json(url))
            .await?;

        create_dir(dest).await?;

        let mut report = FetchReport::default();
        for (name, file) in &gist.files {
            let Some(target) = entry_path(dest, name) else {
                record(&mut report, name, Err(unsafe_name(name)));
                continue;
            };
            let result: MirrorResult<PathBuf> = match self.gist_content(url, name, file).await {
                Ok(content) => tokio::fs::write(&target, content)
                    .await
                    .map(|()| target.clone())
                    .map_err(|e| FsError::io(&target, e).into()),
                Err(e) => Err(e),
            };
            record(&mut report, name, result);
        }

        Ok(report)
    }

    /// Inline content, or the raw document when the API truncated it.
    async fn gist_content(&self, url: &str, name: &str, file: &GistFile) -> MirrorResult<String> {
        match (&file.content, &file.raw_url) {
            (Some(content), _) if !file.truncated => Ok(content.clone()),
            (_, Some(raw_url)) => self.client.get_text(raw_url).await,
            (Some(content), None) => Ok(content.clone()),
            (None, None) => Err(NetworkError::InvalidResponse {
                url: url.to_string(),
                message: format!("gist file '{name}' has no content"),
            }
            .into()),
        }
    }
}

async fn create_dir(dest: &Path) -> MirrorResult<()> {
    tokio::fs::create_dir_all(dest)
        .await
        .map_err(|e| FsError::io(dest, e).into())
}

/// Join an API-supplied name onto `dest`, refusing anything that is not a
/// single plain path component.
fn entry_path(dest: &Path, name: &str) -> Option<PathBuf> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    valid.then(|| dest.join(name))
}

fn unsafe_name(name: &str) -> MirrorError {
    MirrorError::Other(format!("refusing unsafe entry name '{name}'").into())
}

fn record(report: &mut FetchReport, name: &str, result: MirrorResult<PathBuf>) {
    match result {
        Ok(path) => report.written.push(path),
        Err(e) => {
            warn!(entry = name, error = %e, "entry skipped");
            report.failed_entries.push(name.to_string());
        }
    }
}
