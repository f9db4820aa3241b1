// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP access to the hosting API.
//!
//! ```text
//! ApiClient::from_config(&GithubConfig)
//!   User-Agent  github.user_agent
//!   Auth        Bearer $GITHUB_TOKEN (optional)
//!        |
//!        +-------------+--------------+
//!        v             v              v
//!   download_to()  get_json<T>()  get_text()
//!   raw bytes       listing/gist  gist overflow
//!        |
//!        v
//!   status check: 2xx ok | 429 / 403+remaining=0 RateLimited | HttpError
//! ```

use crate::config::types::GithubConfig;
use crate::error::{FsError, MirrorResult, NetworkError};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Media type asking the contents endpoint for the raw file body.
pub const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

/// Media type for JSON listings and gists.
pub const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Removes a partially written file on drop unless kept.
struct PartialFileGuard {
    path: PathBuf,
    keep: bool,
}

impl PartialFileGuard {
    const fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    const fn keep(&mut self) {
        self.keep = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Client for the retrieval calls, built once at startup.
///
/// Holds the client identifier and the optional credential explicitly so
/// nothing about authentication lives in global state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client with an explicit credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &GithubConfig, token: Option<String>) -> MirrorResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(NetworkError::Reqwest)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Build a client reading the credential from `config.token_env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &GithubConfig) -> MirrorResult<Self> {
        Self::new(config, std::env::var(&config.token_env).ok())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`
    #[must_use]
    pub fn contents_url(&self, owner: &str, repo: &str, path: &str, branch: &str) -> String {
        format!(
            "{}/repos/{owner}/{repo}/contents/{}?ref={branch}",
            self.api_url,
            path.trim_matches('/')
        )
    }

    /// `GET /gists/{id}`
    #[must_use]
    pub fn gist_url(&self, gist_id: &str) -> String {
        format!("{}/gists/{gist_id}", self.api_url)
    }

    fn request(&self, url: &str, accept: &str) -> RequestBuilder {
        let request = self.client.get(url).header(ACCEPT, accept);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, url: &str, accept: &str) -> MirrorResult<Response> {
        debug!(url, "GET");
        let response = self
            .request(url, accept)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;
        check_status(url, response)
    }

    /// Stream a response body into `output`, creating parent directories.
    ///
    /// Returns the number of bytes written. A failed transfer leaves no file
    /// behind; an existing file is replaced.
    ///
    /// # Errors
    ///
    /// Returns a network error for transport failures or non-success status,
    /// and a filesystem error if the output cannot be written.
    pub async fn download_to(&self, url: &str, accept: &str, output: &Path) -> MirrorResult<u64> {
        let response = self.send(url, accept).await?;

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FsError::io(parent, e))?;
        }

        let mut file = tokio::fs::File::create(output)
            .await
            .map_err(|e| FsError::io(output, e))?;
        let mut guard = PartialFileGuard::new(output.to_path_buf());

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(NetworkError::Reqwest)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| FsError::io(output, e))?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| FsError::io(output, e))?;
        guard.keep();

        Ok(written)
    }

    /// Fetch and decode a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a network error for transport failures, non-success status, or
    /// a body that does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> MirrorResult<T> {
        let response = self.send(url, ACCEPT_JSON).await?;
        let body = response.bytes().await.map_err(NetworkError::Reqwest)?;
        serde_json::from_slice(&body).map_err(|e| {
            NetworkError::InvalidResponse {
                url: url.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Fetch a body as text.
    ///
    /// # Errors
    ///
    /// Returns a network error for transport failures or non-success status.
    pub async fn get_text(&self, url: &str) -> MirrorResult<String> {
        let response = self.send(url, ACCEPT_RAW).await?;
        Ok(response.text().await.map_err(NetworkError::Reqwest)?)
    }
}

fn check_status(url: &str, response: Response) -> MirrorResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let budget_spent = status == StatusCode::FORBIDDEN
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0");

    if status == StatusCode::TOO_MANY_REQUESTS || budget_spent {
        return Err(NetworkError::RateLimited {
            url: url.to_string(),
        }
        .into());
    }

    Err(NetworkError::HttpError {
        status: status.as_u16(),
        url: url.to_string(),
    }
    .into())
}
