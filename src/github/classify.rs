// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! URL shape classification.
//!
//! ```text
//! github.com/{owner}/{repo}/blob|raw/{branch}/{path}  -> File
//! github.com/{owner}/{repo}/tree/{branch}/{path}      -> Directory
//! github.com/{owner}/{repo}[/]                        -> Repository
//! gist.github.com/{owner}/{id}                        -> Gist
//! ```
//!
//! Patterns are tried in that order and the first match wins. A `?query`
//! or `#fragment` after a path is not part of the path.

use anyhow::Context;
use regex::{Captures, Regex};
use std::fmt;

use crate::error::Result;

/// Parsed form of a resource link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedRef {
    File {
        owner: String,
        repo: String,
        branch: String,
        path: String,
    },
    Directory {
        owner: String,
        repo: String,
        branch: String,
        path: String,
    },
    Repository {
        owner: String,
        repo: String,
    },
    Gist {
        owner: String,
        gist_id: String,
    },
}

impl ClassifiedRef {
    /// Short name of the variant, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::File { .. } => "file",
            Self::Directory { .. } => "directory",
            Self::Repository { .. } => "repository",
            Self::Gist { .. } => "gist",
        }
    }

    /// Last path component of a `File` reference.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::File { path, .. } => path.rsplit('/').find(|s| !s.is_empty()),
            _ => None,
        }
    }
}

impl fmt::Display for ClassifiedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File {
                owner,
                repo,
                branch,
                path,
            }
            | Self::Directory {
                owner,
                repo,
                branch,
                path,
            } => write!(f, "{} {owner}/{repo}@{branch}:{path}", self.kind()),
            Self::Repository { owner, repo } => write!(f, "repository {owner}/{repo}"),
            Self::Gist { owner, gist_id } => write!(f, "gist {owner}/{gist_id}"),
        }
    }
}

/// Compiled link patterns.
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    file: Regex,
    directory: Regex,
    repository: Regex,
    gist: Regex,
}

impl UrlClassifier {
    /// Compile the link patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let compile = |name: &str, pattern: &str| {
            Regex::new(pattern).with_context(|| format!("failed to compile {name} url pattern"))
        };

        Ok(Self {
            file: compile(
                "file",
                r"^https://github\.com/([^/]+)/([^/]+)/(?:blob|raw)/([^/]+)/([^?#]+)",
            )?,
            directory: compile(
                "directory",
                r"^https://github\.com/([^/]+)/([^/]+)/tree/([^/]+)/([^?#]+)",
            )?,
            repository: compile("repository", r"^https://github\.com/([^/]+)/([^/]+)/?$")?,
            gist: compile("gist", r"^https://gist\.github\.com/([^/]+)/([^/#]+)")?,
        })
    }

    /// Classify a link, or `None` if it is not a supported shape.
    #[must_use]
    pub fn classify(&self, url: &str) -> Option<ClassifiedRef> {
        if let Some(c) = self.file.captures(url) {
            let [owner, repo, branch, path] = groups(&c);
            return Some(ClassifiedRef::File {
                owner,
                repo,
                branch,
                path,
            });
        }
        if let Some(c) = self.directory.captures(url) {
            let [owner, repo, branch, path] = groups(&c);
            return Some(ClassifiedRef::Directory {
                owner,
                repo,
                branch,
                path,
            });
        }
        if let Some(c) = self.repository.captures(url) {
            let [owner, repo] = groups(&c);
            return Some(ClassifiedRef::Repository { owner, repo });
        }
        self.gist.captures(url).map(|c| {
            let [owner, gist_id] = groups(&c);
            ClassifiedRef::Gist { owner, gist_id }
        })
    }
}

fn groups<const N: usize>(captures: &Captures<'_>) -> [String; N] {
    std::array::from_fn(|i| {
        captures
            .get(i + 1)
            .map_or_else(String::new, |m| m.as_str().to_string())
    })
}
