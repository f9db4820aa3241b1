// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest processing.
//!
//! ```text
//! for row in manifest (file order):
//!   cap reached?            -> stop
//!   inactive?               -> ignore
//!   total += 1
//!   category/license filter -> ignore
//!   no link / unclassified  -> skipped
//!   plan archive (+hosted if open source)
//!   fetch -> downloaded (+copy to hosted) | unsupported -> skipped | failed
//!   pause 1-2s
//! ```
//!
//! One row is finished before the next starts; nothing a row does can stop
//! the scan.

mod plan;


use bon::Builder;
use rand::Rng;
use serde::Serialize;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::github::{ClassifiedRef, Fetcher, UrlClassifier};
use crate::manifest::{ManifestReader, ManifestRow};
use crate::utility::fs::copy::copy_listed_async;

pub use plan::{FALLBACK_NAME, ResourcePlan, plan_paths};

/// Row selection applied after the active check.
#[derive(Debug, Clone, Default, Builder)]
pub struct Filters {
    /// Exact manifest category.
    #[builder(into)]
    pub category: Option<String>,
    /// Exact manifest license.
    #[builder(into)]
    pub license: Option<String>,
    /// Stop once this many resources were downloaded.
    pub max_downloads: Option<u64>,
}

impl Filters {
    #[must_use]
    pub fn matches(&self, row: &ManifestRow) -> bool {
        self.category.as_ref().is_none_or(|c| *c == row.category)
            && self.license.as_ref().is_none_or(|l| l == row.license_raw())
    }
}

/// Counters accumulated over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Active rows seen.
    pub total: u64,
    pub downloaded: u64,
    pub skipped: u64,
    pub failed: u64,
    /// Downloaded rows where some directory or gist entries were missing.
    pub incomplete: u64,
    /// Rows that would have been fetched in a dry run.
    pub planned: u64,
}

impl RunStats {
    /// Rows counted against `max_downloads`.
    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.downloaded + self.planned
    }

    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Inactive => return,
            RowOutcome::Filtered => {}
            RowOutcome::Skipped(_) => self.skipped += 1,
            RowOutcome::Planned => self.planned += 1,
            RowOutcome::Downloaded { complete } => {
                self.downloaded += 1;
                if !complete {
                    self.incomplete += 1;
                }
            }
            RowOutcome::Failed => self.failed += 1,
        }
        self.total += 1;
    }
}

/// Why a row was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoLink,
    Unclassified,
    Unsupported,
}

/// Result of processing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Inactive,
    Filtered,
    Skipped(SkipReason),
    Planned,
    Downloaded { complete: bool },
    Failed,
}

impl RowOutcome {
    /// A retrieval call was made, so the courtesy pause applies.
    #[must_use]
    pub const fn hit_network(&self) -> bool {
        matches!(self, Self::Downloaded { .. } | Self::Failed)
    }
}

/// Settings for one scan.
#[derive(Debug, Clone, Builder)]
pub struct MirrorOptions {
    #[builder(default)]
    filters: Filters,
    #[builder(into)]
    archive_dir: PathBuf,
    #[builder(into)]
    hosted_dir: PathBuf,
    #[builder(default)]
    dry_run: bool,
    /// Pause between fetched rows, in milliseconds.
    #[builder(default = 1000..=2000)]
    row_delay_ms: RangeInclusive<u64>,
}

/// Drives classification, retrieval and hosting for every manifest row.
pub struct Mirror {
    classifier: UrlClassifier,
    fetcher: Fetcher,
    options: MirrorOptions,
}

impl Mirror {
    /// # Errors
    ///
    /// Returns an error if the link patterns fail to compile.
    pub fn new(fetcher: Fetcher, options: MirrorOptions) -> Result<Self> {
        Ok(Self {
            classifier: UrlClassifier::new()?,
            fetcher,
            options,
        })
    }

    /// Process every row of `manifest` in order and return the counters.
    pub async fn run<R: Read>(&self, manifest: &mut ManifestReader<R>) -> RunStats {
        let mut stats = RunStats::default();

        for row in manifest.rows() {
            if let Some(max) = self.options.filters.max_downloads
                && stats.completed() >= max
            {
                info!(max, "reached download limit, stopping");
                break;
            }

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(error = %e, "ignoring unreadable manifest row");
                    continue;
                }
            };

            let outcome = self.process_row(&row, stats.completed() + 1).await;
            stats.record(outcome);

            if outcome.hit_network() {
                self.pause().await;
            }
        }

        stats
    }

    async fn process_row(&self, row: &ManifestRow, ordinal: u64) -> RowOutcome {
        if !row.is_active() {
            return RowOutcome::Inactive;
        }
        if !self.options.filters.matches(row) {
            return RowOutcome::Filtered;
        }

        let Some(url) = row.link() else {
            info!(name = %row.display_name, "skipped: no link");
            return RowOutcome::Skipped(SkipReason::NoLink);
        };

        info!(url, "[{ordinal}] processing {}", row.display_name);

        let Some(reference) = self.classifier.classify(url) else {
            info!(url, "skipped: not a supported GitHub URL");
            return RowOutcome::Skipped(SkipReason::Unclassified);
        };
        debug!(%reference, "classified");

        let plan = plan_paths(
            &reference,
            row,
            &self.options.archive_dir,
            &self.options.hosted_dir,
        );

        if self.options.dry_run {
            return dry_run_outcome(&reference, &plan);
        }

        info!(
            archive = %plan.archive.display(),
            license = row.license(),
            "downloading to archive"
        );

        match self.fetcher.fetch(&reference, &plan.archive).await {
            Ok(report) => {
                info!(files = report.written.len(), "downloaded");
                if let Some(hosted) = &plan.hosted {
                    copy_to_hosted(&plan.archive, &report.written, hosted).await;
                }
                RowOutcome::Downloaded {
                    complete: report.is_complete(),
                }
            }
            Err(e) if e.is_unsupported() => {
                info!(reason = %e, "skipped");
                RowOutcome::Skipped(SkipReason::Unsupported)
            }
            Err(e) => {
                error!(url, error = %e, "download failed");
                RowOutcome::Failed
            }
        }
    }

    async fn pause(&self) {
        if self.options.dry_run {
            return;
        }
        let delay = random_delay(&self.options.row_delay_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn dry_run_outcome(reference: &ClassifiedRef, plan: &ResourcePlan) -> RowOutcome {
    if matches!(reference, ClassifiedRef::Repository { .. }) {
        info!("[DRY-RUN] skipped: full repository downloads are not supported");
        return RowOutcome::Skipped(SkipReason::Unsupported);
    }
    info!(
        archive = %plan.archive.display(),
        hosted = ?plan.hosted,
        "[DRY-RUN] would download"
    );
    RowOutcome::Planned
}

/// Copy the files this fetch wrote into the hosted tree.
///
/// Only `written` is copied; anything else under `archive` may belong to
/// another row. A failure here only costs the hosted copy.
async fn copy_to_hosted(archive: &Path, written: &[PathBuf], hosted: &Path) {
    info!(hosted = %hosted.display(), "copying to hosted directory");
    match copy_listed_async(archive, written, hosted).await {
        Ok(copied) => debug!(files = copied.len(), "copied to hosted directory"),
        Err(e) => warn!(error = ?e, "failed to copy to hosted directory"),
    }
}

fn random_delay(range_ms: &RangeInclusive<u64>) -> Duration {
    if range_ms.is_empty() {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::rng().random_range(range_ms.clone()))
}
