// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Row selection and output locations.

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::mirror::Filters;

/// Arguments for a mirror run.
#[derive(Debug, Clone, Default, Args)]
pub struct MirrorArgs {
    /// Only process rows whose Category equals this value exactly.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only process rows whose License equals this value exactly.
    #[arg(long, value_name = "LICENSE")]
    pub license: Option<String>,

    /// Stop after this many successful downloads.
    #[arg(long = "max-downloads", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_downloads: Option<u64>,

    /// Archive directory receiving every downloaded resource.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Hosted directory receiving open-source resources.
    #[arg(long = "hosted-dir", value_name = "DIR")]
    pub hosted_dir: Option<PathBuf>,

    /// CSV manifest to read.
    #[arg(short = 'm', long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Classify rows and log planned paths without fetching or writing.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any row failed.
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,
}

impl MirrorArgs {
    /// Row filters from the command line.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters::builder()
            .maybe_category(self.category.clone())
            .maybe_license(self.license.clone())
            .maybe_max_downloads(self.max_downloads)
            .build()
    }

    /// Apply path flags on top of the file and environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be recorded.
    pub fn apply_overrides(&self, loader: ConfigLoader) -> Result<ConfigLoader> {
        let display = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
        loader
            .set_opt("paths.manifest", display(&self.manifest))?
            .set_opt("paths.archive", display(&self.output_dir))?
            .set_opt("paths.hosted", display(&self.hosted_dir))
    }
}
