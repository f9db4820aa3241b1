// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! resource-mirror [global options] [mirror options]
//!
//!   global   --config, --no-default-config, -l, --log-file, --file-log-level
//!   mirror   --category, --license, --max-downloads, --output-dir,
//!            --hosted-dir, --manifest, --dry-run, --fail-on-error
//! ```

pub mod global;
pub mod mirror;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::mirror::MirrorArgs;
use clap::Parser;

/// Community Resource Mirror
///
/// Downloads the resources listed in a CSV manifest from GitHub.
#[derive(Debug, Parser)]
#[command(
    name = "resource-mirror",
    author,
    version,
    about = "Download community resources listed in a CSV manifest",
    long_about = "resource-mirror Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads every active row of the manifest, fetches the linked\n\
                  GitHub file, directory or gist into the archive tree and\n\
                  copies open-source resources into the hosted tree.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `mirror.toml` in the current directory,\n\
                  then from every --config file in order, then from MIRROR_*\n\
                  environment variables (e.g. MIRROR_FETCH__MAX_RETRIES=5).\n\
                  Command-line flags override all of them. Use\n\
                  --no-default-config to skip `mirror.toml`.\n\n\
                  Set GITHUB_TOKEN to raise the API rate limit."
)]
pub struct Cli {
    /// Options for configuration and logging
    #[command(flatten)]
    pub global: GlobalOptions,

    /// What to mirror and where
    #[command(flatten)]
    pub mirror: MirrorArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
