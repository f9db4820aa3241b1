// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options for configuration sources and logging.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     <- Additional config files (can repeat)
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (defaults to --log-level)
//! --log-file FILE   <- JSON log file
//!
//! Precedence: CLI flags > MIRROR_* env > --config > mirror.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mirror.toml";

/// Options controlling configuration and logging.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files override earlier ones.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Do not load `mirror.toml` from the working directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
