// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Mirror::run --> Summary
//! ```

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use resource_mirror::cli::global::{DEFAULT_CONFIG_FILE, GlobalOptions};
use resource_mirror::cli::{self, Cli};
use resource_mirror::config::Config;
use resource_mirror::config::loader::ConfigLoader;
use resource_mirror::error::Result;
use resource_mirror::github::{Fetcher, RetryPolicy};
use resource_mirror::logging::init_logging;
use resource_mirror::logging::{LogConfig, LogLevel};
use resource_mirror::manifest::ManifestReader;
use resource_mirror::mirror::{Mirror, MirrorOptions, RunStats};
use resource_mirror::net::ApiClient;
use tracing::{debug, info, warn};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix for `MIRROR_SECTION__KEY` environment overrides.
const ENV_PREFIX: &str = "MIRROR";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(stats) if cli.mirror.fail_on_error && stats.failed > 0 => {
            eprintln!("{} resource(s) failed to download", stats.failed);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn build_config_loader(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !cli.global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    cli.mirror
        .apply_overrides(loader.with_env_prefix(ENV_PREFIX))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loader = build_config_loader(cli)?;
    for line in loader.describe_sources() {
        debug!("config source {line}");
    }
    let config = loader.build().context("failed to load configuration")?;
    for option in config.format_options() {
        debug!("{option}");
    }
    Ok(config)
}

async fn run(cli: &Cli) -> Result<RunStats> {
    let config = load_config(cli)?;
    let paths = &config.paths;
    let dry_run = cli.mirror.dry_run;

    let client = ApiClient::from_config(&config.github)?;
    if client.is_authenticated() {
        info!(env = %config.github.token_env, "using GitHub token");
    } else {
        warn!(
            env = %config.github.token_env,
            "no GitHub token set, requests are subject to the anonymous rate limit"
        );
    }

    if !dry_run {
        for dir in [&paths.archive, &paths.hosted] {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }

    let mut manifest = ManifestReader::open(&paths.manifest)?;

    let started = Instant::now();
    println!(
        "Starting resource download at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Archive directory: {}", paths.archive.display());
    println!("Hosted directory: {}", paths.hosted.display());
    print_filters(cli);
    println!();

    let options = MirrorOptions::builder()
        .filters(cli.mirror.filters())
        .archive_dir(paths.archive.clone())
        .hosted_dir(paths.hosted.clone())
        .dry_run(dry_run)
        .row_delay_ms(config.fetch.row_delay())
        .build();
    let fetcher = Fetcher::new(client, RetryPolicy::from(&config.fetch));
    let mirror = Mirror::new(fetcher, options)?;

    let stats = mirror.run(&mut manifest).await;

    print_summary(&stats, started, dry_run);
    Ok(stats)
}

fn print_filters(cli: &Cli) {
    let args = &cli.mirror;
    if let Some(category) = &args.category {
        println!("Category filter: {category}");
    }
    if let Some(license) = &args.license {
        println!("License filter: {license}");
    }
    if let Some(max) = args.max_downloads {
        println!("Max downloads: {max}");
    }
    if args.dry_run {
        println!("Mode: dry run");
    }
}

fn print_summary(stats: &RunStats, started: Instant, dry_run: bool) {
    println!();
    println!("{}", "=".repeat(50));
    println!("Download Summary:");
    println!("Total resources processed: {}", stats.total);
    if dry_run {
        println!("Would download: {}", stats.planned);
    } else {
        println!("Successfully downloaded: {}", stats.downloaded);
        if stats.incomplete > 0 {
            println!("  of which incomplete: {}", stats.incomplete);
        }
    }
    println!("Skipped: {}", stats.skipped);
    println!("Failed: {}", stats.failed);
    println!("Time taken: {:.2}s", started.elapsed().as_secs_f64());
    info!(?stats, "run finished");
}
