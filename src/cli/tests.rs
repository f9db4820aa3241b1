// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["resource-mirror"]).unwrap();
    assert!(cli.global.configs.is_empty());
    assert_eq!(cli.global.log_level, None);
    assert_eq!(cli.mirror.max_downloads, None);
    assert!(!cli.mirror.dry_run);
    assert!(!cli.mirror.fail_on_error);
}

#[test]
fn test_parse_filters() {
    let cli = Cli::try_parse_from([
        "resource-mirror",
        "--category",
        "Slash-Commands",
        "--license",
        "MIT",
        "--max-downloads",
        "5",
    ])
    .unwrap();
    let filters = cli.mirror.filters();
    assert_eq!(filters.category.as_deref(), Some("Slash-Commands"));
    assert_eq!(filters.license.as_deref(), Some("MIT"));
    assert_eq!(filters.max_downloads, Some(5));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "resource-mirror",
        "-l",
        "5",
        "--config",
        "a.toml",
        "-c",
        "b.toml",
        "--log-file",
        "run.log",
        "--no-default-config",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_file, Some(PathBuf::from("run.log")));
    assert!(cli.global.no_default_config);
}

#[test]
fn test_rejects_zero_max_downloads() {
    assert!(Cli::try_parse_from(["resource-mirror", "--max-downloads", "0"]).is_err());
}

#[test]
fn test_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["resource-mirror", "-l", "7"]).is_err());
}

#[test]
fn test_rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["resource-mirror", "build"]).is_err());
}

#[test]
fn test_path_overrides_win() {
    let cli = Cli::try_parse_from([
        "resource-mirror",
        "--output-dir",
        "out/archive",
        "--hosted-dir",
        "out/hosted",
        "--manifest",
        "list.csv",
    ])
    .unwrap();
    let loader = Config::builder().add_toml_str("[paths]\narchive = \"elsewhere\"\n");
    let config = cli.mirror.apply_overrides(loader).unwrap().build().unwrap();
    assert_eq!(config.paths.archive, PathBuf::from("out/archive"));
    assert_eq!(config.paths.hosted, PathBuf::from("out/hosted"));
    assert_eq!(config.paths.manifest, PathBuf::from("list.csv"));
}

#[test]
fn test_unset_paths_keep_config() {
    let cli = Cli::try_parse_from(["resource-mirror"]).unwrap();
    let loader = Config::builder().add_toml_str("[paths]\nhosted = \"public\"\n");
    let config = cli.mirror.apply_overrides(loader).unwrap().build().unwrap();
    assert_eq!(config.paths.hosted, PathBuf::from("public"));
}
