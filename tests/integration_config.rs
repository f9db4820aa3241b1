// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for layered configuration loading.

use std::path::PathBuf;

use resource_mirror::config::Config;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// File layering
// =============================================================================

#[test]
fn config_later_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    let base = write(
        &dir,
        "base.toml",
        "[fetch]\nmax_retries = 5\nrow_delay_min_ms = 10\nrow_delay_max_ms = 20\n",
    );
    let local = write(&dir, "local.toml", "[fetch]\nmax_retries = 0\n");

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.fetch.max_retries, 0);
    assert_eq!(config.fetch.row_delay(), 10..=20);
}

#[test]
fn config_missing_optional_file_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Config::builder().add_toml_file_optional(dir.path().join("mirror.toml"));
    assert!(loader.sources().is_empty());
    let config = loader.build().unwrap();
    assert_eq!(config.github.user_agent, "awesome-claude-code Downloader/1.0");
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::builder().add_toml_file(dir.path().join("absent.toml")).build().is_err());
}

#[test]
fn config_override_beats_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "mirror.toml", "[paths]\nmanifest = \"from-file.csv\"\n");

    let config = Config::builder()
        .add_toml_file(&file)
        .set("paths.manifest", "from-cli.csv")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.manifest, PathBuf::from("from-cli.csv"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn config_rejects_bad_values() {
    for toml in [
        "[github]\napi_url = \"\"\n",
        "[fetch]\nrow_delay_min_ms = 5\nrow_delay_max_ms = 1\n",
        "[fetch]\nmax_retries = -1\n",
        "[fetch]\nmax_retries = 11\n",
        "[paths]\nprefix = \"/build\"\n",
    ] {
        assert!(Config::builder().add_toml_str(toml).build().is_err(), "accepted:\n{toml}");
    }
}
