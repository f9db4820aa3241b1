// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use std::path::PathBuf;
use std::time::Duration;

fn parse(toml: &str) -> crate::error::Result<Config> {
    Config::builder().add_toml_str(toml).build()
}

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "github.api_url": config.github.api_url,
            "github.token_env": config.github.token_env,
            "fetch.max_retries": config.fetch.max_retries,
            "paths.archive": config.paths.archive,
            "paths.hosted": config.paths.hosted,
        }),
        @r#"
    fetch.max_retries: 3
    github.api_url: "https://api.github.com"
    github.token_env: GITHUB_TOKEN
    paths.archive: ".myob/downloads"
    paths.hosted: resources
    "#
    );
}

#[test]
fn test_config_parse() {
    let toml = r#"
[github]
api_url = "http://localhost:9999"
timeout_secs = 5

[fetch]
max_retries = 1
backoff_unit_ms = 0

[paths]
archive = "/tmp/archive"
"#;

    let config = parse(toml).unwrap();
    assert_eq!(config.github.api_url, "http://localhost:9999");
    assert_eq!(config.github.timeout(), Duration::from_secs(5));
    assert_eq!(config.fetch.max_retries, 1);
    assert_eq!(config.fetch.backoff_unit(), Duration::ZERO);
    assert_eq!(config.paths.archive, PathBuf::from("/tmp/archive"));
    // untouched sections keep their defaults
    assert_eq!(config.paths.hosted, PathBuf::from("resources"));
    assert_eq!(config.fetch.row_delay(), 1000..=2000);
}

#[test]
fn test_config_rejects_unknown_keys() {
    let result = parse("[fetch]\nretries = 3\n");
    assert!(result.is_err());
}

#[test]
fn test_config_rejects_inverted_delay() {
    let result = parse("[fetch]\nrow_delay_min_ms = 500\nrow_delay_max_ms = 100\n");
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("row_delay_max_ms"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_config_caps_max_retries() {
    assert!(parse("[fetch]\nmax_retries = 10\n").is_ok());
    let err = parse("[fetch]\nmax_retries = 2000\nbackoff_unit_ms = 0\n").unwrap_err();
    assert!(
        err.to_string().contains("max_retries"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_config_rejects_empty_api_url() {
    assert!(parse("[github]\napi_url = \" \"\n").is_err());
}

#[test]
fn test_loader_overrides_beat_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[paths]\nhosted = \"from-file\"\n")
        .set("paths.hosted", "from-cli")
        .unwrap()
        .set_opt::<String>("paths.archive", None)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.hosted, PathBuf::from("from-cli"));
    assert_eq!(config.paths.archive, PathBuf::from(".myob/downloads"));
}

#[test]
fn test_loader_describes_sources_in_precedence_order() {
    let loader = ConfigLoader::new()
        .set("fetch.max_retries", 1_i64)
        .unwrap()
        .add_toml_str("[fetch]\n max_retries = 2")
        .add_toml_file_optional("/nonexistent/mirror.toml")
        .with_env_prefix("MIRROR");

    insta::assert_yaml_snapshot!(loader.describe_sources(), @r#"
    - "1. [inline] <string>"
    - "2. [env] MIRROR_*"
    - "3. [override] fetch.max_retries"
    "#);
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mirror.toml");
    std::fs::write(&path, "[paths]\nmanifest = \"list.csv\"\n").unwrap();

    let config = Config::builder().add_toml_file(&path).build().unwrap();
    assert_eq!(config.paths.manifest, PathBuf::from("list.csv"));
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    assert_eq!(options.len(), 10);
    assert!(options.iter().any(|o| o.starts_with("fetch.row_delay_ms")
        && o.ends_with("= 1000..=2000")));
    assert!(options.windows(2).all(|w| w[0] <= w[1]), "options are sorted");
}
