// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::try_from(4).unwrap(), LogLevel::DEBUG);
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| (level.as_u8(), level.to_filter_string()))
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        (
            0,
            "off",
        ),
        (
            1,
            "error",
        ),
        (
            2,
            "warn",
        ),
        (
            3,
            "info,reqwest=warn,hyper=warn,hyper_util=warn",
        ),
        (
            4,
            "debug,reqwest=info,hyper=info,hyper_util=info",
        ),
        (
            5,
            "trace,reqwest=info,hyper=info,hyper_util=info",
        ),
        (
            6,
            "trace",
        ),
    ]
    "#);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .maybe_with_log_file(Some("run.log".to_string()))
        .with_show_target(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("run.log"));
    assert!(config.show_target());
}
