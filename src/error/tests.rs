// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, MirrorError, MirrorResult, NetworkError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "fetch".to_string(),
        key: "row_delay_max_ms".to_string(),
        message: "must not be below row_delay_min_ms".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'row_delay_max_ms' in section '[fetch]': must not be below row_delay_min_ms"
    );
}

#[test]
fn test_http_error_display() {
    let err: MirrorError = NetworkError::HttpError {
        status: 404,
        url: "https://api.github.com/gists/abc".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"network error: http error 404: https://api.github.com/gists/abc"
    );
}

#[test]
fn test_retryable_classification() {
    let http: MirrorError = NetworkError::HttpError {
        status: 500,
        url: String::new(),
    }
    .into();
    let limited: MirrorError = NetworkError::RateLimited { url: String::new() }.into();
    let unsupported: MirrorError = NetworkError::Unsupported("repository".to_string()).into();
    let fs: MirrorError = FsError::IoError {
        path: "out".to_string(),
        source: std::io::Error::other("disk full"),
    }
    .into();

    assert!(http.is_retryable());
    assert!(limited.is_retryable());
    assert!(!unsupported.is_retryable());
    assert!(!fs.is_retryable());
}

#[test]
fn test_mirror_error_size() {
    let size = std::mem::size_of::<MirrorError>();
    assert!(size <= 24, "MirrorError is {size} bytes, expected <= 24");
}

#[test]
fn test_mirror_result_size() {
    let size = std::mem::size_of::<MirrorResult<()>>();
    assert!(size <= 24, "MirrorResult<()> is {size} bytes, expected <= 24");
}
