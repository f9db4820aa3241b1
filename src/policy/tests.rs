// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{archive_category, hosted_category, is_open_source, sanitize_filename};

#[test]
fn test_open_source_membership_is_exact() {
    assert!(is_open_source("MIT"));
    assert!(is_open_source("Apache-2.0"));
    assert!(is_open_source("BSL-1.0"));
    assert!(!is_open_source("mit"));
    assert!(!is_open_source("MIT "));
    assert!(!is_open_source("Proprietary"));
    assert!(!is_open_source("NOT_FOUND"));
    assert!(!is_open_source(""));
}

#[test]
fn test_hosted_category_mapping() {
    let mapped: Vec<_> = [
        "Slash-Commands",
        "CLAUDE.md Files",
        "Workflows & Knowledge Guides",
        "Tooling",
        "Official Documentation",
        "Implementation",
        " Implementation",
        "Hooks",
        "tooling",
    ]
    .into_iter()
    .map(|c| (c, hosted_category(c)))
    .collect();

    insta::assert_debug_snapshot!(mapped, @r#"
    [
        (
            "Slash-Commands",
            "slash_command",
        ),
        (
            "CLAUDE.md Files",
            "claude_md",
        ),
        (
            "Workflows & Knowledge Guides",
            "workflow",
        ),
        (
            "Tooling",
            "tooling",
        ),
        (
            "Official Documentation",
            "blog",
        ),
        (
            "Implementation",
            "implementation",
        ),
        (
            " Implementation",
            "implementation",
        ),
        (
            "Hooks",
            "other",
        ),
        (
            "tooling",
            "other",
        ),
    ]
    "#);
}

#[test]
fn test_archive_category() {
    assert_eq!(archive_category("Tooling"), "tooling");
    assert_eq!(
        archive_category("Workflows & Knowledge Guides"),
        "workflows-knowledge-guides"
    );
    assert_eq!(archive_category("CLAUDE.md Files"), "claude.md-files");
    assert_eq!(archive_category("Slash-Commands"), "slash-commands");
}

#[test]
fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("My Cool  Tool"), "My-Cool-Tool");
    assert_eq!(sanitize_filename("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
    assert_eq!(sanitize_filename("  .hidden name. "), "hidden-name");
    assert_eq!(sanitize_filename("--x--"), "x");
    assert_eq!(sanitize_filename(""), "");
}

#[test]
fn test_sanitize_filename_truncates() {
    let long = "a".repeat(300);
    assert_eq!(sanitize_filename(&long).len(), 255);
}
