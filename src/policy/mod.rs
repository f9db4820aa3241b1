// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Static license and category policy.
//!
//! ```text
//! license  --> is_open_source()   exact, case-sensitive allow-list
//! category --> hosted_category()  fixed table, fallback "other"
//!          --> archive_category() lowercased + sanitized label
//! name     --> sanitize_filename()
//! ```

/// Licenses that permit redistributing a resource in the hosted tree.
pub const OPEN_SOURCE_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "GPL-2.0",
    "GPL-3.0",
    "LGPL-2.1",
    "LGPL-3.0",
    "MPL-2.0",
    "ISC",
    "0BSD",
    "Unlicense",
    "CC0-1.0",
    "CC-BY-4.0",
    "CC-BY-SA-4.0",
    "AGPL-3.0",
    "EPL-2.0",
    "BSL-1.0",
];

/// Manifest category label to hosted directory token.
const CATEGORY_MAPPING: &[(&str, &str)] = &[
    ("Slash-Commands", "slash_command"),
    ("CLAUDE.md Files", "claude_md"),
    ("Workflows & Knowledge Guides", "workflow"),
    ("Tooling", "tooling"),
    ("Official Documentation", "blog"),
    ("Implementation", "implementation"),
    // legacy label carried a leading space in older manifests
    (" Implementation", "implementation"),
];

/// Hosted token for categories missing from the table.
pub const FALLBACK_CATEGORY: &str = "other";

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Longest file name most filesystems accept.
const MAX_FILENAME_LEN: usize = 255;

/// Exact, case-sensitive allow-list lookup.
#[must_use]
pub fn is_open_source(license: &str) -> bool {
    OPEN_SOURCE_LICENSES.contains(&license)
}

/// Directory token for a category inside the hosted tree.
#[must_use]
pub fn hosted_category(category: &str) -> &'static str {
    CATEGORY_MAPPING
        .iter()
        .find(|(label, _)| *label == category)
        .map_or(FALLBACK_CATEGORY, |(_, token)| *token)
}

/// Directory token for a category inside the archive tree.
///
/// `"Workflows & Knowledge Guides"` becomes `"workflows-knowledge-guides"`.
#[must_use]
pub fn archive_category(category: &str) -> String {
    sanitize_filename(&category.to_lowercase().replace(" & ", "-"))
}

/// Make a display string safe to use as a single path component.
///
/// Drops `<>:"/\|?*`, collapses whitespace runs into `-`, trims leading and
/// trailing `-`/`.`, and caps the result at 255 characters.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches(|c| c == '-' || c == '.')
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect()
}

#[cfg(test)]
mod tests;
