// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output locations for a classified row.
//!
//! ```text
//!              archive                              hosted (open source only)
//! File         archive/cat/name/<file>              hosted/mapped/name/<file>
//! Directory    archive/cat/name/                    hosted/mapped/name/
//! Gist         archive/cat/name-gist/               hosted/mapped/name/
//! Repository   archive/cat/name   (never written)   -
//! ```

use std::path::{Path, PathBuf};

use crate::github::ClassifiedRef;
use crate::manifest::ManifestRow;
use crate::policy;

/// File name used when a file link has no usable last segment.
const FALLBACK_FILE_NAME: &str = "resource";

/// Directory name used when the display name sanitizes to nothing.
pub const FALLBACK_NAME: &str = "unnamed";

/// Where a row's content goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePlan {
    pub archive: PathBuf,
    /// Present only when the row's license is open source.
    pub hosted: Option<PathBuf>,
}

/// Compute the archive path and, for open-source rows, the hosted path.
#[must_use]
pub fn plan_paths(
    reference: &ClassifiedRef,
    row: &ManifestRow,
    archive_dir: &Path,
    hosted_dir: &Path,
) -> ResourcePlan {
    let mut safe_name = policy::sanitize_filename(&row.display_name);
    if safe_name.is_empty() {
        // never let a row resolve to the shared category directory
        safe_name = FALLBACK_NAME.to_string();
    }
    let archive_base = archive_dir.join(policy::archive_category(&row.category));
    let hosted_base = policy::is_open_source(row.license())
        .then(|| hosted_dir.join(policy::hosted_category(&row.category)));

    match reference {
        ClassifiedRef::File { .. } => {
            let file_name = reference.file_name().unwrap_or(FALLBACK_FILE_NAME);
            ResourcePlan {
                archive: archive_base.join(&safe_name).join(file_name),
                hosted: hosted_base.map(|base| base.join(&safe_name).join(file_name)),
            }
        }
        ClassifiedRef::Directory { .. } => ResourcePlan {
            archive: archive_base.join(&safe_name),
            hosted: hosted_base.map(|base| base.join(&safe_name)),
        },
        ClassifiedRef::Gist { .. } => ResourcePlan {
            archive: archive_base.join(format!("{safe_name}-gist")),
            hosted: hosted_base.map(|base| base.join(&safe_name)),
        },
        ClassifiedRef::Repository { .. } => ResourcePlan {
            archive: archive_base.join(&safe_name),
            hosted: None,
        },
    }
}
