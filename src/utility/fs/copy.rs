// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copies `files` from under `src_root` to the same relative place under
/// `dst_root`.
///
/// A file equal to `src_root` itself lands exactly at `dst_root`. Parents are
/// created, existing files are overwritten and nothing else under either root
/// is read or touched.
///
/// Returns the destination paths in input order.
///
/// # Errors
///
/// Returns an error if a file lies outside `src_root` or any IO operation
/// fails.
pub async fn copy_listed_async(
    src_root: &Path,
    files: &[PathBuf],
    dst_root: &Path,
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(files.len());

    for src in files {
        let relative = src.strip_prefix(src_root).with_context(|| {
            format!("{} is not under {}", src.display(), src_root.display())
        })?;
        let dst = if relative.as_os_str().is_empty() {
            dst_root.to_path_buf()
        } else {
            dst_root.join(relative)
        };
        copy_file_async(src, &dst).await?;
        copied.push(dst);
    }

    Ok(copied)
}

/// Copies a single file to `dst`, creating parent directories.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or `dst` cannot be written.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::copy(src, dst)
        .await
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}
