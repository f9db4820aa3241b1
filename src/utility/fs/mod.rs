// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers used to populate the hosted tree.
//!
//! ```text
//! copy:  copy_listed_async()  exactly the given files, paths kept relative
//!        copy_file_async()    file -> file, parents created
//! ```

pub mod copy;
