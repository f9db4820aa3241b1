// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub link handling.
//!
//! ```text
//! classify  link string --> ClassifiedRef (no I/O)
//! fetch     ClassifiedRef + dest --> files on disk
//! retry     RetryPolicy: bounded loop, 2^n + jitter backoff
//! ```

pub mod classify;
pub mod fetch;
pub mod retry;


pub use classify::{ClassifiedRef, UrlClassifier};
pub use fetch::{FetchReport, Fetcher};
pub use retry::RetryPolicy;
