// resource-mirror: Community Resource Mirror
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)            config
//!                |           TOML + MIRROR_* env
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          mirror           |
//!              |  row loop, stats, paths   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             manifest     github    policy
//!               CSV     classify/fetch  licenses,
//!                          |  retry    categories
//!                          v
//!                         net
//!                   reqwest ApiClient
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod manifest;
pub mod mirror;
pub mod net;
pub mod policy;
pub mod utility;
