// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment snapshot.
//!
//! # Architecture
//!
//! ```text
//! std::env::vars_os() --> current_env() --> Env (read-only)
//!                                            vars: BTreeMap<String, String>
//!                                            unrepresentable: lossy keys
//! ```
//!
//! - **Captured once**: nothing below `main` reads the process environment
//! - **UTF-8 internal**: non-UTF-8 entries are set aside, never mangled
//! - **Sorted iteration**: a side effect of the map, not a promise to callers

pub mod container;


pub use container::Env;

use std::path::PathBuf;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    Env::from_os_vars(std::env::vars_os())
}

/// Resolves the home directory for `env`.
///
/// Falls back to the account database (`getpwuid_r` on unix) when the
/// snapshot has neither `HOME` nor `USERPROFILE`.
#[must_use]
pub fn resolve_home(env: &Env) -> Option<PathBuf> {
    env.home_dir().or_else(std::env::home_dir)
}
