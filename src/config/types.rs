// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envfile.
//!
//! ```toml
//! [export]
//! prefixes  = "TRAVIS CI encrypt TOKEN TESTS"   # split on single spaces
//! blacklist = ["TRAVIS_COMMIT_MESSAGE"]
//! env_file  = "/home/ci/env"                     # default: <home>/env
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::{DEFAULT_BLACKLIST, DEFAULT_PREFIXES};

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Space-separated name prefixes, kept as written so empty segments survive.
    pub prefixes: String,
    /// Names never exported.
    pub blacklist: Vec<String>,
    /// Output file (default: `<home>/env`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.to_string(),
            blacklist: DEFAULT_BLACKLIST.iter().map(ToString::to_string).collect(),
            env_file: None,
        }
    }
}
