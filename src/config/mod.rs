// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envfile.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envfile.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENV_PREFIXES / ENV_FILE
//! 5. CLI flags (--prefixes, --output)
//! ```
//!
//! `--blacklist` does not override; it adds to the resolved blacklist.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, EnvfileResult};
use crate::export::{Blacklist, Exporter, PrefixSet};

use loader::ConfigLoader;
use types::ExportConfig;

/// Environment variable holding the prefix list.
pub const ENV_PREFIXES_VAR: &str = "ENV_PREFIXES";

/// Environment variable holding the output path.
pub const ENV_FILE_VAR: &str = "ENV_FILE";

/// Config file picked up from the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "envfile.toml";

/// File name used under the home directory when no output is configured.
pub const DEFAULT_ENV_FILE_NAME: &str = "env";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Export options.
    pub export: ExportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envfile::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envfile.toml")
    ///     .set("export.prefixes", "CI TOKEN")?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> EnvfileResult<Self> {
        Self::builder().add_toml_str(content).build()
    }
}

/// Fully resolved export settings.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Filter to apply.
    pub exporter: Exporter,
    /// File to write, `None` when neither a path nor a home directory is known.
    pub env_file: Option<PathBuf>,
}

impl ExportSettings {
    /// Resolves the export configuration against the home directory.
    ///
    /// `extra_blacklist` is added to the configured blacklist. `home` is
    /// only consulted when no output file is configured.
    #[must_use]
    pub fn resolve(
        config: &ExportConfig,
        extra_blacklist: &[String],
        home: Option<&Path>,
    ) -> Self {
        let env_file = config
            .env_file
            .clone()
            .or_else(|| home.map(|home| home.join(DEFAULT_ENV_FILE_NAME)));

        let mut blacklist: Blacklist = config.blacklist.iter().map(String::as_str).collect();
        blacklist.extend(extra_blacklist.iter().map(String::as_str));

        let exporter = Exporter::builder()
            .with_prefixes(PrefixSet::parse(&config.prefixes))
            .with_blacklist(blacklist)
            .build();

        Self { exporter, env_file }
    }

    /// Returns the file to write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if no output file is configured
    /// and no home directory was found.
    pub fn output_path(&self) -> EnvfileResult<&Path> {
        self.env_file
            .as_deref()
            .ok_or_else(|| ConfigError::NoHomeDirectory.into())
    }

    /// Format the resolved options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "export.prefixes",
            format!("{:?}", self.exporter.prefixes().iter().collect::<Vec<_>>()),
        );
        options.insert(
            "export.blacklist",
            self.exporter.blacklist().iter().collect::<Vec<_>>().join(", "),
        );
        options.insert(
            "export.env_file",
            self.env_file.as_ref().map_or_else(
                || "<no home directory>".to_string(),
                |path| path.display().to_string(),
            ),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
