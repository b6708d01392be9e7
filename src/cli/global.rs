// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --prefixes STR    ← export.prefixes
//! --output FILE     ← export.env_file
//! --blacklist NAME  ← added to export.blacklist (can repeat)
//! --dry             ← Print instead of writing
//! --log-level N     ← Console verbosity (0-5)
//!
//! Precedence: CLI flags > ENV_* > --config > envfile.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::{ConfigError, EnvfileResult};
use crate::logging::{LogLevel, parse_log_level};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of envfile.toml from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Space-separated name prefixes, overrides ENV_PREFIXES.
    #[arg(short = 'p', long = "prefixes", value_name = "PREFIXES", allow_hyphen_values = true)]
    pub prefixes: Option<String>,

    /// Output file, overrides ENV_FILE.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Additional variable name to never export.
    /// Can be specified multiple times.
    #[arg(short = 'b', long = "blacklist", value_name = "NAME", action = clap::ArgAction::Append)]
    pub blacklist: Vec<String>,

    /// Prints the lines to stdout instead of writing the file.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", env = "ENVFILE_LOG_LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = parse_log_level)]
    pub file_log_level: Option<LogLevel>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `--output` is not valid UTF-8.
    pub fn to_config_overrides(&self) -> EnvfileResult<Vec<(&'static str, String)>> {
        let mut overrides = Vec::new();

        if let Some(ref prefixes) = self.prefixes {
            overrides.push(("export.prefixes", prefixes.clone()));
        }

        if let Some(ref output) = self.output {
            let output = output.to_str().ok_or_else(|| ConfigError::InvalidValue {
                section: "export".to_string(),
                key: "env_file".to_string(),
                message: format!("--output path is not valid UTF-8: {}", output.display()),
            })?;
            overrides.push(("export.env_file", output.to_string()));
        }

        Ok(overrides)
    }
}
