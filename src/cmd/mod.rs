// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Env snapshot + home --> cmd::run_* handlers
//!   export, options
//! ```

pub mod export;
pub mod options;


use std::path::Path;

use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, DEFAULT_CONFIG_FILE, ExportSettings};
use crate::env::Env;
use crate::error::Result;

/// Stacks every configuration source in precedence order.
///
/// # Errors
///
/// Returns an error if an override is not valid UTF-8 or cannot be recorded.
pub fn build_config_loader(global: &GlobalOptions, env: &Env) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_overrides(env)?;
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

/// Configuration as loaded for one run.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    /// Merged configuration.
    pub config: Config,
    /// Settings resolved from `config`.
    pub settings: ExportSettings,
    /// Numbered description of each source that contributed.
    pub sources: Vec<String>,
}

/// Loads the configuration and resolves it into export settings.
///
/// # Errors
///
/// Returns an error if a config source is invalid.
pub fn load_settings(
    global: &GlobalOptions,
    env: &Env,
    home: Option<&Path>,
) -> Result<LoadedSettings> {
    let loader = build_config_loader(global, env)?;
    let sources = loader.format_loaded_files();
    for line in &sources {
        debug!(source = %line, "config source");
    }
    let config = loader.build()?;
    let settings = ExportSettings::resolve(&config.export, &global.blacklist, home);
    Ok(LoadedSettings {
        config,
        settings,
        sources,
    })
}
