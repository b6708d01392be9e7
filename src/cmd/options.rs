// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command implementation.

use std::io::Write;
use std::path::Path;

use crate::cli::OptionsArgs;
use crate::cli::global::GlobalOptions;
use crate::cmd::load_settings;
use crate::env::Env;
use crate::error::Result;

/// Display the configuration sources and the resolved options.
///
/// # Errors
///
/// Returns an error if configuration fails or `out` cannot be written.
pub fn run_options_command<W: Write>(
    args: &OptionsArgs,
    global: &GlobalOptions,
    env: &Env,
    home: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let loaded = load_settings(global, env, home)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &loaded.config)?;
        writeln!(out)?;
        return Ok(());
    }

    if loaded.sources.is_empty() {
        writeln!(out, "# no configuration sources, using defaults")?;
    } else {
        for line in &loaded.sources {
            writeln!(out, "# {line}")?;
        }
    }
    for line in loaded.settings.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
