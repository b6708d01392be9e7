// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::global::GlobalOptions;
use crate::cmd::load_settings;
use crate::env::Env;
use crate::error::Result;
use crate::export::ExportSummary;

/// What the export command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The env file was written.
    Written(ExportSummary),
    /// `--dry`: lines were printed instead.
    Printed { lines: usize },
}

/// Main handler for the export command.
///
/// With `--dry` the lines go to `out` and no file is touched.
///
/// # Errors
///
/// Returns an error if configuration fails, no output file can be
/// determined, the output file cannot be written, or a selected variable
/// is not valid UTF-8.
pub fn run_export_command<W: Write>(
    global: &GlobalOptions,
    env: &Env,
    home: Option<&Path>,
    out: &mut W,
) -> Result<ExportOutcome> {
    let settings = load_settings(global, env, home)?.settings;

    if global.dry {
        let lines = settings.exporter.write_to(env, out)?;
        info!(lines, "dry run, env file not written");
        return Ok(ExportOutcome::Printed { lines });
    }

    let path = settings.output_path()?;
    let summary = settings.exporter.export_to_file(env, path)?;
    Ok(ExportOutcome::Written(summary))
}
