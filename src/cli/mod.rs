// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envfile using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envfile [global options] [command]
//! export     (default)
//! options    [--json]
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Exports selected environment variables into a shell-sourceable file.
#[derive(Debug, Parser)]
#[command(
    name = "envfile",
    author,
    version,
    about = "Exports selected environment variables into a shell-sourceable file",
    long_about = "envfile Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Writes every environment variable whose name starts with one of\n\
                  the configured prefixes, and is not blacklisted, to a file as\n\
                  `NAME=value` lines with shell-quoted values. Source the file in a\n\
                  later CI step to restore the variables.",
    after_help = "ENVIRONMENT:\n\n\
                  ENV_PREFIXES  space-separated name prefixes\n\
                  \x20             (default: \"TRAVIS CI encrypt TOKEN TESTS\")\n\
                  ENV_FILE      output file (default: ~/env)\n\n\
                  CLI flags override these, which override envfile.toml and --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute (default: export)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Writes the env file (default).
    Export,

    /// Lists the resolved options and where they came from.
    Options(OptionsArgs),

    /// Shows the version.
    Version,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the merged configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
