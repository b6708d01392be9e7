// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> current_env() --> Command Dispatch
//!   Export (default) | Options | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use envfile::cli::global::GlobalOptions;
use envfile::cli::{self, Command};
use envfile::cmd::export::run_export_command;
use envfile::cmd::options::run_options_command;
use envfile::env::{current_env, resolve_home};
use envfile::logging::init_logging;
use envfile::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global.log_level.unwrap_or(LogLevel::INFO);
    let file_level = global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let env = current_env();
    let home = resolve_home(&env);
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(stdout, "{}", env!("CARGO_PKG_VERSION")).map_err(anyhow::Error::from)
        }
        Some(Command::Options(args)) => {
            run_options_command(args, &cli.global, &env, home.as_deref(), &mut stdout)
        }
        Some(Command::Export) | None => {
            run_export_command(&cli.global, &env, home.as_deref(), &mut stdout).map(|_| ())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
