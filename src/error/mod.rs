// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       EnvfileError (16 bytes)
//!               |
//!   +--------+--+-----+--------+
//!   |        |        |        |
//!   v        v        v        v
//!  Cfg      Env       Fs       Io
//!  Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, InvalidValue, NoHomeDirectory
//!   Env     NonUnicode
//!   Fs      NotFound, PermissionDenied, IoError
//! ```
//!
//! Nothing is recovered locally: every error ends the process with a
//! non-zero exit code.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvfileError`].
pub type EnvfileResult<T> = std::result::Result<T, EnvfileError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
/// Messages embed the inner error, and no variant reports it as `source`.
#[derive(Debug, Error)]
pub enum EnvfileError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Process environment could not be read or represented.
    #[error("environment error: {0}")]
    Env(Box<EnvError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvfileError {
                fn from(err: $error) -> Self {
                    EnvfileError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read, parse or merge configuration sources.
    #[error("failed to load config from {path}: {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// No output file configured and no home directory to default to.
    #[error("cannot resolve home directory for the default output file (set ENV_FILE or --output)")]
    NoHomeDirectory,
}

// --- Environment Errors ---

/// Errors reading the process environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A selected variable has a name or value that is not valid UTF-8.
    #[error("variable '{key}' is not valid UTF-8 and cannot be exported")]
    NonUnicode { key: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {error}")]
    IoError { path: String, error: std::io::Error },
}

impl FsError {
    /// Classifies an I/O error that happened on `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError {
                path,
                error: source,
            },
        }
    }
}

#[cfg(test)]
mod tests;
