// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{Error, ErrorKind};
use std::path::Path;

use super::{ConfigError, EnvError, EnvfileError, EnvfileResult, FsError};

#[test]
fn test_env_error_display() {
    let err = EnvError::NonUnicode {
        key: "TOKEN_SECRET".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"variable 'TOKEN_SECRET' is not valid UTF-8 and cannot be exported"
    );
}

#[test]
fn test_fs_error_classification() {
    let path = Path::new("/nonexistent/env");

    let not_found = FsError::from_io(path, Error::from(ErrorKind::NotFound));
    assert!(matches!(not_found, FsError::NotFound(ref p) if p == "/nonexistent/env"));

    let denied = FsError::from_io(path, Error::from(ErrorKind::PermissionDenied));
    assert!(matches!(denied, FsError::PermissionDenied(_)));

    let other = FsError::from_io(path, Error::other("disk full"));
    assert!(matches!(other, FsError::IoError { .. }));
}

#[test]
fn test_boxed_conversion_keeps_message() {
    let err: EnvfileError = FsError::NotFound("/tmp/missing/env".to_string()).into();
    assert_eq!(
        err.to_string(),
        "filesystem error: path not found: /tmp/missing/env"
    );
}

#[test]
fn test_error_chain_prints_message_once() {
    let err = anyhow::Error::from(EnvfileError::from(ConfigError::NoHomeDirectory));
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"config error: cannot resolve home directory for the default output file (set ENV_FILE or --output)"
    );

    let err = anyhow::Error::from(EnvfileError::from(FsError::from_io(
        Path::new("/missing/env"),
        Error::from(ErrorKind::NotFound),
    )));
    assert_eq!(format!("{err:#}"), "filesystem error: path not found: /missing/env");

    let err = anyhow::Error::from(EnvfileError::from(FsError::from_io(
        Path::new("/full/env"),
        Error::other("disk full"),
    )));
    assert_eq!(
        format!("{err:#}"),
        "filesystem error: I/O error on '/full/env': disk full"
    );
}

#[test]
fn test_envfile_error_size() {
    // Every variant is a thin Box, so discriminant + pointer = 16 bytes
    let size = std::mem::size_of::<EnvfileError>();
    assert!(size <= 24, "EnvfileError is {size} bytes, expected <= 24");
}

#[test]
fn test_envfile_result_size() {
    let size = std::mem::size_of::<EnvfileResult<()>>();
    assert!(size <= 24, "EnvfileResult<()> is {size} bytes, expected <= 24");
}
