// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Blacklist, Exporter, PrefixSet, quote};
use crate::env::Env;
use crate::error::{EnvError, EnvfileError, FsError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn env(vars: &[(&str, &str)]) -> Env {
    vars.iter().copied().collect()
}

/// Minimal POSIX word reader: single quotes, double quotes and backslashes.
fn unquote(word: &str) -> String {
    let mut out = String::new();
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => out.extend(chars.by_ref().take_while(|&c| c != '\'')),
            '"' => {
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => out.extend(chars.next()),
                        c => out.push(c),
                    }
                }
            }
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn test_quote_cases() {
    let cases = [
        ("", "''"),
        ("1", "1"),
        ("abc_DEF-1.2/3:4,5=6+7@8%9", "abc_DEF-1.2/3:4,5=6+7@8%9"),
        ("a b;c", "'a b;c'"),
        ("it's", r#"'it'"'"'s'"#),
        ("$HOME", "'$HOME'"),
        ("line1\nline2", "'line1\nline2'"),
        ("caf\u{e9}", "'caf\u{e9}'"),
        ("*", "'*'"),
    ];

    for (input, expected) in cases {
        assert_eq!(quote(input), expected, "quote({input:?})");
    }
}

#[test]
fn test_quote_reads_back_as_one_word() {
    let values = [
        "",
        "plain",
        "a b;c",
        "'",
        "''",
        "it's \"quoted\"",
        "back\\slash",
        "$(rm -rf /)`id`",
        "tab\tand\nnewline",
        "\u{1F600} emoji",
    ];

    for value in values {
        assert_eq!(unquote(&quote(value)), value, "round trip of {value:?}");
    }
}

// =============================================================================
// Prefixes and blacklist
// =============================================================================

#[test]
fn test_prefix_set_parse_keeps_empty_segments() {
    let default: Vec<_> = PrefixSet::default().iter().map(str::to_string).collect();
    assert_eq!(default, ["TRAVIS", "CI", "encrypt", "TOKEN", "TESTS"]);

    let doubled: Vec<_> = PrefixSet::parse("A  B").iter().map(str::to_string).collect();
    assert_eq!(doubled, ["A", "", "B"]);
    assert!(PrefixSet::parse("A  B").has_empty());
    assert!(PrefixSet::parse("").has_empty());
    assert!(!PrefixSet::default().has_empty());
}

#[test]
fn test_prefix_matching_is_case_sensitive() {
    let prefixes = PrefixSet::default();
    assert!(prefixes.matches("TRAVIS_BUILD_ID"));
    assert!(prefixes.matches("encrypted_abc_key"));
    assert!(prefixes.matches("CI"));
    assert!(!prefixes.matches("travis_build_id"));
    assert!(!prefixes.matches("MY_TOKEN"));
}

#[test]
fn test_blacklist_precedence() {
    let exporter = Exporter::builder()
        .with_prefixes(PrefixSet::parse("TRAVIS TRAVIS_COMMIT"))
        .build();

    assert!(!exporter.qualifies("TRAVIS_COMMIT_MESSAGE"));
    assert!(exporter.qualifies("TRAVIS_COMMIT"));
    assert!(exporter.qualifies("TRAVIS_COMMIT_RANGE"));
}

#[test]
fn test_blacklist_extend() {
    let mut blacklist = Blacklist::default();
    blacklist.extend(["TOKEN_PRIVATE"]);

    let names: Vec<_> = blacklist.iter().collect();
    assert_eq!(names, ["TOKEN_PRIVATE", "TRAVIS_COMMIT_MESSAGE"]);
    assert!(!Blacklist::empty().contains("TRAVIS_COMMIT_MESSAGE"));
}

// =============================================================================
// Selection and rendering
// =============================================================================

#[test]
fn test_render_filters_by_prefix() {
    let env = env(&[("TRAVIS_BUILD", "1"), ("CI_NAME", "x"), ("OTHER", "y")]);
    let exporter = Exporter::builder()
        .with_prefixes(PrefixSet::parse("TRAVIS CI"))
        .build();

    let rendered = exporter.render(&env).unwrap();
    let mut lines: Vec<_> = rendered.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, ["CI_NAME=x", "TRAVIS_BUILD=1"]);
}

#[test]
fn test_render_blacklisted_only_is_empty() {
    let env = env(&[("TRAVIS_COMMIT_MESSAGE", "fix: bug")]);
    assert_eq!(Exporter::default().render(&env).unwrap(), "");
}

#[test]
fn test_render_quotes_values() {
    let env = env(&[("TOKEN_SECRET", "a b;c")]);
    insta::assert_snapshot!(Exporter::default().render(&env).unwrap().trim_end(), @"TOKEN_SECRET='a b;c'");
}

#[test]
fn test_multiple_matching_prefixes_write_one_line() {
    let env = env(&[("TRAVIS_CI_JOB", "7")]);
    let exporter = Exporter::builder()
        .with_prefixes(PrefixSet::parse("TRAVIS TRAVIS_CI CI"))
        .build();

    assert_eq!(exporter.render(&env).unwrap(), "TRAVIS_CI_JOB=7\n");
}

#[test]
fn test_empty_environment_renders_nothing() {
    assert_eq!(Exporter::default().render(&Env::new()).unwrap(), "");
}

#[test]
fn test_no_prefix_matches_renders_nothing() {
    let env = env(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
    let exporter = Exporter::builder()
        .with_prefixes(PrefixSet::parse("NOPE"))
        .build();
    assert_eq!(exporter.render(&env).unwrap(), "");
}

#[test]
fn test_empty_prefix_matches_every_key() {
    let env = env(&[
        ("PATH", "/usr/bin"),
        ("TRAVIS_COMMIT_MESSAGE", "msg"),
        ("X", ""),
    ]);
    let exporter = Exporter::builder().with_prefixes(PrefixSet::parse("")).build();

    assert_eq!(exporter.render(&env).unwrap(), "PATH=/usr/bin\nX=''\n");
}

#[test]
fn test_render_is_idempotent() {
    let env = env(&[("CI", "true"), ("TOKEN_A", "x y"), ("TESTS", "all")]);
    let exporter = Exporter::default();
    assert_eq!(exporter.render(&env).unwrap(), exporter.render(&env).unwrap());
}

#[test]
fn test_every_line_is_a_qualifying_key() {
    let env = env(&[
        ("TRAVIS", "1"),
        ("TRAVIS_COMMIT_MESSAGE", "no"),
        ("CIRCLE", "2"),
        ("encrypted_key", "3"),
        ("ENCRYPTED", "4"),
        ("TOKEN", "5"),
        ("TESTS_FILTER", "6"),
        ("PATH", "7"),
    ]);
    let exporter = Exporter::default();
    let rendered = exporter.render(&env).unwrap();

    let mut keys: Vec<_> = rendered
        .lines()
        .map(|line| line.split_once('=').unwrap().0)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, ["CIRCLE", "TESTS_FILTER", "TOKEN", "TRAVIS", "encrypted_key"]);
    assert!(keys.iter().all(|key| exporter.qualifies(key)));
}

#[cfg(unix)]
#[test]
fn test_select_rejects_qualifying_non_unicode() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let env = Env::from_os_vars([
        (OsString::from("CI"), OsString::from("true")),
        (OsString::from("TOKEN_X"), OsString::from_vec(vec![0xff])),
    ]);

    let err = Exporter::default().select(&env).unwrap_err();
    assert!(
        matches!(err, EnvfileError::Env(ref e) if matches!(**e, EnvError::NonUnicode { ref key } if key == "TOKEN_X"))
    );

    // Not selected, so not an error.
    let only_ci = Exporter::builder().with_prefixes(PrefixSet::parse("CI")).build();
    assert_eq!(only_ci.render(&env).unwrap(), "CI=true\n");
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_export_to_file_truncates() {
    let temp = temp_dir();
    let path = temp.path().join("env");
    std::fs::write(&path, "STALE=1\nSTALE=2\nSTALE=3\n").unwrap();

    let env = env(&[("CI", "true")]);
    let summary = Exporter::default().export_to_file(&env, &path).unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.path, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "CI=true\n");
}

#[test]
fn test_export_to_file_creates_empty_file() {
    let temp = temp_dir();
    let path = temp.path().join("env");

    let summary = Exporter::default().export_to_file(&Env::new(), &path).unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_export_to_file_missing_parent() {
    let temp = temp_dir();
    let path = temp.path().join("missing").join("env");

    let err = Exporter::default()
        .export_to_file(&env(&[("CI", "true")]), &path)
        .unwrap_err();

    assert!(matches!(err, EnvfileError::Fs(ref e) if matches!(**e, FsError::NotFound(_))));
    assert!(!path.exists());
}
