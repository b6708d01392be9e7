// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment exporter.
//!
//! ```text
//! Env ──> for each key ──> PrefixSet::matches && !Blacklist::contains
//!                                  |
//!                                  v
//!                    NAME=quote(value)\n ──> io::Write / file
//! ```
//!
//! Each key is visited once, so a key matching several prefixes still
//! yields a single line. An empty prefix (from `"A  B"` or `""`) matches
//! every key.

pub mod quote;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, info, warn};

use crate::env::Env;
use crate::error::{EnvError, EnvfileError, EnvfileResult, FsError};

pub use quote::quote;

/// Prefixes used when nothing is configured.
pub const DEFAULT_PREFIXES: &str = "TRAVIS CI encrypt TOKEN TESTS";

/// Names never exported unless the blacklist is replaced.
pub const DEFAULT_BLACKLIST: &[&str] = &["TRAVIS_COMMIT_MESSAGE"];

/// Ordered list of name prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet(Vec<String>);

impl PrefixSet {
    /// Splits `list` on single spaces, keeping empty segments.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self(list.split(' ').map(str::to_string).collect())
    }

    /// Returns true if `key` starts with any prefix.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.0.iter().any(|prefix| key.starts_with(prefix.as_str()))
    }

    /// Returns true if the set contains the empty prefix, which matches everything.
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self::parse(DEFAULT_PREFIXES)
    }
}

/// Names excluded regardless of prefix match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist(BTreeSet<String>);

impl Blacklist {
    /// Creates an empty blacklist.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Adds names to the blacklist.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(names.into_iter().map(Into::into));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        DEFAULT_BLACKLIST.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut blacklist = Self::empty();
        blacklist.extend(iter);
        blacklist
    }
}

/// Result of writing an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Number of `NAME=VALUE` lines written.
    pub written: usize,
}

/// Filters an [`Env`] and renders the selected variables as shell assignments.
///
/// # Example
///
/// ```
/// use envfile::env::Env;
/// use envfile::export::{Exporter, PrefixSet};
///
/// let env: Env = [("CI_NAME", "x"), ("OTHER", "y")].into_iter().collect();
/// let exporter = Exporter::builder()
///     .with_prefixes(PrefixSet::parse("TRAVIS CI"))
///     .build();
///
/// assert_eq!(exporter.render(&env)?, "CI_NAME=x\n");
/// # Ok::<(), envfile::error::EnvfileError>(())
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Exporter {
    #[builder(setters(name = with_prefixes), default)]
    prefixes: PrefixSet,
    #[builder(setters(name = with_blacklist), default)]
    blacklist: Blacklist,
}

impl Exporter {
    #[must_use]
    pub const fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    #[must_use]
    pub const fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Returns true if `key` should be exported. The blacklist always wins.
    #[must_use]
    pub fn qualifies(&self, key: &str) -> bool {
        self.prefixes.matches(key) && !self.blacklist.contains(key)
    }

    /// Returns the qualifying variables, one entry per key.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NonUnicode`] if a qualifying entry is not valid
    /// UTF-8, since it cannot be written as text.
    pub fn select<'a>(&self, env: &'a Env) -> EnvfileResult<Vec<(&'a str, &'a str)>> {
        if self.prefixes.has_empty() {
            warn!("empty prefix configured, every non-blacklisted variable will be exported");
        }

        if let Some(key) = env.unrepresentable().find(|key| self.qualifies(key)) {
            return Err(EnvError::NonUnicode {
                key: key.to_string(),
            }
            .into());
        }

        let selected: Vec<_> = env.iter().filter(|(key, _)| self.qualifies(key)).collect();
        debug!(
            total = env.len(),
            selected = selected.len(),
            "filtered environment"
        );
        Ok(selected)
    }

    /// Writes the selected variables to `writer` and returns the line count.
    ///
    /// # Errors
    ///
    /// Returns an error if selection fails or the writer fails.
    pub fn write_to<W: Write>(&self, env: &Env, writer: &mut W) -> EnvfileResult<usize> {
        let selected = self.select(env)?;
        for (key, value) in &selected {
            writeln!(writer, "{key}={}", quote(value))?;
        }
        Ok(selected.len())
    }

    /// Renders the env file content as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if selection fails.
    pub fn render(&self, env: &Env) -> EnvfileResult<String> {
        let mut buf = Vec::new();
        self.write_to(env, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Creates or truncates `path` and writes the selected variables to it.
    ///
    /// There is no temp-file-and-rename step: a failure part way through
    /// leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns [`FsError`] if the file cannot be created or written, or
    /// [`EnvError`] if a selected entry is not valid UTF-8.
    pub fn export_to_file(&self, env: &Env, path: &Path) -> EnvfileResult<ExportSummary> {
        let file = File::create(path).map_err(|e| FsError::from_io(path, e))?;
        let mut writer = BufWriter::new(file);

        let written = self.write_to(env, &mut writer).map_err(|e| match e {
            EnvfileError::Io(source) => FsError::from_io(path, *source).into(),
            other => other,
        })?;
        writer.flush().map_err(|e| FsError::from_io(path, e))?;

        info!(path = %path.display(), written, "wrote env file");
        Ok(ExportSummary {
            path: path.to_path_buf(),
            written,
        })
    }
}
