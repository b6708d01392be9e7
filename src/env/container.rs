// envfile: CI environment exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only environment variable container.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::path::PathBuf;

/// A snapshot of environment variables.
///
/// Built once from the process environment (or from a map in tests) and
/// only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
    /// Lossy names of entries whose name or value is not valid UTF-8.
    unrepresentable: BTreeSet<String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            unrepresentable: BTreeSet::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars,
            unrepresentable: BTreeSet::new(),
        }
    }

    /// Creates an environment from raw OS strings.
    ///
    /// Entries that are not valid UTF-8 are not stored as variables; their
    /// lossy name is remembered so callers can refuse to export them.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    env.vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    env.unrepresentable.insert(key);
                }
                (Err(key), _) => {
                    env.unrepresentable
                        .insert(key.to_string_lossy().into_owned());
                }
            }
        }
        env
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Gets a variable, treating an empty value as unset.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Returns an iterator over environment variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the lossy names of entries that are not valid UTF-8.
    pub fn unrepresentable(&self) -> impl Iterator<Item = &str> {
        self.unrepresentable.iter().map(String::as_str)
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.unrepresentable.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len() + self.unrepresentable.len()
    }

    /// Resolves the user's home directory from this environment.
    ///
    /// `HOME` first, then a non-empty `USERPROFILE`. A `HOME` that is set but
    /// empty resolves to `/`, like a shell's `~`.
    #[must_use]
    pub fn home_dir(&self) -> Option<PathBuf> {
        match self.get("HOME") {
            Some("") => Some(PathBuf::from("/")),
            Some(home) => Some(PathBuf::from(home)),
            None => self.get_non_empty("USERPROFILE").map(PathBuf::from),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
