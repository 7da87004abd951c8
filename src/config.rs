//! Workspace-root resolution and CLI verbosity.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use anyhow::anyhow;

use crate::constants::GOPATH_ENV;

/// Runtime configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root; mirrored checkouts live under `<root>/src`.
    pub root: PathBuf,
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
}

impl Config {
    /// Resolves the workspace root from the CLI override or, failing that,
    /// the first non-empty `GOPATH` entry.
    pub fn resolve(root: Option<PathBuf>, verbosity: Verbosity) -> anyhow::Result<Self> {
        let root = match root {
            Some(dir) => to_slash(dir.into_os_string()),
            None => first_search_path(env::var_os(GOPATH_ENV).as_deref())?,
        };
        Ok(Self { root, verbosity })
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Picks the first non-empty entry of a platform path list.
///
/// Takes the raw variable value so callers (and tests) never have to touch
/// the process environment.
fn first_search_path(raw: Option<&OsStr>) -> anyhow::Result<PathBuf> {
    let raw = raw.ok_or_else(|| anyhow!("env {GOPATH_ENV} not set"))?;
    let first = env::split_paths(raw)
        .find(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| anyhow!("env {GOPATH_ENV} is empty"))?;
    Ok(to_slash(first.into_os_string()))
}

/// Normalizes path separators to forward slashes.
#[cfg(windows)]
fn to_slash(path: OsString) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace('\\', "/"))
}

#[cfg(not(windows))]
fn to_slash(path: OsString) -> PathBuf {
    PathBuf::from(path)
}
