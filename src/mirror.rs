// Disk-state inspection, the per-package merge state machine, and the
// sequential runner over the catalog.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::catalog::MirrorPackage;
use crate::config::Config;
use crate::constants::{GIT_DIR, GOPATH_ENV};
use crate::git;
use crate::output::Logger;

/// What currently occupies a package's target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskState {
    /// Nothing at the target path.
    Missing,
    /// A directory containing the git metadata marker.
    Repo,
    /// Something else: a directory without the marker, or a plain file.
    Stale,
}

#[must_use]
pub fn disk_state(dir: &Path) -> DiskState {
    if !dir.exists() {
        return DiskState::Missing;
    }
    if dir.join(GIT_DIR).exists() {
        DiskState::Repo
    } else {
        DiskState::Stale
    }
}

/// Brings one package's local checkout up to date:
/// - no checkout yet: clone the remote into the target path;
/// - existing checkout: pull inside it;
/// - stale content: remove it (non-recursively), then clone.
pub fn merge(config: &Config, logger: &Logger, pkg: &MirrorPackage) -> anyhow::Result<()> {
    let target = pkg.target_dir(&config.root);
    match disk_state(&target) {
        DiskState::Repo => git::pull(config, logger, &target),
        DiskState::Stale => {
            remove_stale(&target)
                .with_context(|| format!("remove stale dir {}", target.display()))?;
            git::clone(config, logger, &pkg.remote_repo, &target)
        }
        DiskState::Missing => git::clone(config, logger, &pkg.remote_repo, &target),
    }
}

/// Deletes a file, a symlink or an empty directory. Never recurses: a
/// non-empty stale directory is surfaced as an error instead of being wiped.
fn remove_stale(path: &Path) -> io::Result<()> {
    // Classify the entry itself: a symlink to a directory is unlinked, not
    // removed as a directory.
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Processes the catalog in declaration order, stopping at the first
/// failure. Each failure is wrapped with the import path it belongs to.
pub fn run(config: &Config, logger: &Logger, packages: &[MirrorPackage]) -> anyhow::Result<()> {
    logger.info(format!("{}: {}", GOPATH_ENV, config.root.display()));
    for pkg in packages {
        logger.info(format!("merge {}", pkg.import_path));
        merge(config, logger, pkg).with_context(|| format!("merge {}", pkg.import_path))?;
    }
    Ok(())
}
