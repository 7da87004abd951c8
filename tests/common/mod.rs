//! Test infrastructure for gopath-mirror integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tempfile::TempDir;

use gopath_mirror::config::{Config, Verbosity};
use gopath_mirror::output::{ConsoleSink, Logger};

/// A bare remote repository with a seeded initial commit, plus a work clone
/// used to push follow-up commits. Cleaned up when dropped.
pub struct RemoteRepo {
    _temp_dir: TempDir,
    bare: PathBuf,
    work: PathBuf,
}

impl RemoteRepo {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let bare = temp_dir.path().join("remote.git");
        let work = temp_dir.path().join("work");

        run_git(temp_dir.path(), &["init", "--bare", "remote.git"])?;

        std::fs::create_dir(&work)?;
        run_git(&work, &["init", "-b", "master"])?;
        run_git(&work, &["config", "user.email", "test@example.com"])?;
        run_git(&work, &["config", "user.name", "Test User"])?;

        std::fs::write(work.join("README.md"), "# Test Repo\n")?;
        run_git(&work, &["add", "README.md"])?;
        run_git(&work, &["commit", "-m", "Initial commit"])?;

        run_git(&work, &["remote", "add", "origin", bare.to_str().unwrap()])?;
        run_git(&work, &["push", "-u", "origin", "master"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            bare,
            work,
        })
    }

    /// Clone URL for the bare repository (a local path works as a remote).
    pub fn url(&self) -> String {
        self.bare.to_str().unwrap().to_string()
    }

    /// Commits a new file in the work clone and pushes it to the remote.
    pub fn add_commit(&self, filename: &str, content: &str) -> Result<()> {
        std::fs::write(self.work.join(filename), content)?;
        run_git(&self.work, &["add", filename])?;
        run_git(&self.work, &["commit", "-m", &format!("Add {filename}")])?;
        run_git(&self.work, &["push", "origin", "master"])?;
        Ok(())
    }
}

/// Runs a git command in `dir`, returning trimmed stdout.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").current_dir(dir).args(args).output()?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn test_config(root: &Path) -> Config {
    Config {
        root: root.to_path_buf(),
        verbosity: Verbosity::Normal,
    }
}

/// Logger that discards everything, for tests that only care about effects.
pub fn silent_logger() -> Logger {
    Logger::new(ConsoleSink::from_writer(io::sink()), Verbosity::Normal)
}

/// Shared byte buffer the sink can write into, for output assertions.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger writing into a capture buffer; returns both ends.
pub fn capturing_logger() -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::new(
        ConsoleSink::from_writer(capture.clone()),
        Verbosity::Normal,
    );
    (logger, capture)
}
