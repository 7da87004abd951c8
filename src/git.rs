//! Git command wrappers.
//!
//! This module provides a thin wrapper around the git CLI, handling
//! subprocess execution, live output relay and error formatting.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::Context;

use crate::config::Config;
use crate::output::Logger;

/// Fresh checkout of `remote` into `target`.
pub fn clone(config: &Config, logger: &Logger, remote: &str, target: &Path) -> anyhow::Result<()> {
    let mut cmd = Command::new("git");
    cmd.arg("clone").arg(progress_flag(config)).arg(remote).arg(target);
    run_streamed(config, logger, cmd, "git clone")
}

/// Update-in-place of the existing checkout at `dir`.
pub fn pull(config: &Config, logger: &Logger, dir: &Path) -> anyhow::Result<()> {
    let mut cmd = Command::new("git");
    cmd.arg("pull").arg(progress_flag(config));
    cmd.current_dir(dir);
    run_streamed(config, logger, cmd, "git pull")
}

fn progress_flag(config: &Config) -> &'static str {
    if config.is_quiet() {
        "--quiet"
    } else {
        "--progress"
    }
}

/// Runs a git command to completion, relaying its stdout and stderr through
/// the shared console sink.
fn run_streamed(
    config: &Config,
    logger: &Logger,
    mut cmd: Command,
    label: &str,
) -> anyhow::Result<()> {
    if config.is_verbose() {
        logger.info(format!("run: {}", render_command(&cmd)));
    }

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to start {label}"))?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let (status, relay) = thread::scope(|scope| {
        // Both pipes must be drained; the child stalls if either fills up.
        let stderr_pump = stderr.map(|mut err| {
            let mut sink = logger.sink().clone();
            scope.spawn(move || relay_stream(&mut err, &mut sink))
        });
        let mut relay = match stdout {
            Some(mut out) => {
                let mut sink = logger.sink().clone();
                relay_stream(&mut out, &mut sink)
            }
            None => Ok(()),
        };
        if let Some(pump) = stderr_pump {
            let from_stderr = pump.join().expect("stderr relay thread panicked");
            relay = relay.and(from_stderr);
        }
        (child.wait(), relay)
    });

    let status = status.with_context(|| format!("failed to wait for {label}"))?;
    if !status.success() {
        anyhow::bail!("{label} failed with {status}");
    }
    // A non-zero exit outranks a relay failure.
    relay.with_context(|| format!("relay {label} output"))?;
    Ok(())
}

fn relay_stream(reader: &mut impl io::Read, writer: &mut impl io::Write) -> io::Result<()> {
    io::copy(reader, writer).map(|_| ())
}

fn render_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
