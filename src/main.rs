//! gopath-mirror keeps the golang.org/x sub-repositories synchronized
//! under `$GOPATH/src`.
//!
//! # Usage
//!
//! ```text
//! gopath-mirror                 # clone or pull every catalog entry
//! gopath-mirror --root /ws      # mirror into /ws instead of $GOPATH
//! gopath-mirror --list          # print the catalog and exit
//! gopath-mirror -q | -v         # quieter / chattier output
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use gopath_mirror::catalog;
use gopath_mirror::config::{Config, Verbosity};
use gopath_mirror::mirror;
use gopath_mirror::output::{ConsoleSink, Logger};

#[derive(Parser, Debug)]
#[command(
    name = "gopath-mirror",
    version,
    about = "Mirror the golang.org/x sub-repositories into a GOPATH workspace",
    long_about = None,
)]
struct Cli {
    /// Workspace root to mirror into (defaults to the first GOPATH entry).
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// List the catalog entries and exit without touching the workspace.
    #[arg(long)]
    list: bool,

    /// Suppress progress output and pass --quiet to git.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log each git command line before running it.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let sink = ConsoleSink::stdout();
    let logger = Logger::new(sink.clone(), cli.verbosity());

    let code = match run(&cli, &logger) {
        Ok(()) => 0,
        Err(err) => {
            logger.error(format!("{err:#}"));
            1
        }
    };

    // The sink buffers; process::exit would drop anything still pending.
    let _ = sink.flush();
    process::exit(code);
}

fn run(cli: &Cli, logger: &Logger) -> anyhow::Result<()> {
    if cli.list {
        return list_packages(logger.sink());
    }

    let config = Config::resolve(cli.root.clone(), cli.verbosity())?;
    mirror::run(&config, logger, &catalog::packages())
}

fn list_packages(sink: &ConsoleSink) -> anyhow::Result<()> {
    let mut sink = sink.clone();
    for pkg in catalog::packages() {
        writeln!(sink, "{} {}", pkg.import_path, pkg.remote_repo.dimmed())?;
    }
    Ok(())
}
