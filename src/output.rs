//! Shared console sink and timestamped logging.
//!
//! Progress lines and raw subprocess output go through one [`ConsoleSink`]
//! so they appear in the order they were produced. The sink is a decorator
//! over a buffered writer: every write first flushes pending bytes, then
//! buffers the new ones.

use std::fmt;
use std::io::{self, BufWriter, Write};
use std::sync::{Arc, Mutex};

use chrono::Local;
use colored::Colorize;

use crate::config::Verbosity;
use crate::constants::{LOG_PREFIX, TIME_FORMAT};

/// Cloneable handle to the single console writer.
///
/// Clones share the same buffer, so the logger and subprocess pumps can hold
/// their own handles without reordering output.
#[derive(Clone)]
pub struct ConsoleSink {
    inner: Arc<Mutex<BufWriter<Box<dyn Write + Send>>>>,
}

impl ConsoleSink {
    /// Sink over standard output, for production use.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Sink over an arbitrary writer, for capturing output in tests.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BufWriter::new(Box::new(writer)))),
        }
    }

    /// Drains everything down to the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BufWriter<Box<dyn Write + Send>>> {
        self.inner.lock().expect("ConsoleSink mutex poisoned")
    }
}

impl Write for ConsoleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock();
        // Push out anything still pending before accepting new bytes, so
        // writers sharing the sink stay in temporal order.
        inner.flush()?;
        inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        ConsoleSink::flush(self)
    }
}

/// Timestamped logger writing `>>> HH:MM:SS <message>` lines to the sink.
pub struct Logger {
    sink: ConsoleSink,
    verbosity: Verbosity,
}

impl Logger {
    #[must_use]
    pub fn new(sink: ConsoleSink, verbosity: Verbosity) -> Self {
        Self { sink, verbosity }
    }

    /// The sink shared with subprocess output.
    #[must_use]
    pub fn sink(&self) -> &ConsoleSink {
        &self.sink
    }

    /// Progress message; suppressed in quiet mode.
    pub fn info(&self, msg: impl fmt::Display) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        self.line(msg);
    }

    /// Error message; always written, in red.
    pub fn error(&self, msg: impl fmt::Display) {
        self.line(msg.to_string().red());
    }

    fn line(&self, msg: impl fmt::Display) {
        let stamp = Local::now().format(TIME_FORMAT).to_string();
        let mut sink = self.sink.clone();
        let _ = writeln!(
            sink,
            "{} {} {}",
            LOG_PREFIX.cyan().bold(),
            stamp.dimmed(),
            msg
        );
    }
}
