//! Shared logging configuration and the level-gated write path
//!
//! An [`Engine`] is a cheap, cloneable handle. Every [`Logger`] derived from
//! the same engine observes level, output and formatter changes immediately,
//! whichever handle made them.

use super::{
    error::{LoggerError, Result},
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    logger::Logger,
    metrics::LoggerMetrics,
    output_format::Formatter,
};
use crate::appenders::{MultiWriter, RotatingFileAppender, RotationPolicy};
use crate::config::{self, Config};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Called with the exit code after a `fatal` record has been written.
pub type ExitHandler = fn(i32) -> !;

/// Destination for formatted lines.
pub type Output = Box<dyn Write + Send>;

/// Whether [`Engine::init`] has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    /// Level `Info`, output on stdout.
    Uninitialized,
    /// `init` ran; `log_file` is the file actually opened, if any.
    Configured { log_file: Option<PathBuf> },
}

struct EngineInner {
    level: RwLock<LogLevel>,
    output: Mutex<Output>,
    formatter: RwLock<Formatter>,
    exit_handler: RwLock<ExitHandler>,
    lifecycle: RwLock<Lifecycle>,
    metrics: LoggerMetrics,
}

#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

impl Engine {
    /// Engine at level `Info` writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Engine at level `Info` writing to `output`.
    #[must_use]
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                level: RwLock::new(LogLevel::Info),
                output: Mutex::new(Box::new(output)),
                formatter: RwLock::new(Formatter::default()),
                exit_handler: RwLock::new(std::process::exit as ExitHandler),
                lifecycle: RwLock::new(Lifecycle::Uninitialized),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    /// A fresh facade with no fields, bound to this engine.
    #[must_use]
    pub fn logger(&self) -> Logger {
        Logger::from_engine(self.clone())
    }

    pub fn level(&self) -> LogLevel {
        *self.inner.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.inner.level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    /// Replace the output. The previous output is flushed and dropped.
    pub fn set_output<W: Write + Send + 'static>(&self, output: W) {
        let previous = {
            let mut guard = self.inner.output.lock();
            std::mem::replace(&mut *guard, Box::new(output))
        };
        Self::retire(previous);
    }

    pub fn formatter(&self) -> Formatter {
        self.inner.formatter.read().clone()
    }

    pub fn set_formatter(&self, formatter: Formatter) {
        *self.inner.formatter.write() = formatter;
    }

    /// Replace the handler used by `fatal` (defaults to `std::process::exit`).
    pub fn set_exit_handler(&self, handler: ExitHandler) {
        *self.inner.exit_handler.write() = handler;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.lifecycle.read().clone()
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.lifecycle(), Lifecycle::Configured { .. })
    }

    /// The log file opened by the last `init`, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        match self.lifecycle() {
            Lifecycle::Configured { log_file } => log_file,
            Lifecycle::Uninitialized => None,
        }
    }

    /// Whether both handles share one configuration.
    pub fn same_as(&self, other: &Engine) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn flush(&self) -> Result<()> {
        self.inner
            .output
            .lock()
            .flush()
            .map_err(|e| LoggerError::writer(format!("flush failed: {}", e)))
    }

    /// Apply `config`: level, then stdout plus a rotating log file.
    ///
    /// Never fails. An unusable path falls back to `./<random>.log`, an unknown
    /// level falls back to `Info`. May be called again to re-apply.
    pub fn init(&self, config: &Config) {
        self.set_level(config::parse_level(&config.level));

        let path = config::resolve_log_path(&config.file);
        let file = match Self::open_log_file(&path) {
            Some(file) => Some(file),
            None => {
                let fallback = config::fallback_log_path();
                Self::open_log_file(&fallback)
            }
        };

        let log_file = match file {
            Some(appender) => {
                let opened = appender.path().to_path_buf();
                self.set_output(MultiWriter::new().with(io::stdout()).with(appender));
                Some(opened)
            }
            None => {
                eprintln!("[LOGGER WARNING] No usable log file; logging to stdout only");
                self.set_output(io::stdout());
                None
            }
        };

        *self.inner.lifecycle.write() = Lifecycle::Configured { log_file };
    }

    fn open_log_file(path: &Path) -> Option<RotatingFileAppender> {
        match RotatingFileAppender::with_policy(path, RotationPolicy::for_init()) {
            Ok(appender) => Some(appender),
            Err(e) => {
                eprintln!("[LOGGER WARNING] Cannot open log file: {}", e);
                None
            }
        }
    }

    /// Gate, format and write one record.
    ///
    /// Write failures are counted and reported on stderr, never returned.
    pub(crate) fn write(&self, level: LogLevel, message: &str, context: &LogContext) {
        if self.admit(level) {
            self.deliver(level, message, context);
        }
    }

    /// Like [`Engine::write`], but `record` only runs for a level that passes
    /// the gate.
    pub(crate) fn write_with<F>(&self, level: LogLevel, record: F)
    where
        F: FnOnce() -> (String, LogContext),
    {
        if self.admit(level) {
            let (message, context) = record();
            self.deliver(level, &message, &context);
        }
    }

    fn admit(&self, level: LogLevel) -> bool {
        let enabled = self.is_enabled(level);
        if !enabled {
            self.inner.metrics.record_filtered();
        }
        enabled
    }

    fn deliver(&self, level: LogLevel, message: &str, context: &LogContext) {
        let entry = LogEntry::new(level, message, context.clone());
        let line = self.inner.formatter.read().format(&entry);

        let result = self.inner.output.lock().write_all(line.as_bytes());
        match result {
            Ok(()) => {
                self.inner.metrics.record_logged();
            }
            Err(e) => {
                self.inner.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Failed to write log entry: {}", e);
            }
        }
    }

    /// Flush and hand `code` to the exit handler.
    pub(crate) fn exit(&self, code: i32) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        let handler = *self.inner.exit_handler.read();
        handler(code)
    }

    fn retire(mut output: Output) {
        if let Err(e) = output.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush replaced output: {}", e);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("level", &self.level())
            .field("lifecycle", &self.lifecycle())
            .finish_non_exhaustive()
    }
}
