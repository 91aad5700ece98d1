//! # srelab_log
//!
//! A structured logging facade that stamps every record with the file and
//! line of the code that made the call.
//!
//! ## Features
//!
//! - **Call-site metadata**: every line ends with `src=<file>:<line>`
//! - **Structured fields**: `with_field` / `with_error` return new handles and
//!   never touch the one they were called on
//! - **Shared configuration**: level, output and formatter changes are seen by
//!   every logger derived from the same [`Engine`]
//! - **Default logger**: package-level functions plus [`init`], which adds a
//!   size-rotated, gzip-compressed log file next to stdout
//!
//! ```
//! use srelab_log::{Engine, LogLevel};
//!
//! let engine = Engine::with_output(std::io::sink());
//! let log = engine.logger();
//!
//! log.with_field("user", "alice").info(&[&"logged in"]);
//! log.debugf(format_args!("filtered at {}", engine.level()));
//! engine.set_level(LogLevel::Debug);
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{MultiWriter, RotatingFileAppender, RotationPolicy, RotationStrategy};
    pub use crate::config::Config;
    pub use crate::core::{
        CallerSite, Engine, Entry, FieldValue, Formatter, LogContext, LogEntry, LogLevel, Logger,
        LoggerError, LoggerMetrics, OutputFormat, Result, TimestampFormat,
    };
}

pub use crate::appenders::{MultiWriter, RotatingFileAppender, RotationPolicy, RotationStrategy};
pub use crate::config::Config;
pub use crate::core::{
    sprint, sprintln, CallerSite, Engine, Entry, ExitHandler, FieldValue, Formatter, Lifecycle,
    LogContext, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics, OutputFormat, Result,
    TimestampFormat,
};
pub use crate::global::*;
