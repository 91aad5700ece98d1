//! Core logger types

pub mod caller;
pub mod engine;
pub mod entry;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use caller::{CallerSite, UNKNOWN_FILE};
pub use engine::{Engine, ExitHandler, Lifecycle, Output};
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::{LogEntry, ERROR_KEY, SOURCE_KEY};
pub use log_level::LogLevel;
pub use logger::{sprint, sprintln, Logger};
pub use metrics::LoggerMetrics;
pub use output_format::{Formatter, OutputFormat};
pub use timestamp::TimestampFormat;
