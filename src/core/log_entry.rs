//! Log record handed to the formatter

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Field key under which the call site is recorded.
pub const SOURCE_KEY: &str = "src";

/// Field key under which attached errors are recorded.
pub const ERROR_KEY: &str = "error";

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub context: LogContext,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// A single trailing newline (as produced by the `*ln` call style) is
    /// dropped; remaining newlines, carriage returns and tabs become escape
    /// sequences so every record stays on one line.
    fn sanitize_message(message: &str) -> String {
        let message = message.strip_suffix('\n').unwrap_or(message);
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: &str, context: LogContext) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: Local::now(),
            context,
        }
    }

    /// The `src` field, if the entry was stamped with a call site
    pub fn source(&self) -> Option<String> {
        self.context.get(SOURCE_KEY).map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newline_dropped() {
        let entry = LogEntry::new(LogLevel::Info, "count= 3\n", LogContext::new());
        assert_eq!(entry.message, "count= 3");
    }

    #[test]
    fn test_injection_escaped() {
        let entry = LogEntry::new(
            LogLevel::Info,
            "User login\nlevel=error msg=fake\tx\r",
            LogContext::new(),
        );
        assert_eq!(entry.message, "User login\\nlevel=error msg=fake\\tx\\r");
    }

    #[test]
    fn test_source() {
        let entry = LogEntry::new(
            LogLevel::Warn,
            "disk",
            LogContext::new().with_field(SOURCE_KEY, "main.rs:9"),
        );
        assert_eq!(entry.source().as_deref(), Some("main.rs:9"));
    }
}
