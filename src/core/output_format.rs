//! Output format configuration for log entries
//!
//! - Logfmt: `time=... level=info msg=... key=value src=main.rs:42` (default)
//! - Text: `[time] [INFO ] message key=value src=main.rs:42`
//!
//! In both formats user fields appear in key order and the call site is
//! always the last field.

use super::log_context::FieldValue;
use super::log_entry::{LogEntry, SOURCE_KEY};
use super::timestamp::TimestampFormat;

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Key-value format compatible with log aggregation tools
    ///
    /// Example: `time="2025-01-08T10:30:45.123+08:00" level=info msg="Request processed" src=main.rs:10`
    #[default]
    Logfmt,

    /// Human-readable text format
    ///
    /// Example: `[2025-01-08T10:30:45.123+08:00] [INFO ] Request processed src=main.rs:10`
    Text,
}

/// Renders entries into single output lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    pub output_format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    /// Omit the timestamp entirely (useful for deterministic output in tests)
    pub disable_timestamp: bool,
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.disable_timestamp = true;
        self
    }

    /// Format an entry as one newline-terminated line
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = match self.output_format {
            OutputFormat::Logfmt => self.format_logfmt(entry),
            OutputFormat::Text => self.format_text(entry),
        };
        line.push('\n');
        line
    }

    fn format_logfmt(&self, entry: &LogEntry) -> String {
        let mut parts = Vec::with_capacity(entry.context.len() + 3);

        if !self.disable_timestamp {
            parts.push(format!(
                "time={}",
                escape_value(&self.timestamp_format.format(&entry.timestamp))
            ));
        }
        parts.push(format!("level={}", entry.level.to_str()));
        parts.push(format!("msg={}", escape_value(&entry.message)));

        for (key, value) in user_fields(entry) {
            parts.push(format!("{}={}", key, render_value(value)));
        }
        if let Some(src) = entry.context.get(SOURCE_KEY) {
            parts.push(format!("{}={}", SOURCE_KEY, render_value(src)));
        }

        parts.join(" ")
    }

    fn format_text(&self, entry: &LogEntry) -> String {
        let mut line = String::new();
        if !self.disable_timestamp {
            line.push_str(&format!(
                "[{}] ",
                self.timestamp_format.format(&entry.timestamp)
            ));
        }
        line.push_str(&format!(
            "[{:5}] {}",
            entry.level.to_str().to_uppercase(),
            entry.message
        ));

        for (key, value) in user_fields(entry) {
            line.push_str(&format!(" {}={}", key, render_value(value)));
        }
        if let Some(src) = entry.context.get(SOURCE_KEY) {
            line.push_str(&format!(" {}={}", SOURCE_KEY, src));
        }

        line
    }
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) | FieldValue::Error(s) => escape_value(s),
        other => other.to_string(),
    }
}

/// Key written for a field whose name has no usable characters.
const EMPTY_KEY: &str = "_";

/// Prefix for user fields whose escaped name collides with `src`.
const CLASH_PREFIX: &str = "fields.";

/// Fields other than the call site, keys escaped.
///
/// The reserved key is checked after escaping, so `"s rc"` cannot pass
/// for the call site.
fn user_fields(entry: &LogEntry) -> impl Iterator<Item = (String, &FieldValue)> {
    entry
        .context
        .iter()
        .filter(|(k, _)| k.as_str() != SOURCE_KEY)
        .map(|(key, value)| {
            let key = match escape_key(key) {
                k if k.is_empty() => EMPTY_KEY.to_string(),
                k if k == SOURCE_KEY => format!("{}{}", CLASH_PREFIX, k),
                k => k,
            };
            (key, value)
        })
}

/// Escape a logfmt key (remove spaces and special chars)
fn escape_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

/// Quote a value unless it consists only of identifier-like characters
fn escape_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || !value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+' | ':')
        });
    if needs_quoting {
        quote_value(value)
    } else {
        value.to_string()
    }
}

fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
