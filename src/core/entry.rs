//! Field-carrying handle bound to an engine

use super::{
    engine::Engine,
    log_context::{FieldValue, LogContext},
    log_entry::ERROR_KEY,
    log_level::LogLevel,
};

/// An engine handle plus the fields to attach to every record it emits
///
/// Attaching a field returns a new `Entry`; the receiver is left as it was, so
/// one entry can safely be shared between threads and extended independently.
///
/// # Example
///
/// ```
/// use srelab_log::{Engine, Entry, LogLevel};
///
/// let base = Entry::new(Engine::with_output(std::io::sink()));
/// let request = base.with_field("request_id", "r-17");
///
/// assert!(base.context().is_empty());
/// assert_eq!(request.context().len(), 1);
/// request.log(LogLevel::Info, "accepted");
/// ```
#[derive(Debug, Clone)]
pub struct Entry {
    engine: Engine,
    context: LogContext,
}

impl Entry {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            context: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            engine: self.engine.clone(),
            context: self.context.with_field(key, value),
        }
    }

    /// Attach `err` (and its source chain) under the `error` key.
    #[must_use]
    pub fn with_error(&self, err: &(dyn std::error::Error + '_)) -> Self {
        self.with_field(ERROR_KEY, FieldValue::from_error(err))
    }

    /// Attach every field of `fields`, replacing keys already present.
    #[must_use]
    pub fn with_fields(&self, fields: &LogContext) -> Self {
        Self {
            engine: self.engine.clone(),
            context: self.context.merged(fields),
        }
    }

    /// Hand the record to the engine, which applies the level gate.
    pub fn log(&self, level: LogLevel, message: &str) {
        self.engine.write(level, message, &self.context);
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
