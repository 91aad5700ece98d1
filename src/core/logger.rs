//! Logger facade
//!
//! Eight severities, each in three call conventions:
//!
//! | convention | example | message |
//! |---|---|---|
//! | concatenation | `info(&[&"count=", &3])` | `count= 3` |
//! | formatted | `infof(format_args!("count={}", 3))` | `count=3` |
//! | line | `infoln(&[&"a", &"b"])` | `a b` |
//!
//! Every emission stamps the caller's `src=file:line` on the record.

use super::{
    caller::CallerSite,
    engine::Engine,
    entry::Entry,
    error::Result,
    log_context::{FieldValue, LogContext},
    log_entry::SOURCE_KEY,
    log_level::LogLevel,
    output_format::Formatter,
};
use std::fmt;
use std::io::Write;

/// Join arguments with single spaces.
pub fn sprint(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
    }
    out
}

/// [`sprint`] followed by a newline.
pub fn sprintln(args: &[&dyn fmt::Display]) -> String {
    let mut out = sprint(args);
    out.push('\n');
    out
}

macro_rules! emitters {
    ($($level:expr, $name:literal => $plain:ident, $formatted:ident, $line:ident;)+) => {
        $(
            #[doc = concat!("Log the space-joined arguments at `", $name, "`.")]
            #[track_caller]
            pub fn $plain(&self, args: &[&dyn fmt::Display]) {
                self.emit($level, || sprint(args));
            }

            #[doc = concat!("Log a `format_args!` message at `", $name, "`.")]
            #[track_caller]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.emit($level, || fmt::format(args));
            }

            #[doc = concat!("Log the space-joined arguments at `", $name, "` as one line.")]
            #[track_caller]
            pub fn $line(&self, args: &[&dyn fmt::Display]) {
                self.emit($level, || sprintln(args));
            }
        )+
    };
}

/// Logging handle
///
/// Cheap to clone. Loggers derived from one [`Engine`] share its level, output
/// and formatter; fields attached with [`Logger::with_field`] belong to the
/// returned logger only.
///
/// # Example
///
/// ```
/// use srelab_log::{Engine, LogLevel};
///
/// let engine = Engine::with_output(std::io::sink());
/// let log = engine.logger().with_field("component", "db");
///
/// log.info(&[&"connected"]);
/// log.warnf(format_args!("slow query took {}ms", 250));
/// engine.set_level(LogLevel::Error);
/// assert_eq!(log.level(), LogLevel::Error);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    entry: Entry,
}

impl Logger {
    /// Logger with its own engine, writing to stdout at `Info`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_engine(Engine::new())
    }

    pub fn from_engine(engine: Engine) -> Self {
        Self {
            entry: Entry::new(engine),
        }
    }

    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            entry: self.entry.with_field(key, value),
        }
    }

    #[must_use]
    pub fn with_error(&self, err: &(dyn std::error::Error + '_)) -> Self {
        Self {
            entry: self.entry.with_error(err),
        }
    }

    #[must_use]
    pub fn with_fields(&self, fields: &LogContext) -> Self {
        Self {
            entry: self.entry.with_fields(fields),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        self.engine().set_level(level);
    }

    pub fn level(&self) -> LogLevel {
        self.engine().level()
    }

    pub fn set_output<W: Write + Send + 'static>(&self, output: W) {
        self.engine().set_output(output);
    }

    pub fn set_formatter(&self, formatter: Formatter) {
        self.engine().set_formatter(formatter);
    }

    pub fn flush(&self) -> Result<()> {
        self.engine().flush()
    }

    pub fn engine(&self) -> &Engine {
        self.entry.engine()
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Log a `format_args!` message at `level`.
    ///
    /// Unlike [`Logger::fatal`] and [`Logger::panic`] this never exits or
    /// unwinds, whatever the level.
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, || fmt::format(args));
    }

    emitters! {
        LogLevel::Trace, "trace" => trace, tracef, traceln;
        LogLevel::Debug, "debug" => debug, debugf, debugln;
        LogLevel::Info, "info" => print, printf, println;
        LogLevel::Info, "info" => info, infof, infoln;
        LogLevel::Warn, "warning" => warn, warnf, warnln;
        LogLevel::Error, "error" => error, errorf, errorln;
    }

    /// Log at `fatal`, flush, then exit with code 1.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.emit(LogLevel::Fatal, || sprint(args));
        self.engine().exit(1)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(LogLevel::Fatal, || fmt::format(args));
        self.engine().exit(1)
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.emit(LogLevel::Fatal, || sprintln(args));
        self.engine().exit(1)
    }

    /// Log at `panic`, then panic with the same message.
    #[track_caller]
    pub fn panic(&self, args: &[&dyn fmt::Display]) -> ! {
        self.raise(sprint(args))
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(fmt::format(args))
    }

    #[track_caller]
    pub fn panicln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.raise(sprintln(args))
    }

    #[track_caller]
    fn raise(&self, message: String) -> ! {
        self.sourced().log(LogLevel::Panic, &message);
        panic!("{}", message.trim_end_matches('\n'))
    }

    /// Message and `src` are built only when the engine admits `level`.
    #[track_caller]
    fn emit<F: FnOnce() -> String>(&self, level: LogLevel, message: F) {
        let site = CallerSite::resolve();
        let context = self.entry.context();
        self.engine().write_with(level, || {
            (message(), context.with_field(SOURCE_KEY, site.to_string()))
        });
    }

    /// The current entry with `src` set to the application call site.
    #[track_caller]
    fn sourced(&self) -> Entry {
        self.entry
            .with_field(SOURCE_KEY, CallerSite::resolve().to_string())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Logger, Buffer) {
        let buffer = Buffer::default();
        let engine = Engine::with_output(buffer.clone());
        engine.set_formatter(Formatter::new().without_timestamp());
        (engine.logger(), buffer)
    }

    fn src_here(line: u32) -> String {
        CallerSite::from_parts(file!(), line).to_string()
    }

    #[test]
    fn test_sprint() {
        assert_eq!(sprint(&[&"count=", &3]), "count= 3");
        assert_eq!(sprint(&[]), "");
        assert_eq!(sprintln(&[&"a", &1.5]), "a 1.5\n");
    }

    #[test]
    fn test_src_is_the_calling_line() {
        let (log, buffer) = capture();

        let line = line!() + 1;
        log.info(&[&"hello"]);

        assert_eq!(
            buffer.lines(),
            vec![format!("level=info msg=hello src={}", src_here(line))]
        );
    }

    #[test]
    fn test_three_conventions() {
        let (log, buffer) = capture();

        log.info(&[&"count=", &3]);
        log.infof(format_args!("count={}", 3));
        log.infoln(&[&"count=", &3]);

        let lines = buffer.lines();
        assert!(lines[0].starts_with("level=info msg=\"count= 3\" src="));
        assert!(lines[1].starts_with("level=info msg=\"count=3\" src="));
        assert!(lines[2].starts_with("level=info msg=\"count= 3\" src="));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_fields_and_src_order() {
        let (log, buffer) = capture();

        let line = line!() + 1;
        log.with_field("user", "alice").with_field("attempt", 2).warn(&[&"retry"]);

        assert_eq!(
            buffer.lines()[0],
            format!("level=warning msg=retry attempt=2 user=alice src={}", src_here(line))
        );
    }

    #[test]
    fn test_user_src_is_overwritten() {
        let (log, buffer) = capture();

        let line = line!() + 1;
        log.with_field(SOURCE_KEY, "fake.rs:1").error(&[&"x"]);

        let out = &buffer.lines()[0];
        assert!(out.ends_with(&format!("src={}", src_here(line))), "{}", out);
        assert_eq!(out.matches("src=").count(), 1);
    }

    #[test]
    fn test_with_field_does_not_mutate_parent() {
        let (log, buffer) = capture();
        let child = log.with_field("a", 1);
        let _grandchild = child.with_field("b", 2);

        child.info(&[&"child"]);
        log.info(&[&"parent"]);

        let lines = buffer.lines();
        assert!(lines[0].contains(" a=1 "));
        assert!(!lines[0].contains("b=2"));
        assert!(!lines[1].contains("a=1"));
    }

    #[test]
    fn test_level_gate() {
        let (log, buffer) = capture();
        log.set_level(LogLevel::Warn);

        log.info(&[&"hidden"]);
        log.print(&[&"hidden too"]);
        log.debugf(format_args!("{}", "hidden"));
        log.error(&[&"shown"]);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("level=error msg=shown"));
        assert_eq!(log.engine().metrics().filtered_count(), 3);
    }

    #[test]
    fn test_print_logs_at_info() {
        let (log, buffer) = capture();
        log.println(&[&"plain"]);
        assert!(buffer.lines()[0].starts_with("level=info msg=plain "));
    }

    #[test]
    fn test_trace_needs_trace_level() {
        let (log, buffer) = capture();
        log.trace(&[&"quiet"]);
        log.set_level(LogLevel::Trace);
        log.traceln(&[&"loud"]);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("level=trace msg=loud"));
    }

    #[test]
    fn test_logf_at_fatal_does_not_exit() {
        let (log, buffer) = capture();
        log.logf(LogLevel::Fatal, format_args!("{} left", 0));
        assert!(buffer.lines()[0].starts_with("level=fatal msg=\"0 left\""));
    }

    #[test]
    fn test_panic_logs_then_panics() {
        let (log, buffer) = capture();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log.panicf(format_args!("invariant {} broken", 7));
        }));

        assert!(result.is_err());
        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("invariant 7 broken")
        );
        assert!(buffer.lines()[0].starts_with("level=panic msg=\"invariant 7 broken\""));
    }

    fn unwinding_exit(code: i32) -> ! {
        panic!("exit({})", code)
    }

    #[test]
    fn test_fatal_writes_then_exits_even_when_gated() {
        let (log, buffer) = capture();
        log.engine().set_exit_handler(unwinding_exit);
        log.set_level(LogLevel::Panic);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log.fatal(&[&"gone"]);
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("exit(1)"));
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_with_error() {
        let (log, buffer) = capture();
        let err = io::Error::new(io::ErrorKind::Other, "disk full");

        log.with_error(&err).errorf(format_args!("write failed"));

        assert!(buffer.lines()[0].starts_with("level=error msg=\"write failed\" error=\"disk full\" src="));
    }
}
