//! Process-wide default logger
//!
//! The default engine is created on first use: level `Info`, output on stdout.
//! [`init`] points it at stdout plus a rotating log file. Every function here
//! logs through that engine and reports the caller's own file and line.
//!
//! ```no_run
//! use srelab_log::{self as log, Config};
//!
//! log::init(&Config::new("/var/log/app/app.log", "debug"));
//! log::with_field("port", 8080).info(&[&"listening"]);
//! log::infof(format_args!("{} workers", 4));
//! ```

use crate::config::Config;
use crate::core::{
    Engine, FieldValue, Formatter, LogContext, LogLevel, Logger, Result,
};
use once_cell::sync::Lazy;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);
static BASE: Lazy<Logger> = Lazy::new(|| DEFAULT_ENGINE.logger());

/// The engine behind every package-level function.
pub fn engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// The field-less logger bound to the default engine.
pub fn base() -> &'static Logger {
    &BASE
}

/// A fresh field-less logger bound to the default engine.
pub fn new() -> Logger {
    DEFAULT_ENGINE.logger()
}

/// Configure the default logger. Never fails; see [`Engine::init`].
pub fn init(config: &Config) {
    DEFAULT_ENGINE.init(config);
}

pub fn is_initialized() -> bool {
    DEFAULT_ENGINE.is_initialized()
}

/// File opened by the last [`init`], if any.
pub fn log_file() -> Option<PathBuf> {
    DEFAULT_ENGINE.log_file()
}

pub fn set_level(level: LogLevel) {
    DEFAULT_ENGINE.set_level(level);
}

pub fn level() -> LogLevel {
    DEFAULT_ENGINE.level()
}

pub fn set_output<W: Write + Send + 'static>(output: W) {
    DEFAULT_ENGINE.set_output(output);
}

pub fn set_formatter(formatter: Formatter) {
    DEFAULT_ENGINE.set_formatter(formatter);
}

pub fn flush() -> Result<()> {
    DEFAULT_ENGINE.flush()
}

pub fn with_field<K, V>(key: K, value: V) -> Logger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    BASE.with_field(key, value)
}

pub fn with_error(err: &(dyn std::error::Error + '_)) -> Logger {
    BASE.with_error(err)
}

pub fn with_fields(fields: &LogContext) -> Logger {
    BASE.with_fields(fields)
}

#[track_caller]
pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) {
    BASE.logf(level, args);
}

macro_rules! forward {
    ($($plain:ident, $formatted:ident, $line:ident;)+) => {
        $(
            #[doc = concat!("[`Logger::", stringify!($plain), "`] on the default logger.")]
            #[track_caller]
            pub fn $plain(args: &[&dyn fmt::Display]) {
                BASE.$plain(args);
            }

            #[doc = concat!("[`Logger::", stringify!($formatted), "`] on the default logger.")]
            #[track_caller]
            pub fn $formatted(args: fmt::Arguments<'_>) {
                BASE.$formatted(args);
            }

            #[doc = concat!("[`Logger::", stringify!($line), "`] on the default logger.")]
            #[track_caller]
            pub fn $line(args: &[&dyn fmt::Display]) {
                BASE.$line(args);
            }
        )+
    };
}

forward! {
    trace, tracef, traceln;
    debug, debugf, debugln;
    print, printf, println;
    info, infof, infoln;
    warn, warnf, warnln;
    error, errorf, errorln;
}

/// Log at `fatal` on the default logger, flush and exit with code 1.
#[track_caller]
pub fn fatal(args: &[&dyn fmt::Display]) -> ! {
    BASE.fatal(args)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    BASE.fatalf(args)
}

#[track_caller]
pub fn fatalln(args: &[&dyn fmt::Display]) -> ! {
    BASE.fatalln(args)
}

/// Log at `panic` on the default logger, then panic.
#[track_caller]
pub fn panic(args: &[&dyn fmt::Display]) -> ! {
    BASE.panic(args)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    BASE.panicf(args)
}

#[track_caller]
pub fn panicln(args: &[&dyn fmt::Display]) -> ! {
    BASE.panicln(args)
}
