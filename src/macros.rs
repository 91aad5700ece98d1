//! Formatting macros for the `*f` call convention.
//!
//! Each macro wraps its arguments in `format_args!`. A format string as the
//! first argument targets the default logger; anything else is taken to be a
//! [`Logger`](crate::Logger) (or anything with the same methods).
//!
//! # Examples
//!
//! ```
//! use srelab_log::{infof, warnf, Engine};
//!
//! let logger = Engine::with_output(std::io::sink()).logger();
//!
//! // Default logger
//! infof!("Server started");
//!
//! // A specific logger
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! warnf!(logger.with_field("port", port), "Retry {retry} of {}", 3, retry = 1);
//! ```

/// Log a formatted message at an explicit level.
///
/// ```
/// # use srelab_log::{Engine, LogLevel};
/// use srelab_log::logf;
/// # let logger = Engine::with_output(std::io::sink()).logger();
/// logf!(LogLevel::Info, "Simple message");
/// logf!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $fmt:literal $($arg:tt)*) => {
        $crate::logf($level, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// ```
/// # let logger = srelab_log::Engine::with_output(std::io::sink()).logger();
/// use srelab_log::tracef;
/// tracef!(logger, "Entering function: calculate()");
/// tracef!("Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! tracef {
    ($fmt:literal $($arg:tt)*) => {
        $crate::tracef(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::debugf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log at info level, same as [`infof!`].
#[macro_export]
macro_rules! printf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::printf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # let logger = srelab_log::Engine::with_output(std::io::sink()).logger();
/// use srelab_log::infof;
/// infof!(logger, "Application started");
/// infof!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($fmt:literal $($arg:tt)*) => {
        $crate::infof(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::warnf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::errorf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit with code 1.
#[macro_export]
macro_rules! fatalf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::fatalf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log a panic-level message, then panic.
#[macro_export]
macro_rules! panicf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::panicf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}
