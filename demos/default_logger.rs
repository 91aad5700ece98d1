//! Default logger walkthrough
//!
//! Run with `cargo run --example default_logger [log-file] [level]`.

use srelab_log::{self as log, infof, warnf, Config, LogLevel};
use std::io;

fn main() {
    let mut args = std::env::args().skip(1);
    let file = args.next().unwrap_or_else(|| "logs/demo.log".to_string());
    let level = args.next().unwrap_or_else(|| "debug".to_string());

    // Before init: stdout only, level info.
    log::info(&[&"starting", &"up"]);
    log::debug(&[&"not shown"]);

    log::init(&Config::new(file, level));
    match log::log_file() {
        Some(path) => infof!("logging to {}", path.display()),
        None => log::warnln(&[&"no log file, stdout only"]),
    }

    let request = log::with_field("request_id", "r-42").with_field("user", "alice");
    request.debugf(format_args!("handling {} items", 3));
    request.info(&[&"count=", &3]);

    let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    request.with_error(&err).errorf(format_args!("upstream call failed"));

    log::set_level(LogLevel::Warn);
    request.info(&[&"suppressed"]);
    warnf!(request, "retrying in {}s", 5);

    if let Err(e) = log::flush() {
        eprintln!("flush failed: {}", e);
    }
}
