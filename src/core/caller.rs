//! Call-site resolution for the `src` field
//!
//! Every public emission method of the facade is `#[track_caller]`, and so is
//! [`CallerSite::resolve`]. The location reported is therefore the first frame
//! outside that chain: the application code that invoked the facade. Adding an
//! internal helper between a public method and `resolve` requires that helper
//! to be `#[track_caller]` as well, otherwise the helper's own location leaks
//! into every line.

use std::fmt;
use std::panic::Location;

/// File name reported when no location is available.
pub const UNKNOWN_FILE: &str = "<???>";

/// Short file name and line of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallerSite {
    file: &'static str,
    line: u32,
}

impl CallerSite {
    /// Resolve the application call site of the current facade call.
    #[track_caller]
    #[inline]
    pub fn resolve() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::from_parts(location.file(), location.line())
    }

    /// Build a site from a raw path and line, keeping only the last path segment.
    pub fn from_parts(path: &'static str, line: u32) -> Self {
        let file = short_file_name(path);
        if file.is_empty() || line == 0 {
            return Self::unknown();
        }
        Self { file, line }
    }

    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: 1,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE
    }
}

impl fmt::Display for CallerSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn short_file_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
