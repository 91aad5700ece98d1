//! Logger configuration and log-path normalization
//!
//! Nothing here fails from the caller's point of view: a bad path becomes
//! `./<8 random lowercase letters>.log` and a bad level becomes `Info`.

use crate::core::{LogLevel, LoggerError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Length of the random fallback file stem.
pub const FALLBACK_NAME_LEN: usize = 8;

/// Settings accepted by [`crate::init`].
///
/// Keys are `File` and `Level` so existing YAML/JSON configs keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// Target log file path
    pub file: String,
    /// Level name, e.g. `info` or `DEBUG`
    pub level: String,
}

impl Config {
    pub fn new(file: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            level: level.into(),
        }
    }
}

/// Parse a level name, falling back to `Info`.
pub fn parse_level(name: &str) -> LogLevel {
    name.trim().parse().unwrap_or(LogLevel::Info)
}

/// Validate `file` and return the path to log into.
///
/// The parent directory is created when missing and must be writable; an
/// existing path must be a regular file. Otherwise a random file in the
/// current directory is returned.
pub fn resolve_log_path(file: &str) -> PathBuf {
    match validate_log_path(file) {
        Ok(path) => path,
        Err(e) => {
            let fallback = fallback_log_path();
            eprintln!(
                "[LOGGER WARNING] {}; logging to {} instead",
                e,
                fallback.display()
            );
            fallback
        }
    }
}

/// `./<random>.log`
pub fn fallback_log_path() -> PathBuf {
    Path::new(".").join(format!("{}.log", random_file_stem(FALLBACK_NAME_LEN)))
}

/// Random lowercase ASCII string of length `len`.
pub fn random_file_stem(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

fn validate_log_path(file: &str) -> Result<PathBuf> {
    let path = Path::new(file);
    if path.file_name().is_none() {
        return Err(LoggerError::config("File", format!("{:?} has no file name", file)));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir_rw(dir)?;

    if path.exists() && !path.is_file() {
        return Err(LoggerError::config(
            "File",
            format!("{} exists and is not a regular file", path.display()),
        ));
    }

    Ok(path.to_path_buf())
}

/// Create `dir` if needed and check that files can be created in it.
pub fn ensure_dir_rw(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| LoggerError::directory(dir.display().to_string(), e.to_string()))?;

    if !dir.is_dir() {
        return Err(LoggerError::directory(
            dir.display().to_string(),
            "not a directory",
        ));
    }

    // Permission bits say nothing for root; only creating a file is conclusive.
    let scratch = dir.join(format!(".{}.tmp", random_file_stem(FALLBACK_NAME_LEN)));
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&scratch)
        .map_err(|e| LoggerError::directory(dir.display().to_string(), e.to_string()))?;
    if let Err(e) = fs::remove_file(&scratch) {
        eprintln!(
            "[LOGGER WARNING] Failed to remove {}: {}",
            scratch.display(),
            e
        );
    }

    Ok(())
}
