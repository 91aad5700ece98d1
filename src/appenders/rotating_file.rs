//! Rotating log file
//!
//! [`RotatingFileAppender`] is an [`io::Write`] sink that rolls the active file
//! over by size or time, keeps a bounded number of backups, prunes backups
//! older than a maximum age and optionally gzips rolled files.
//!
//! Backups live next to the active file and carry their rollover time:
//! `app.log` rolls to `app-2025-01-08T10-30-45.123.log` (plus `.gz` when
//! compressed).

use crate::core::error::{LoggerError, Result};
use chrono::{DateTime, Local, NaiveDateTime, Timelike, Utc};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const BACKUP_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";
const COMPRESS_SUFFIX: &str = ".gz";
const MEGABYTE: u64 = 1024 * 1024;

/// Rotation strategy defining when to rotate log files
///
/// # Examples
///
/// ```
/// use srelab_log::appenders::RotationStrategy;
/// use std::time::Duration;
///
/// // Rotate when file exceeds 100 MB
/// let size_strategy = RotationStrategy::Size { max_bytes: 100 * 1024 * 1024 };
///
/// // Rotate every hour
/// let time_strategy = RotationStrategy::Time { interval: Duration::from_secs(3600) };
///
/// // Rotate daily at 2 AM local time
/// let daily_strategy = RotationStrategy::Daily { hour: 2 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationStrategy {
    /// Rotate before a write would push the file past `max_bytes`
    Size { max_bytes: u64 },

    /// Rotate at time interval
    Time { interval: Duration },

    /// Rotate daily at specified hour (0-23)
    Daily { hour: u8 },

    /// No rotation (useful for testing or when external rotation is used)
    Never,
}

impl Default for RotationStrategy {
    fn default() -> Self {
        RotationStrategy::Size {
            max_bytes: 100 * MEGABYTE,
        }
    }
}

impl RotationStrategy {
    #[must_use]
    pub fn size(max_bytes: u64) -> Self {
        RotationStrategy::Size { max_bytes }
    }

    #[must_use]
    pub fn time(interval: Duration) -> Self {
        RotationStrategy::Time { interval }
    }

    /// Create a daily rotation strategy
    ///
    /// # Panics
    ///
    /// Panics if hour is greater than 23
    #[must_use]
    pub fn daily(hour: u8) -> Self {
        assert!(hour <= 23, "Hour must be between 0 and 23");
        RotationStrategy::Daily { hour }
    }

    #[must_use]
    pub fn never() -> Self {
        RotationStrategy::Never
    }
}

/// Configuration for rotating file appender
///
/// # Examples
///
/// ```
/// use srelab_log::appenders::{RotationPolicy, RotationStrategy};
/// use std::time::Duration;
///
/// let policy = RotationPolicy::new()
///     .with_strategy(RotationStrategy::Size { max_bytes: 50 * 1024 * 1024 })
///     .with_max_backups(7)
///     .with_max_age(Duration::from_secs(7 * 24 * 3600))
///     .with_compression(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotation strategy defining when to rotate
    pub strategy: RotationStrategy,
    /// Maximum number of rotated files to keep (0 keeps all)
    pub max_backup_files: usize,
    /// Rotated files older than this are removed
    pub max_age: Option<Duration>,
    /// Whether to gzip rotated files
    pub compress: bool,
    /// Use local time (rather than UTC) in backup names and for age checks
    pub local_time: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            strategy: RotationStrategy::default(),
            max_backup_files: 0,
            max_age: None,
            compress: false,
            local_time: false,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed policy applied by `init`: 500 MB files, 3 backups,
    /// 28 days retention, gzip, local-time names.
    #[must_use]
    pub fn for_init() -> Self {
        Self::new()
            .with_max_size(500 * MEGABYTE)
            .with_max_backups(3)
            .with_max_age(Duration::from_secs(28 * 24 * 3600))
            .with_compression(true)
            .with_local_time(true)
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_strategy(mut self, strategy: RotationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Shorthand for `with_strategy(RotationStrategy::Size { max_bytes: size })`
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, size: u64) -> Self {
        self.strategy = RotationStrategy::Size { max_bytes: size };
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backup_files = count;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_age(mut self, age: Duration) -> Self {
        self.max_age = Some(age);
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_local_time(mut self, enabled: bool) -> Self {
        self.local_time = enabled;
        self
    }

    /// Get the maximum file size if using size-based rotation
    #[must_use]
    pub fn max_file_size(&self) -> Option<u64> {
        match &self.strategy {
            RotationStrategy::Size { max_bytes } => Some(*max_bytes),
            _ => None,
        }
    }
}

/// A rolled-over file found next to the active log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub path: PathBuf,
    /// Rollover time parsed from the file name
    pub rotated_at: NaiveDateTime,
    pub compressed: bool,
}

/// Rotating file appender
///
/// # Examples
///
/// ```no_run
/// use srelab_log::appenders::{RotatingFileAppender, RotationPolicy};
/// use std::io::Write;
///
/// let mut file = RotatingFileAppender::with_policy("/var/log/app.log", RotationPolicy::for_init())?;
/// file.write_all(b"level=info msg=started\n")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct RotatingFileAppender {
    base_path: PathBuf,
    policy: RotationPolicy,
    file: Option<File>,
    current_size: u64,
    /// Timestamp of the last rotation (used for time-based strategies)
    last_rotation: SystemTime,
}

impl RotatingFileAppender {
    /// Create a new rotating file appender with the default policy
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or opened
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_policy(path, RotationPolicy::default())
    }

    /// Create a new rotating file appender with custom policy
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or opened
    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let (file, current_size, last_rotation) = Self::open_file(&base_path)?;

        Ok(Self {
            base_path,
            policy,
            file: Some(file),
            current_size,
            last_rotation,
        })
    }

    /// Check if rotation is needed before writing `incoming` bytes
    fn should_rotate(&self, incoming: u64) -> bool {
        match &self.policy.strategy {
            RotationStrategy::Never => false,

            RotationStrategy::Size { max_bytes } => {
                self.current_size > 0 && self.current_size + incoming > *max_bytes
            }

            RotationStrategy::Time { interval } => {
                let elapsed = SystemTime::now()
                    .duration_since(self.last_rotation)
                    .unwrap_or(Duration::ZERO);
                elapsed >= *interval
            }

            RotationStrategy::Daily { hour } => {
                let now: DateTime<Local> = SystemTime::now().into();
                let last: DateTime<Local> = self.last_rotation.into();

                // Rotate if we're on a different day and past the target hour
                now.date_naive() != last.date_naive() && now.hour() >= u32::from(*hour)
            }
        }
    }

    /// Roll the active file over to a timestamped backup and reopen
    pub fn rotate(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        if self.base_path.exists() {
            let backup_path = self.next_backup_path();
            fs::rename(&self.base_path, &backup_path).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to rotate current log file: {}", e),
                )
            })?;

            if self.policy.compress {
                if let Err(e) = compress_file(&backup_path) {
                    eprintln!("[WARN] Failed to compress {}: {}", backup_path.display(), e);
                }
            }
        }

        let (file, size, _) = Self::open_file(&self.base_path).map_err(|e| {
            LoggerError::file_rotation(
                self.base_path.display().to_string(),
                format!("Failed to create new log file: {}", e),
            )
        })?;
        self.file = Some(file);
        self.current_size = size;
        self.last_rotation = SystemTime::now();

        self.remove_expired_backups();
        Ok(())
    }

    /// Backups of this file, newest first
    pub fn backups(&self) -> Vec<Backup> {
        let (dir, prefix, ext) = self.name_parts();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut backups: Vec<Backup> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let (stem, compressed) = match name.strip_suffix(COMPRESS_SUFFIX) {
                    Some(stem) => (stem, true),
                    None => (name.as_str(), false),
                };
                let stamp = stem.strip_prefix(&prefix)?.strip_suffix(&ext)?;
                let rotated_at = NaiveDateTime::parse_from_str(stamp, BACKUP_TIME_FORMAT).ok()?;
                Some(Backup {
                    path: entry.path(),
                    rotated_at,
                    compressed,
                })
            })
            .collect();

        backups.sort_by(|a, b| b.rotated_at.cmp(&a.rotated_at));
        backups
    }

    fn remove_expired_backups(&self) {
        let cutoff = self.policy.max_age.and_then(|age| {
            let age = chrono::Duration::from_std(age).ok()?;
            self.now().checked_sub_signed(age)
        });

        for (index, backup) in self.backups().into_iter().enumerate() {
            let over_count =
                self.policy.max_backup_files > 0 && index >= self.policy.max_backup_files;
            let too_old = cutoff.is_some_and(|cutoff| backup.rotated_at < cutoff);
            if !(over_count || too_old) {
                continue;
            }
            if let Err(e) = fs::remove_file(&backup.path) {
                eprintln!(
                    "[WARN] Failed to remove old backup {}: {}",
                    backup.path.display(),
                    e
                );
            }
        }
    }

    fn now(&self) -> NaiveDateTime {
        if self.policy.local_time {
            Local::now().naive_local()
        } else {
            Utc::now().naive_utc()
        }
    }

    /// Next free backup name, bumping the timestamp on collision
    fn next_backup_path(&self) -> PathBuf {
        let (dir, prefix, ext) = self.name_parts();
        let mut stamp = self.now();
        loop {
            let name = format!("{}{}{}", prefix, stamp.format(BACKUP_TIME_FORMAT), ext);
            let candidate = dir.join(&name);
            if !candidate.exists() && !with_suffix(&candidate, COMPRESS_SUFFIX).exists() {
                return candidate;
            }
            stamp += chrono::Duration::milliseconds(1);
        }
    }

    /// (directory, `"<stem>-"`, `".<ext>"` or empty)
    fn name_parts(&self) -> (PathBuf, String, String) {
        let dir = match self.base_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = self
            .base_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("app");
        let ext = self
            .base_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        (dir, format!("{}-", stem), ext)
    }

    fn open_file(path: &Path) -> Result<(File, u64, SystemTime)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        let metadata = file.metadata().map_err(|e| {
            LoggerError::file_appender(
                path.display().to_string(),
                format!("Cannot access file metadata: {}", e),
            )
        })?;
        let last_rotation = metadata.modified().unwrap_or_else(|_| SystemTime::now());
        Ok((file, metadata.len(), last_rotation))
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    #[must_use]
    pub fn last_rotation(&self) -> SystemTime {
        self.last_rotation
    }
}

impl Write for RotatingFileAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len() as u64) {
            if let Err(e) = self.rotate() {
                // Keep logging into whatever file we can get rather than losing lines.
                eprintln!("[WARN] Log rotation failed: {}. Continuing with current file.", e);
                if self.file.is_none() {
                    let (file, size, last_rotation) = Self::open_file(&self.base_path)
                        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
                    self.file = Some(file);
                    self.current_size = size;
                    self.last_rotation = last_rotation;
                }
                // Let the file grow past the limit rather than retrying on every write.
                self.current_size = 0;
            }
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file is not open"))?;
        let written = file.write(buf)?;
        self.current_size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Gzip `path` into `path.gz`, removing the original only on success
fn compress_file(path: &Path) -> Result<()> {
    use std::io::{BufReader, BufWriter};

    let gz_path = with_suffix(path, COMPRESS_SUFFIX);
    let temp_gz_path = with_suffix(path, ".gz.tmp");

    let input = File::open(path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to open file for compression: {}", path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::with_capacity(64 * 1024, input);

    let output = File::create(&temp_gz_path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to create temporary compressed file: {}", temp_gz_path.display()),
            e,
        )
    })?;
    let mut encoder = flate2::write::GzEncoder::new(
        BufWriter::with_capacity(64 * 1024, output),
        flate2::Compression::default(),
    );

    let streamed = io::copy(&mut reader, &mut encoder)
        .and_then(|_| encoder.finish())
        .and_then(|mut writer| writer.flush());
    if let Err(e) = streamed {
        let _ = fs::remove_file(&temp_gz_path);
        return Err(LoggerError::io_operation(
            "compress log file",
            format!("Failed to compress {}", path.display()),
            e,
        ));
    }

    fs::rename(&temp_gz_path, &gz_path).map_err(|e| {
        let _ = fs::remove_file(&temp_gz_path);
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to rename compressed file to: {}", gz_path.display()),
            e,
        )
    })?;

    if let Err(e) = fs::remove_file(path) {
        eprintln!(
            "[WARN] Compression succeeded but failed to remove original file {}: {}",
            path.display(),
            e
        );
    }

    Ok(())
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use std::thread;
    use tempfile::tempdir;

    fn line(i: usize) -> Vec<u8> {
        format!("level=info msg=\"Test message number {}\"\n", i).into_bytes()
    }

    #[test]
    fn test_rotation_strategy_constructors() {
        assert_eq!(RotationStrategy::size(1024), RotationStrategy::Size { max_bytes: 1024 });
        assert_eq!(
            RotationStrategy::time(Duration::from_secs(3600)),
            RotationStrategy::Time {
                interval: Duration::from_secs(3600)
            }
        );
        assert_eq!(RotationStrategy::daily(2), RotationStrategy::Daily { hour: 2 });
        assert_eq!(RotationStrategy::never(), RotationStrategy::Never);
    }

    #[test]
    #[should_panic(expected = "Hour must be between 0 and 23")]
    fn test_daily_strategy_invalid_hour() {
        let _ = RotationStrategy::daily(24);
    }

    #[test]
    fn test_init_policy() {
        let policy = RotationPolicy::for_init();
        assert_eq!(policy.max_file_size(), Some(500 * 1024 * 1024));
        assert_eq!(policy.max_backup_files, 3);
        assert_eq!(policy.max_age, Some(Duration::from_secs(28 * 24 * 3600)));
        assert!(policy.compress);
        assert!(policy.local_time);
    }

    #[test]
    fn test_rotating_appender_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("sub").join("test.log");

        let appender = RotatingFileAppender::new(&log_path).unwrap();
        assert_eq!(appender.path(), log_path);
        assert_eq!(appender.current_size(), 0);
        assert!(log_path.exists());
    }

    #[test]
    fn test_existing_size_is_picked_up() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("existing.log");
        fs::write(&log_path, b"0123456789").unwrap();

        let appender = RotatingFileAppender::new(&log_path).unwrap();
        assert_eq!(appender.current_size(), 10);
    }

    #[test]
    fn test_size_rotation_creates_timestamped_backup() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("rotation.log");
        let policy = RotationPolicy::new().with_max_size(100);

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        for i in 0..20 {
            appender.write_all(&line(i)).unwrap();
        }
        appender.flush().unwrap();

        let backups = appender.backups();
        assert!(!backups.is_empty());
        let name = backups[0].path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("rotation-"), "{}", name);
        assert!(name.ends_with(".log"), "{}", name);
        assert!(!backups[0].compressed);

        // Each line lands whole in exactly one file.
        assert!(fs::metadata(&log_path).unwrap().len() <= 100);
    }

    #[test]
    fn test_max_backups_is_enforced() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("multi.log");
        let policy = RotationPolicy::new().with_max_size(50).with_max_backups(2);

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        for i in 0..100 {
            appender.write_all(&line(i)).unwrap();
        }
        appender.flush().unwrap();

        assert_eq!(appender.backups().len(), 2);
        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 3); // current + 2 backups
    }

    #[test]
    fn test_compressed_backup_round_trips() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("zip.log");
        let policy = RotationPolicy::new()
            .with_strategy(RotationStrategy::Never)
            .with_compression(true);

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        appender.write_all(b"first line\n").unwrap();
        appender.rotate().unwrap();
        appender.write_all(b"second line\n").unwrap();
        appender.flush().unwrap();

        let backups = appender.backups();
        assert_eq!(backups.len(), 1);
        assert!(backups[0].compressed);

        let mut decoded = String::new();
        GzDecoder::new(File::open(&backups[0].path).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "first line\n");
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "second line\n");
        // No temp or uncompressed leftovers.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_max_age_prunes_old_backups() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("aged.log");
        let stale = dir.path().join("aged-2000-01-01T00-00-00.000.log");
        let stale_gz = dir.path().join("aged-2000-01-02T00-00-00.000.log.gz");
        let unrelated = dir.path().join("other-2000-01-01T00-00-00.000.log");
        fs::write(&stale, b"old").unwrap();
        fs::write(&stale_gz, b"old").unwrap();
        fs::write(&unrelated, b"keep").unwrap();

        let policy = RotationPolicy::new()
            .with_strategy(RotationStrategy::Never)
            .with_max_age(Duration::from_secs(24 * 3600));
        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        appender.write_all(b"fresh\n").unwrap();
        appender.rotate().unwrap();

        assert!(!stale.exists());
        assert!(!stale_gz.exists());
        assert!(unrelated.exists());
        assert_eq!(appender.backups().len(), 1);
    }

    #[test]
    fn test_log_rotation_time_based() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("time_rotation.log");
        let policy = RotationPolicy::new().with_strategy(RotationStrategy::Time {
            interval: Duration::from_millis(50),
        });

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        appender.write_all(b"Initial message\n").unwrap();

        thread::sleep(Duration::from_millis(60));

        appender.write_all(b"After interval\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(appender.backups().len(), 1);
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "After interval\n");
    }

    #[test]
    fn test_no_rotation_with_never_strategy() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("never_rotation.log");
        let policy = RotationPolicy::new().with_strategy(RotationStrategy::Never);

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        for i in 0..100 {
            appender.write_all(&line(i)).unwrap();
        }
        appender.flush().unwrap();

        assert!(appender.backups().is_empty());
    }

    #[test]
    fn test_extensionless_file_name() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("journal");
        let policy = RotationPolicy::new().with_strategy(RotationStrategy::Never);

        let mut appender = RotatingFileAppender::with_policy(&log_path, policy).unwrap();
        appender.write_all(b"x\n").unwrap();
        appender.rotate().unwrap();

        let backups = appender.backups();
        assert_eq!(backups.len(), 1);
        let name = backups[0].path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("journal-"));
        assert!(!name.ends_with(".gz"));
    }

    #[test]
    fn test_last_rotation_getter() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let appender = RotatingFileAppender::new(&log_path).unwrap();
        let elapsed = SystemTime::now()
            .duration_since(appender.last_rotation())
            .unwrap_or(Duration::ZERO);
        assert!(elapsed < Duration::from_secs(5));
    }
}
