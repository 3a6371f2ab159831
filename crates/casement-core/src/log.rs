//! File-based logger with size-based rotation.
//!
//! Logs are written to `~/.config/casement/logs/casement.log`. Once the
//! file passes the configured size it is renamed to `casement.log.1`
//! (one backup kept) and a fresh file is started. Until [`init`] runs
//! with logging enabled every macro call is a no-op.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

const LOG_FILE_NAME: &str = "casement.log";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parses a config level name. Unknown names mean `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

/// An append-only log file that rotates itself.
struct Sink {
    file: Option<File>,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

impl Sink {
    fn open(path: PathBuf, min_level: Level, max_bytes: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            file: Some(file),
            path,
            min_level,
            max_bytes,
            written,
        })
    }

    fn append(&mut self, line: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if file.write_all(line.as_bytes()).is_err() {
            return;
        }
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        // The handle must be closed before the rename on Windows.
        self.file = None;
        let _ = fs::rename(&self.path, backup_path(&self.path));
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .ok();
        self.written = 0;
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".1");
    path.with_file_name(name)
}

/// Initialises the global logger. Call once at application startup.
///
/// Does nothing if `config.enabled` is `false`.
pub fn init(config: &LogConfig) {
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    init_in(config, &dir.join("logs"));
}

/// Initialises the global logger writing into `log_dir`.
pub fn init_in(config: &LogConfig, log_dir: &Path) {
    if !config.enabled {
        return;
    }
    let _ = fs::create_dir_all(log_dir);

    let Ok(sink) = Sink::open(
        log_dir.join(LOG_FILE_NAME),
        Level::parse(&config.level),
        config.max_file_mb * 1024 * 1024,
    ) else {
        return;
    };
    let _ = SINK.set(Mutex::new(sink));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = SINK.get() else {
        return;
    };
    let Ok(mut sink) = mutex.lock() else {
        return;
    };
    if level < sink.min_level {
        return;
    }
    sink.append(&format_line(timestamp(), level, args));
}

fn format_line(time: String, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{level}] {args}\n")
}

/// UTC wall-clock time of day as `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60
    )
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("casement-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        // Assert
        assert_eq!(Level::parse("verbose"), Level::Info);
        assert_eq!(Level::parse("WARN"), Level::Warn);
        assert!(Level::Debug < Level::Error);
    }

    #[test]
    fn line_contains_level_and_message() {
        // Act
        let line = format_line("12:00:00".into(), Level::Warn, format_args!("span {}", 3));

        // Assert
        assert_eq!(line, "12:00:00 [WARN] span 3\n");
    }

    #[test]
    fn sink_rotates_after_size_limit() {
        // Arrange
        let dir = scratch_dir("rotate");
        let path = dir.join(LOG_FILE_NAME);
        let mut sink = Sink::open(path.clone(), Level::Debug, 16).unwrap();

        // Act
        sink.append("0123456789abcdef\n");
        sink.append("after\n");

        // Assert
        let backup = fs::read_to_string(dir.join("casement.log.1")).unwrap();
        let current = fs::read_to_string(&path).unwrap();
        assert_eq!(backup, "0123456789abcdef\n");
        assert_eq!(current, "after\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_logging_creates_no_directory() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("casement-off-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        // Act
        init_in(&LogConfig::default(), &dir);

        // Assert
        assert!(!dir.exists());
    }
}
