//! Session log: every entry is timestamped and written to the console, and
//! mirrored into an append-only log file when file logging is active.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::error::Result;
use crate::models::GrowthConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock time with millisecond precision.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub struct SessionLog<W: Write> {
    console: W,
    file: Option<File>,
    log_path: PathBuf,
}

impl SessionLog<io::Stdout> {
    pub fn stdout(config: &GrowthConfig) -> Result<Self> {
        Self::open(config, io::stdout())
    }
}

impl<W: Write> SessionLog<W> {
    /// Open the session log for `config`.
    ///
    /// A log file that cannot be opened is not an error: a warning is
    /// emitted and the session continues on the console only.
    pub fn open(config: &GrowthConfig, mut console: W) -> Result<Self> {
        let file = if config.enable_logging {
            match open_append(&config.log_file) {
                Ok(file) => {
                    writeln!(console, "Logging to: {}\n", config.log_file.display())?;
                    Some(file)
                }
                Err(e) => {
                    warn!(
                        "Could not open log file: {} ({})",
                        config.log_file.display(),
                        e
                    );
                    warn!("Continuing without file logging...");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            console,
            file,
            log_path: config.log_file.clone(),
        })
    }

    /// Write `[timestamp] message` to the console and the log file.
    pub fn entry(&mut self, message: &str) -> Result<()> {
        let line = format!("[{}] {}", timestamp(), message);
        writeln!(self.console, "{line}")?;

        if let Some(file) = self.file.as_mut() {
            let written = writeln!(file, "{line}").and_then(|_| file.flush());
            if let Err(e) = written {
                warn!("Failed to write log file {}: {}", self.log_path.display(), e);
                warn!("Continuing without file logging...");
                self.file = None;
            }
        }
        Ok(())
    }

    /// Console-only line, without a timestamp.
    pub fn banner(&mut self, text: &str) -> Result<()> {
        writeln!(self.console, "{text}")?;
        Ok(())
    }

    /// Whether entries are currently mirrored to the log file.
    pub fn is_logging(&self) -> bool {
        self.file.is_some()
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Flush both sinks and hand back the console writer.
    pub fn finish(mut self) -> Result<W> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(self.console)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(tmp: &TempDir) -> GrowthConfig {
        GrowthConfig::new(2.0, 3).with_log_file(tmp.path().join("nested/dir/session.log"))
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // 2024-01-01 12:00:00.000
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn test_entry_goes_to_console_and_file() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let mut log = SessionLog::open(&config, Vec::new()).unwrap();
        assert!(log.is_logging());

        log.entry("hello").unwrap();
        log.banner("=== banner ===").unwrap();
        let console = String::from_utf8(log.finish().unwrap()).unwrap();

        assert!(console.starts_with("Logging to: "));
        let entry = console.lines().find(|l| l.ends_with("] hello")).unwrap();
        assert!(entry.starts_with('['));
        assert!(console.contains("=== banner ===\n"));

        let file = fs::read_to_string(&config.log_file).unwrap();
        assert_eq!(file.lines().count(), 1, "banners are console-only");
        assert_eq!(file.lines().next().unwrap(), entry);
    }

    #[test]
    fn test_log_file_is_appended() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        for msg in ["first", "second"] {
            let mut log = SessionLog::open(&config, io::sink()).unwrap();
            log.entry(msg).unwrap();
            log.finish().unwrap();
        }
        let file = fs::read_to_string(&config.log_file).unwrap();
        let lines: Vec<&str> = file.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_disabled_logging_writes_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp).without_logging();
        let mut log = SessionLog::open(&config, Vec::new()).unwrap();
        log.entry("console only").unwrap();
        assert!(!log.is_logging());
        assert!(!config.log_file.exists());
    }

    #[test]
    fn test_unopenable_log_file_falls_back_to_console() {
        let tmp = TempDir::new().unwrap();
        // A directory cannot be opened for appending.
        let config = GrowthConfig::new(2.0, 3).with_log_file(tmp.path());
        let mut log = SessionLog::open(&config, Vec::new()).unwrap();
        assert!(!log.is_logging());

        log.entry("still printed").unwrap();
        let console = String::from_utf8(log.finish().unwrap()).unwrap();
        assert!(console.contains("] still printed"));
        assert!(!console.contains("Logging to:"));
    }
}
