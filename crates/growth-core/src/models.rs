//! Data models for growth-calc.

use std::path::PathBuf;

/// Default location of the session log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/growth_calc.log";

/// Configuration for a single calculation session.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Base value B
    pub base: f64,
    /// Number of steps E for both sequences
    pub exponent: i32,
    /// Session log path, appended to when logging is enabled
    pub log_file: PathBuf,
    /// Mirror console output into `log_file`
    pub enable_logging: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base: 2.0,
            exponent: 5,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            enable_logging: true,
        }
    }
}

impl GrowthConfig {
    pub fn new(base: f64, exponent: i32) -> Self {
        Self {
            base,
            exponent,
            ..Default::default()
        }
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn without_logging(mut self) -> Self {
        self.enable_logging = false;
        self
    }

    /// Overwrite every field that `overrides` sets.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(base) = overrides.base {
            self.base = base;
        }
        if let Some(exponent) = overrides.exponent {
            self.exponent = exponent;
        }
        if let Some(log_file) = overrides.logfile {
            self.log_file = log_file;
        }
        if let Some(enable_logging) = overrides.enable_logging {
            self.enable_logging = enable_logging;
        }
    }
}

/// Partial configuration read from a config file. Unset keys keep
/// whatever value the target config already has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub base: Option<f64>,
    pub exponent: Option<i32>,
    pub logfile: Option<PathBuf>,
    pub enable_logging: Option<bool>,
}

/// The two growth patterns computed in every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Linear,
    Exponential,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 2] = [SequenceKind::Linear, SequenceKind::Exponential];

    /// Section header printed to the console before the sequence starts.
    pub fn banner(&self) -> &'static str {
        match self {
            SequenceKind::Linear => {
                "=== LINEAR GROWTH (Incremental Multiplication: B * E) ==="
            }
            SequenceKind::Exponential => {
                "=== EXPONENTIAL GROWTH (Incremental Exponentiation: B^E) ==="
            }
        }
    }
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceKind::Linear => write!(f, "Linear"),
            SequenceKind::Exponential => write!(f, "Exponential"),
        }
    }
}

/// One computed step of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub index: i32,
    pub value: f64,
}

/// Final values of a completed session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub linear: f64,
    pub exponential: f64,
}
