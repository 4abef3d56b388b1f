//! growth_calc CLI: argument surface and config resolution.
//!
//! The binary in `main.rs` only sets up tracing and calls [`run`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use growth_core::format::format_operand;
use growth_core::{load_config_file, GrowthConfig, GrowthError, Runner, SessionLog};

/// Config file read when no arguments are given.
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

const AFTER_HELP: &str = "\
Usage modes:
  1. With command-line arguments:
     growth_calc <base> <exponent> [logfile]
     Example: growth_calc 2 5

  2. With config file:
     growth_calc --config <config_file>
     Example: growth_calc --config config.txt

  3. Default config file:
     growth_calc
     (Uses config.txt in current directory)

Config file keys (key=value, '#' starts a comment):
  base, exponent (or expo), logfile, enable_logging

Output:
  - Results are displayed on terminal with 1-second delay between steps
  - Logs are written to file specified in config (if enabled)
  - Linear Growth: B × 1, B × 2, B × 3, ..., B × E
  - Exponential Growth: B^1, B^2, B^3, ..., B^E";

#[derive(Parser, Debug)]
#[command(
    name = "growth_calc",
    about = "Growth Pattern Calculator: paced linear and exponential growth sequences",
    version,
    author,
    allow_negative_numbers = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Base value B
    #[arg(requires = "exponent", conflicts_with = "config")]
    pub base: Option<f64>,

    /// Number of steps E (at least 1)
    pub exponent: Option<i32>,

    /// Log file path (default: logs/growth_calc.log)
    pub logfile: Option<PathBuf>,

    /// Read configuration from FILE
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not write the log file, console output only
    #[arg(long)]
    pub no_log: bool,

    /// Pause between steps in milliseconds
    #[arg(long, hide = true, default_value_t = 1000)]
    pub step_delay_ms: u64,
}

impl Cli {
    /// Build the session config from the arguments or a config file,
    /// reporting the chosen values on `out`.
    pub fn resolve<W: Write>(&self, out: &mut W) -> Result<GrowthConfig> {
        let mut config = match (self.base, self.exponent) {
            (Some(base), Some(exponent)) => {
                let mut config = GrowthConfig::new(base, exponent);
                if let Some(logfile) = &self.logfile {
                    config.log_file = logfile.clone();
                }
                writeln!(out, "Using command-line parameters:")?;
                describe(out, &config)?;
                config
            }
            _ => {
                let path = self
                    .config
                    .as_deref()
                    .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
                read_config(path, out)?
            }
        };

        if self.no_log {
            config.enable_logging = false;
        }
        Ok(config)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

fn read_config<W: Write>(path: &Path, out: &mut W) -> Result<GrowthConfig> {
    writeln!(out, "Reading configuration from: {}", path.display())?;

    match load_config_file(path, GrowthConfig::default()) {
        Ok(config) => {
            writeln!(out, "Configuration loaded successfully:")?;
            describe(out, &config)?;
            Ok(config)
        }
        Err(e @ GrowthError::ConfigUnreadable { .. }) => {
            let defaults = GrowthConfig::default();
            warn!("{e}");
            warn!(
                "Failed to read config file. Using default values (base={}, exponent={})",
                format_operand(defaults.base),
                defaults.exponent
            );
            writeln!(out, "\nTo create a config file, run: growth_calc --help")?;
            Ok(defaults)
        }
        Err(e) => Err(e).with_context(|| format!("Invalid config file {}", path.display())),
    }
}

fn describe<W: Write>(out: &mut W, config: &GrowthConfig) -> Result<()> {
    writeln!(out, "  Base = {}", format_operand(config.base))?;
    writeln!(out, "  Exponent = {}", config.exponent)?;
    writeln!(out, "  Log file = {}", config.log_file.display())?;
    Ok(())
}

/// Resolve, validate and run a full session, writing all output to `out`.
pub fn run<W: Write>(cli: &Cli, mut out: W) -> Result<()> {
    let config = cli.resolve(&mut out)?;
    if let Some(advisory) = config.validate()? {
        warn!("{advisory}");
    }

    let mut log = SessionLog::open(&config, out)?;
    let runner = Runner::new(config).with_step_delay(cli.step_delay());
    runner.run_session(&mut log)?;

    let saved_to = log.is_logging().then(|| log.log_path().to_path_buf());
    let mut out = log.finish()?;

    writeln!(out, "Calculation completed!")?;
    if let Some(path) = saved_to {
        writeln!(out, "Logs saved to: {}", path.display())?;
    }
    Ok(())
}
