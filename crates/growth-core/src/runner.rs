//! Paced session runner: linear sequence, then exponential, one step per tick.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::error::Result;
use crate::format;
use crate::models::{GrowthConfig, SequenceKind, SessionSummary};
use crate::session::SessionLog;

/// Pause before every printed step.
pub const STEP_DELAY: Duration = Duration::from_secs(1);

const FRAME: &str = "========================================";

pub struct Runner {
    config: GrowthConfig,
    step_delay: Duration,
}

impl Runner {
    pub fn new(config: GrowthConfig) -> Self {
        Self {
            config,
            step_delay: STEP_DELAY,
        }
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Run one sequence and return its final value.
    ///
    /// With no steps to run the final value is the base itself.
    pub fn run_sequence<W: Write>(&self, kind: SequenceKind, log: &mut SessionLog<W>) -> Result<f64> {
        let GrowthConfig { base, exponent, .. } = self.config;

        if kind == SequenceKind::Linear {
            log.banner("")?;
        }
        log.banner(kind.banner())?;
        log.entry(&format::start_message(kind))?;
        log.entry(&format::parameters_message(base, exponent))?;

        let mut result = base;
        for step in kind.steps(base, exponent) {
            self.pace();
            result = step.value;
            log.entry(&format::step_message(kind, base, &step))?;
        }

        log.entry(&format::final_message(kind, result))?;
        log.banner("")?;
        Ok(result)
    }

    /// Run a full session: framed start, both sequences, framed end.
    pub fn run_session<W: Write>(&self, log: &mut SessionLog<W>) -> Result<SessionSummary> {
        info!(
            base = self.config.base,
            exponent = self.config.exponent,
            "Calculation session started"
        );

        frame(log, "NEW CALCULATION SESSION STARTED")?;
        let linear = self.run_sequence(SequenceKind::Linear, log)?;
        let exponential = self.run_sequence(SequenceKind::Exponential, log)?;
        frame(log, "CALCULATION SESSION COMPLETED")?;

        Ok(SessionSummary {
            linear,
            exponential,
        })
    }

    fn pace(&self) {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}

fn frame<W: Write>(log: &mut SessionLog<W>, title: &str) -> Result<()> {
    log.entry(FRAME)?;
    log.entry(title)?;
    log.entry(FRAME)
}
