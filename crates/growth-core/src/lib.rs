//! growth-core: linear and exponential growth sequences, paced and logged.
//!
//! A session is a flat [`GrowthConfig`] run through a [`Runner`]: every step
//! is formatted, timestamped and written to the console, and mirrored into an
//! append-only log file by [`SessionLog`] when logging is enabled.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod runner;
pub mod sequence;
pub mod session;

pub use config::{load_config_file, parse_config_str, Advisory};
pub use error::GrowthError;
pub use models::{ConfigOverrides, GrowthConfig, SequenceKind, SessionSummary, Step};
pub use runner::Runner;
pub use session::SessionLog;
