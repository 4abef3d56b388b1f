//! Example of driving a growth session directly from Rust.

use std::time::Duration;

use growth_core::{GrowthConfig, Runner, SessionLog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup configuration
    let config = GrowthConfig::new(1.5, 8).with_log_file("logs/example.log");
    if let Some(advisory) = config.validate()? {
        eprintln!("{advisory}");
    }

    // 2. Open the session log (console + log file)
    let mut log = SessionLog::stdout(&config)?;

    // 3. Run both sequences with a faster pace than the CLI
    let runner = Runner::new(config).with_step_delay(Duration::from_millis(200));
    let summary = runner.run_session(&mut log)?;

    println!(
        "linear = {}, exponential = {}",
        summary.linear, summary.exponential
    );
    log.finish()?;

    Ok(())
}
