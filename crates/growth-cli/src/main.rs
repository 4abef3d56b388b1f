//! growth_calc: paced linear and exponential growth sequences on the console.

use std::io;
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use growth_cli::{run, Cli};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the session output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::try_parse().unwrap_or_else(|e| {
        match e.kind() {
            // clap leaves the usage line out of bad-value errors
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                eprint!("{e}");
                eprintln!("\n{}", Cli::command().render_usage());
                process::exit(e.exit_code());
            }
            _ => e.exit(),
        }
    });

    run(&cli, io::stdout())
}
