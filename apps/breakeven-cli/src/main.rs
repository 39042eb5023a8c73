//! # Breakeven CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (defaults, `breakeven.toml`, `BREAKEVEN_*`);
//!    a bad config is reported like any other error
//! 2. Initialize tracing
//! 3. Run the command line and exit non-zero if it reported an error

use anyhow::Context;
use std::env;
use std::io;
use std::process::ExitCode;
use tracing::debug;

use breakeven_cli::config::CliConfig;

fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();

    let stdout = io::stdout();
    let stderr = io::stderr();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => {
            breakeven_cli::report_config_error(
                &args,
                error,
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
            .context("failed to write output")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    breakeven_cli::init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let succeeded = breakeven_cli::run(
        &args,
        &config,
        io::stdin().lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("failed to write output")?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
