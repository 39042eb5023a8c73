//! # Breakeven CLI Library
//!
//! Everything behind the `breakeven` binary, kept in a library so it can be
//! tested without spawning a process.
//!
//! ## Module Organization
//! ```text
//! breakeven_cli/
//! ├── lib.rs          ◄─── You are here (run, tracing setup)
//! ├── args.rs         ◄─── Flags → forms
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch, JSON forms from stdin
//! │   ├── simple.rs   ◄─── Per-unit breakeven
//! │   └── detailed.rs ◄─── Hospitality breakeven
//! ├── config.rs       ◄─── CliConfig (file + env)
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── CliError, ApiError
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► Invocation::parse ──► commands::execute ──► render            │
//! │               │                       │                  │              │
//! │               │                 breakeven-core           ├─► stdout     │
//! │               │              (validate, compute)         │              │
//! │               └──────── errors ───────┴──────────────────┴─► stderr     │
//! │                                                           (json: stdout)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io::{self, Read, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use args::Invocation;
use config::{CliConfig, ConfigError};
use error::CliError;
use render::OutputFormat;

/// Runs one command line to completion.
///
/// Returns `Ok(true)` if the command succeeded and `Ok(false)` if an error
/// was reported to the user. `Err` means output itself could not be written.
pub fn run<R: Read, W: Write, E: Write>(
    args: &[String],
    config: &CliConfig,
    stdin: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let invocation = match Invocation::parse(args, config.default_period) {
        Ok(invocation) => invocation,
        Err(error) => {
            warn!(%error, "Invalid command line");
            let format = requested_format(args, config.output);
            render::write_error(out, err, format, &error)?;
            if format == OutputFormat::Text {
                writeln!(err, "Run `breakeven help` for usage.")?;
            }
            return Ok(false);
        }
    };

    let format = invocation.format.unwrap_or(config.output);

    match commands::execute(invocation, config, stdin) {
        Ok(report) => {
            render::write_report(out, format, &report, &config.currency_symbol)?;
            Ok(true)
        }
        Err(error) => {
            render::write_error(out, err, format, &error)?;
            Ok(false)
        }
    }
}

/// Reports a configuration that failed to load.
///
/// No config means no configured output format, so `--json` on the raw
/// command line is the only way to ask for a JSON error.
pub fn report_config_error<W: Write, E: Write>(
    args: &[String],
    error: ConfigError,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let format = requested_format(args, OutputFormat::Text);
    render::write_error(out, err, format, &CliError::from(error))
}

/// Output format named on the raw command line, honored even when the rest
/// of the line did not parse.
fn requested_format(args: &[String], fallback: OutputFormat) -> OutputFormat {
    if args.iter().any(|arg| arg == "--json") {
        OutputFormat::Json
    } else if args.iter().any(|arg| arg == "--text") {
        OutputFormat::Text
    } else {
        fallback
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=breakeven=trace` - Show trace for breakeven crates only
/// - Default: `config.log_filter`
///
/// Logs go to stderr so stdout carries only results.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
