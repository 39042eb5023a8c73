//! # Commands Module
//!
//! One module per calculator. Each takes a parsed form, runs it through
//! `breakeven-core`, and logs the outcome.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (dispatch, stdin forms)
//! ├── simple.rs    ◄─── Per-unit breakeven
//! └── detailed.rs  ◄─── Hospitality breakeven
//! ```

pub mod detailed;
pub mod simple;

use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::debug;

use breakeven_core::{DetailedBreakevenResult, SimpleBreakevenResult, TimePeriod};

use crate::args::{Command, Invocation};
use crate::config::CliConfig;
use crate::error::CliError;

/// What a command produced, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Simple(SimpleBreakevenResult),
    Detailed(DetailedBreakevenResult),
    Usage,
}

/// Runs the command named by `invocation`.
///
/// With `--stdin`, the form is read from `stdin` as JSON and any field flags
/// are ignored.
pub fn execute<R: Read>(
    invocation: Invocation,
    config: &CliConfig,
    stdin: R,
) -> Result<Report, CliError> {
    match invocation.command {
        Command::Help => Ok(Report::Usage),
        Command::Simple(form) => {
            let form = if invocation.from_stdin {
                read_form(stdin, None)?
            } else {
                form
            };
            simple::calculate(&form).map(Report::Simple)
        }
        Command::Detailed(form) => {
            let form = if invocation.from_stdin {
                read_form(stdin, Some(config.default_period))?
            } else {
                form
            };
            detailed::calculate(&form).map(Report::Detailed)
        }
    }
}

/// Reads a JSON form object.
///
/// `default_period` fills in a missing `"period"` key, so stdin forms honor
/// the configured period the same way flag-built forms do.
fn read_form<T: DeserializeOwned, R: Read>(
    mut stdin: R,
    default_period: Option<TimePeriod>,
) -> Result<T, CliError> {
    // Read fully first so I/O failures stay distinct from malformed JSON
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;

    let mut value: serde_json::Value = serde_json::from_str(&text)?;

    if let (Some(period), Some(object)) = (default_period, value.as_object_mut()) {
        object
            .entry("period")
            .or_insert_with(|| serde_json::Value::String(period.noun().to_string()));
    }

    debug!(form = %value, "form read from stdin");
    Ok(serde_json::from_value(value)?)
}
