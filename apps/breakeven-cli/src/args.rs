//! # Argument Parsing
//!
//! Hand-rolled flag parsing into `breakeven-core` forms.
//!
//! Flags take their value either as the next argument (`--rent 8000`) or
//! inline (`--rent=8000`). Values are kept as text; turning them into numbers
//! is the form's job, so `--rent abc` fails with the same message a JSON form
//! would get.

use breakeven_core::{DetailedBreakevenForm, SalesMode, SimpleBreakevenForm, TimePeriod};

use crate::error::CliError;
use crate::render::OutputFormat;

/// Which calculator to run, with the form built from flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Simple(SimpleBreakevenForm),
    Detailed(DetailedBreakevenForm),
    Help,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,

    /// `--json` / `--text`; `None` means "use the configured format".
    pub format: Option<OutputFormat>,

    /// `--stdin`: ignore field flags and read the form as JSON.
    pub from_stdin: bool,
}

impl Invocation {
    /// Parses arguments (without the program name).
    ///
    /// `default_period` seeds the hospitality form before `--period` is applied.
    pub fn parse(args: &[String], default_period: TimePeriod) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Invocation::help());
        };

        match name.as_str() {
            "simple" => {
                let mut form = SimpleBreakevenForm::default();
                let options = parse_flags(rest, &mut form)?;
                Ok(options.into_invocation(Command::Simple(form)))
            }
            "detailed" | "hospitality" => {
                let mut form = DetailedBreakevenForm {
                    period: default_period,
                    ..Default::default()
                };
                let options = parse_flags(rest, &mut form)?;
                Ok(options.into_invocation(Command::Detailed(form)))
            }
            "help" | "--help" | "-h" => Ok(Invocation::help()),
            other => Err(CliError::invalid_argument(format!(
                "Unknown command: {} (expected simple, detailed or help)",
                other
            ))),
        }
    }

    fn help() -> Self {
        Invocation {
            command: Command::Help,
            format: None,
            from_stdin: false,
        }
    }
}

/// Flags every command accepts.
#[derive(Debug, Default)]
struct CommonOptions {
    format: Option<OutputFormat>,
    from_stdin: bool,
    help: bool,
}

impl CommonOptions {
    fn into_invocation(self, command: Command) -> Invocation {
        let command = if self.help { Command::Help } else { command };
        Invocation {
            command,
            format: self.format,
            from_stdin: self.from_stdin,
        }
    }
}

/// A form that can absorb `--flag value` pairs.
trait FormFlags {
    /// Stores `value` under `flag`. Returns `Ok(false)` if the flag is unknown.
    fn set(&mut self, flag: &str, value: String) -> Result<bool, CliError>;
}

impl FormFlags for SimpleBreakevenForm {
    fn set(&mut self, flag: &str, value: String) -> Result<bool, CliError> {
        let slot = match flag {
            "--fixed-costs" => &mut self.fixed_costs,
            "--price-per-unit" | "--price" => &mut self.price_per_unit,
            "--variable-cost-per-unit" | "--variable-cost" => &mut self.variable_cost_per_unit,
            _ => return Ok(false),
        };
        *slot = value;
        Ok(true)
    }
}

impl FormFlags for DetailedBreakevenForm {
    fn set(&mut self, flag: &str, value: String) -> Result<bool, CliError> {
        match flag {
            "--period" => {
                self.period = value
                    .parse::<TimePeriod>()
                    .map_err(CliError::InvalidArgument)?;
                return Ok(true);
            }
            "--sales-mode" => {
                self.sales_mode = value
                    .parse::<SalesMode>()
                    .map_err(CliError::InvalidArgument)?;
                return Ok(true);
            }
            _ => {}
        }

        let slot = match flag {
            "--min-staff" | "--min-operational-staff" => &mut self.min_operational_staff,
            "--manager-payroll" => &mut self.manager_payroll,
            "--administration" => &mut self.administration,
            "--marketing" => &mut self.marketing,
            "--repairs" | "--repairs-maintenance" => &mut self.repairs_maintenance,
            "--rent" => &mut self.rent,
            "--insurance" => &mut self.insurance,
            "--utilities" => &mut self.utilities,
            "--cost-of-sales" => &mut self.cost_of_sales_percent,
            "--direct-expenses" => &mut self.direct_expenses_percent,
            "--payroll" => &mut self.payroll_percent,
            "--price-per-guest" => &mut self.price_per_guest,
            "--guests" | "--guest-count" => &mut self.guest_count,
            _ => return Ok(false),
        };
        *slot = value;
        Ok(true)
    }
}

fn parse_flags<F: FormFlags>(args: &[String], form: &mut F) -> Result<CommonOptions, CliError> {
    let mut options = CommonOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if arg.starts_with("--") => (flag, Some(value)),
            _ => (arg, None),
        };

        match flag {
            "--json" => options.format = Some(OutputFormat::Json),
            "--text" => options.format = Some(OutputFormat::Text),
            "--stdin" => options.from_stdin = true,
            "--help" | "-h" => options.help = true,
            _ if flag.starts_with("--") => {
                // Values may legitimately start with '-' (negative numbers),
                // so the next argument is always taken as-is
                let value = match inline {
                    Some(value) => value.to_string(),
                    None => {
                        i += 1;
                        args.get(i).cloned().ok_or_else(|| {
                            CliError::invalid_argument(format!("Missing value for {}", flag))
                        })?
                    }
                };

                if !form.set(flag, value)? {
                    return Err(CliError::invalid_argument(format!("Unknown flag: {}", flag)));
                }
            }
            _ => {
                return Err(CliError::invalid_argument(format!(
                    "Unexpected argument: {}",
                    arg
                )))
            }
        }

        i += 1;
    }

    Ok(options)
}
