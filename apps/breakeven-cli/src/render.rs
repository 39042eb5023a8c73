//! # Rendering
//!
//! Turns calculator results and errors into terminal text or JSON.
//!
//! ## Output Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  text (stdout)                      json (stdout)                       │
//! │  ─────────────                      ─────────────                       │
//! │  Breakeven Units: 50.00             { "breakevenUnits": 50.0,           │
//! │  Breakeven Revenue: $2500.00          "breakevenRevenue": 2500.0, ... } │
//! │                                                                         │
//! │  text (stderr)                      json (stdout)                       │
//! │  Error: Please enter a valid ...    { "code": "VALIDATION_ERROR", ... } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! JSON figures are rounded to two decimals, the same as text.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use breakeven_core::rounding::{format_currency, Rounded};
use breakeven_core::{DetailedBreakevenResult, OutputKind, SimpleBreakevenResult, TimePeriod};

use crate::commands::Report;
use crate::error::{ApiError, CliError};

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const USAGE: &str = "\
Usage: breakeven <command> [options]

Commands:
  simple      Breakeven units and revenue for a single product
  detailed    Hospitality breakeven with itemized costs
  help        Show this message

Common options:
  --json | --text          Output format (default from config)
  --stdin                  Read the form as JSON from standard input

simple options:
  --fixed-costs N  --price-per-unit N  --variable-cost-per-unit N

detailed options:
  --period month|year      --sales-mode per-guest|num-guests
  --price-per-guest N      --guests N
  --min-staff N  --manager-payroll N  --administration N  --marketing N
  --repairs N    --rent N             --insurance N       --utilities N
  --cost-of-sales P  --direct-expenses P  --payroll P      (percentages)
";

/// Writes a successful report.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &Report,
    currency_symbol: &str,
) -> io::Result<()> {
    match (report, format) {
        (Report::Usage, _) => out.write_all(USAGE.as_bytes()),
        (Report::Simple(result), OutputFormat::Text) => {
            write_simple_text(out, result, currency_symbol)
        }
        (Report::Detailed(result), OutputFormat::Text) => {
            write_detailed_text(out, result, currency_symbol)
        }
        (Report::Simple(result), OutputFormat::Json) => write_json(out, &result.rounded()),
        (Report::Detailed(result), OutputFormat::Json) => write_json(out, &result.rounded()),
    }
}

/// Writes an error: plain text to `err`, or an [`ApiError`] object to `out`.
pub fn write_error<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
    error: &CliError,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(err, "Error: {}", error),
        OutputFormat::Json => write_json(out, &ApiError::from(error)),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_simple_text<W: Write>(
    out: &mut W,
    result: &SimpleBreakevenResult,
    currency_symbol: &str,
) -> io::Result<()> {
    writeln!(out, "Breakeven Units: {}", Rounded(result.breakeven_units))?;
    writeln!(
        out,
        "Breakeven Revenue: {}",
        format_currency(result.breakeven_revenue, currency_symbol)
    )?;
    writeln!(
        out,
        "Contribution Margin Per Unit: {}",
        format_currency(result.contribution_margin, currency_symbol)
    )
}

fn write_detailed_text<W: Write>(
    out: &mut W,
    result: &DetailedBreakevenResult,
    currency_symbol: &str,
) -> io::Result<()> {
    let period = result.period.noun();

    match result.output_kind {
        OutputKind::Guests => {
            writeln!(out, "Breakeven Point: {} Guests", Rounded(result.breakeven_point))?;
            writeln!(
                out,
                "  (You need to serve this many guests to cover all your costs for the {}.)",
                period
            )?;
        }
        OutputKind::RevenuePerGuest => {
            writeln!(
                out,
                "Breakeven Point: {} (Average Revenue Per Guest)",
                format_currency(result.breakeven_point, currency_symbol)
            )?;
            writeln!(
                out,
                "  (You need to achieve this average revenue per guest to cover all your costs for the {}.)",
                period
            )?;
        }
    }

    writeln!(
        out,
        "Required Revenue: {} ({})",
        format_currency(result.total_revenue, currency_symbol),
        period_heading(result.period)
    )?;
    writeln!(
        out,
        "                  {} (Weekly)",
        format_currency(result.weekly_revenue, currency_symbol)
    )?;
    writeln!(
        out,
        "Total Fixed Costs: {}",
        format_currency(result.total_fixed_costs, currency_symbol)
    )?;
    writeln!(
        out,
        "Total Variable Costs: {}%",
        Rounded(result.total_variable_cost_percent)
    )
}

fn period_heading(period: TimePeriod) -> &'static str {
    match period {
        TimePeriod::Month => "Monthly",
        TimePeriod::Year => "Annually",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::ValidationError;

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_report(&mut out, format, report, "$").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn simple_result() -> SimpleBreakevenResult {
        SimpleBreakevenResult {
            breakeven_units: 50.0,
            breakeven_revenue: 2500.0,
            contribution_margin: 20.0,
        }
    }

    #[test]
    fn test_simple_text() {
        let text = render(&Report::Simple(simple_result()), OutputFormat::Text);
        assert!(text.contains("Breakeven Units: 50.00\n"));
        assert!(text.contains("Breakeven Revenue: $2500.00\n"));
        assert!(text.contains("Contribution Margin Per Unit: $20.00\n"));
    }

    #[test]
    fn test_simple_json_is_rounded() {
        let mut result = simple_result();
        result.breakeven_units = 33.333_333;
        let json = render(&Report::Simple(result), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["breakevenUnits"], 33.33);
        assert_eq!(value["breakevenRevenue"], 2500.0);
    }

    #[test]
    fn test_detailed_text_labels_follow_kind_and_period() {
        let guests = DetailedBreakevenResult {
            breakeven_point: 166.666_666,
            output_kind: OutputKind::Guests,
            total_revenue: 16666.666_666,
            weekly_revenue: 3849.114_703,
            period: TimePeriod::Month,
            total_fixed_costs: 10000.0,
            total_variable_cost_percent: 40.0,
        };
        let text = render(&Report::Detailed(guests), OutputFormat::Text);
        assert!(text.contains("Breakeven Point: 166.67 Guests"));
        assert!(text.contains("for the month."));
        assert!(text.contains("Required Revenue: $16666.67 (Monthly)"));
        assert!(text.contains("$3849.11 (Weekly)"));

        let per_guest = DetailedBreakevenResult {
            breakeven_point: 24.0,
            output_kind: OutputKind::RevenuePerGuest,
            total_revenue: 240000.0,
            weekly_revenue: 4615.384_615,
            period: TimePeriod::Year,
            total_fixed_costs: 120000.0,
            total_variable_cost_percent: 50.0,
        };
        let text = render(&Report::Detailed(per_guest), OutputFormat::Text);
        assert!(text.contains("Breakeven Point: $24.00 (Average Revenue Per Guest)"));
        assert!(text.contains("(Annually)"));
        assert!(text.contains("$4615.38 (Weekly)"));
    }

    #[test]
    fn test_errors_by_format() {
        let error = CliError::from(ValidationError::VariableCostsTooHigh {
            total_percent: 100.0,
        });

        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_error(&mut out, &mut err, OutputFormat::Text, &error).unwrap();
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("Error: Total Variable Costs"));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_error(&mut out, &mut err, OutputFormat::Json, &error).unwrap();
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_usage() {
        assert_eq!(render(&Report::Usage, OutputFormat::Json), USAGE);
    }
}
