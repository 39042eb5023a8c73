//! # Detailed Command
//!
//! `breakeven detailed`: hospitality breakeven with itemized overheads.

use tracing::{debug, info, warn};

use breakeven_core::{DetailedBreakevenForm, DetailedBreakevenResult};

use crate::error::CliError;

/// Parses the form and computes the hospitality breakeven point.
pub fn calculate(form: &DetailedBreakevenForm) -> Result<DetailedBreakevenResult, CliError> {
    debug!(
        period = %form.period,
        sales_mode = %form.sales_mode,
        "detailed command"
    );

    match form.calculate() {
        Ok(result) => {
            info!(
                breakeven_point = result.breakeven_point,
                output_kind = ?result.output_kind,
                total_revenue = result.total_revenue,
                weekly_revenue = result.weekly_revenue,
                "Hospitality breakeven computed"
            );
            Ok(result)
        }
        Err(error) => {
            warn!(field = error.field(), %error, "Hospitality breakeven rejected");
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::{OutputKind, SalesMode, TimePeriod, ValidationError};

    #[test]
    fn test_per_guest_monthly() {
        let form = DetailedBreakevenForm {
            period: TimePeriod::Month,
            sales_mode: SalesMode::PerGuestPrice,
            min_operational_staff: "6000".to_string(),
            rent: "4000".to_string(),
            cost_of_sales_percent: "20".to_string(),
            direct_expenses_percent: "5".to_string(),
            payroll_percent: "15".to_string(),
            price_per_guest: "100".to_string(),
            ..Default::default()
        };

        let result = calculate(&form).unwrap().rounded();
        assert_eq!(result.output_kind, OutputKind::Guests);
        assert_eq!(result.breakeven_point, 166.67);
        assert_eq!(result.total_revenue, 16666.67);
        assert_eq!(result.weekly_revenue, 3849.11);
    }

    #[test]
    fn test_percentages_totalling_100_rejected() {
        let form = DetailedBreakevenForm {
            cost_of_sales_percent: "60".to_string(),
            payroll_percent: "40".to_string(),
            price_per_guest: "100".to_string(),
            ..Default::default()
        };

        let err = calculate(&form).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::VariableCostsTooHigh { .. })
        ));
    }
}
