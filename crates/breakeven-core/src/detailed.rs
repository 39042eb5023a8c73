//! # Hospitality Breakeven Calculator
//!
//! Itemized overheads, variable costs as a share of the bill, and two ways of
//! stating sales.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Fixed costs     8 items, each >= 0  ──► total fixed                 │
//! │          │                                                              │
//! │  2. Variable %      3 items in [0,100]  ──► total %  (must be < 100)    │
//! │          │                                                              │
//! │  3. Sales mode ─┬─ PerGuestPrice: margin = price × (1 - %/100)          │
//! │                 │     breakeven = fixed / margin          (guests)      │
//! │                 │                                                       │
//! │                 └─ GuestCount:    denom = guests × (1 - %/100)          │
//! │                       breakeven = fixed / denom   (revenue per guest)   │
//! │          │                                                              │
//! │  4. Weekly          total revenue / 4.33 (month) or / 52 (year)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failing step returns immediately; there are no partial results.

use crate::error::ValidationError;
use crate::types::{
    DetailedBreakevenInput, DetailedBreakevenResult, FixedCostItems, OutputKind, SalesMode,
    TimePeriod, VariableCostPercents,
};
use crate::validation::{
    require_finite_result, require_non_negative, require_percent, require_positive,
    ValidationResult,
};
use crate::PERCENT_MAX;

pub const PRICE_PER_GUEST: &str = "Average Sale Price Per Guest";
pub const PRICE_PER_GUEST_MARGIN: &str = "Selling Price Per Guest";
pub const VARIABLE_COST_PER_GUEST: &str = "Variable Cost Per Guest";
pub const TOTAL_FIXED_COSTS: &str = "Total Fixed Costs";
pub const BREAKEVEN_POINT: &str = "Breakeven Point";
pub const REQUIRED_REVENUE: &str = "Required Revenue";
pub const WEEKLY_REVENUE: &str = "Weekly Revenue";

/// Field label for the guest count; names the period it covers.
pub fn guest_count_label(period: TimePeriod) -> String {
    format!("Average Number of Guests ({})", period.adverb())
}

/// Computes the hospitality breakeven point.
///
/// ## Errors
/// - [`ValidationError::Negative`] for a negative cost line
/// - [`ValidationError::NegativeTotalFixedCosts`] if the total is negative
/// - [`ValidationError::PercentOutOfRange`] for a percentage outside `[0, 100]`
/// - [`ValidationError::VariableCostsTooHigh`] if the percentages sum to `>= 100`
/// - [`ValidationError::NotPositive`] for a sales value `<= 0`
/// - [`ValidationError::NonPositiveMargin`] / [`ValidationError::NonPositiveDenominator`]
///   if nothing is left over per guest
/// - [`ValidationError::ResultOutOfRange`] when a total or result overflows
///
/// ## Example
/// ```rust
/// use breakeven_core::{
///     calculate_detailed_breakeven, DetailedBreakevenInput, FixedCostItems, OutputKind,
///     SalesMode, TimePeriod, VariableCostPercents,
/// };
///
/// let result = calculate_detailed_breakeven(&DetailedBreakevenInput {
///     fixed_costs: FixedCostItems { rent: 120_000.0, ..Default::default() },
///     variable_cost_percents: VariableCostPercents::from_array([30.0, 5.0, 15.0]),
///     sales_mode: SalesMode::GuestCount,
///     sales_value: 10_000.0,
///     period: TimePeriod::Year,
/// })
/// .unwrap();
///
/// assert_eq!(result.output_kind, OutputKind::RevenuePerGuest);
/// assert_eq!(result.breakeven_point, 24.0);
/// assert_eq!(result.total_revenue, 240_000.0);
/// ```
pub fn calculate_detailed_breakeven(
    input: &DetailedBreakevenInput,
) -> ValidationResult<DetailedBreakevenResult> {
    let total_fixed_costs = total_fixed_costs(&input.fixed_costs)?;
    let total_variable_cost_percent = total_variable_cost_percent(&input.variable_cost_percents)?;
    let variable_fraction = total_variable_cost_percent / PERCENT_MAX;

    let (breakeven_point, output_kind) = match input.sales_mode {
        SalesMode::PerGuestPrice => {
            let price = require_positive(PRICE_PER_GUEST, input.sales_value)?;

            let variable_cost_per_guest = price * variable_fraction;
            let margin = price - variable_cost_per_guest;
            if margin <= 0.0 {
                return Err(ValidationError::NonPositiveMargin {
                    price_field: PRICE_PER_GUEST_MARGIN.to_string(),
                    cost_field: VARIABLE_COST_PER_GUEST.to_string(),
                });
            }

            (
                require_finite_result(BREAKEVEN_POINT, total_fixed_costs / margin)?,
                OutputKind::Guests,
            )
        }
        SalesMode::GuestCount => {
            let guests = require_positive(&guest_count_label(input.period), input.sales_value)?;

            let denominator = guests * (1.0 - variable_fraction);
            if denominator <= 0.0 {
                return Err(ValidationError::NonPositiveDenominator { denominator });
            }

            (
                require_finite_result(BREAKEVEN_POINT, total_fixed_costs / denominator)?,
                OutputKind::RevenuePerGuest,
            )
        }
    };

    // Both modes multiply the breakeven point by the sales figure
    let total_revenue =
        require_finite_result(REQUIRED_REVENUE, breakeven_point * input.sales_value)?;
    let weekly_revenue =
        require_finite_result(WEEKLY_REVENUE, total_revenue / input.period.weeks())?;

    Ok(DetailedBreakevenResult {
        breakeven_point,
        output_kind,
        total_revenue,
        weekly_revenue,
        period: input.period,
        total_fixed_costs,
        total_variable_cost_percent,
    })
}

impl DetailedBreakevenInput {
    /// Shorthand for [`calculate_detailed_breakeven`].
    pub fn calculate(&self) -> ValidationResult<DetailedBreakevenResult> {
        calculate_detailed_breakeven(self)
    }
}

/// Validates every cost line and returns their sum.
fn total_fixed_costs(items: &FixedCostItems) -> ValidationResult<f64> {
    for (label, amount) in items.labeled() {
        require_non_negative(label, amount)?;
    }

    let total = require_finite_result(TOTAL_FIXED_COSTS, items.total())?;
    if total < 0.0 {
        return Err(ValidationError::NegativeTotalFixedCosts { total });
    }

    Ok(total)
}

/// Validates every percentage and returns their sum, which must stay below 100.
fn total_variable_cost_percent(percents: &VariableCostPercents) -> ValidationResult<f64> {
    for (label, percent) in percents.labeled() {
        require_percent(label, percent)?;
    }

    let total = percents.total();
    if total >= PERCENT_MAX {
        return Err(ValidationError::VariableCostsTooHigh {
            total_percent: total,
        });
    }

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        fixed: [f64; 8],
        percents: [f64; 3],
        sales_mode: SalesMode,
        sales_value: f64,
        period: TimePeriod,
    ) -> DetailedBreakevenInput {
        DetailedBreakevenInput {
            fixed_costs: FixedCostItems::from_array(fixed),
            variable_cost_percents: VariableCostPercents::from_array(percents),
            sales_mode,
            sales_value,
            period,
        }
    }

    /// 10000 total fixed costs split across all eight lines.
    const TEN_THOUSAND: [f64; 8] = [3000.0, 2000.0, 500.0, 500.0, 500.0, 2500.0, 500.0, 500.0];

    #[test]
    fn test_per_guest_price_monthly() {
        let result = input(
            TEN_THOUSAND,
            [20.0, 5.0, 15.0],
            SalesMode::PerGuestPrice,
            100.0,
            TimePeriod::Month,
        )
        .calculate()
        .unwrap();

        assert_eq!(result.total_fixed_costs, 10000.0);
        assert_eq!(result.total_variable_cost_percent, 40.0);
        assert_eq!(result.output_kind, OutputKind::Guests);
        assert_eq!(result.period, TimePeriod::Month);

        // margin 60 per guest
        let rounded = result.rounded();
        assert_eq!(rounded.breakeven_point, 166.67);
        assert_eq!(rounded.total_revenue, 16666.67);
        assert_eq!(rounded.weekly_revenue, 3849.11);
    }

    #[test]
    fn test_guest_count_yearly() {
        let mut fixed = [0.0; 8];
        fixed[5] = 120000.0;

        let result = input(
            fixed,
            [25.0, 10.0, 15.0],
            SalesMode::GuestCount,
            10000.0,
            TimePeriod::Year,
        )
        .calculate()
        .unwrap();

        assert_eq!(result.output_kind, OutputKind::RevenuePerGuest);
        assert_eq!(result.breakeven_point, 24.0);
        assert_eq!(result.total_revenue, 240000.0);
        assert_eq!(result.rounded().weekly_revenue, 4615.38);
    }

    #[test]
    fn test_zero_percent_variable_costs() {
        let mut fixed = [0.0; 8];
        fixed[0] = 5000.0;

        let result = input(fixed, [0.0; 3], SalesMode::PerGuestPrice, 50.0, TimePeriod::Month)
            .calculate()
            .unwrap();
        assert_eq!(result.breakeven_point, 100.0);
        assert_eq!(result.total_revenue, 5000.0);
    }

    #[test]
    fn test_negative_cost_line_rejected() {
        let mut fixed = TEN_THOUSAND;
        fixed[6] = -1.0;

        let err = input(fixed, [10.0; 3], SalesMode::PerGuestPrice, 100.0, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert_eq!(err.field(), "Insurance Costs");
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        let err = input(TEN_THOUSAND, [10.0, 101.0, 0.0], SalesMode::PerGuestPrice, 100.0, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::PercentOutOfRange { value, .. } if value == 101.0));
        assert_eq!(err.field(), "Direct Expenses (Cleaning, etc.)");

        assert!(input(TEN_THOUSAND, [-5.0, 0.0, 0.0], SalesMode::PerGuestPrice, 100.0, TimePeriod::Month)
            .calculate()
            .is_err());
    }

    #[test]
    fn test_percent_total_of_100_has_no_breakeven() {
        let err = input(TEN_THOUSAND, [50.0, 30.0, 20.0], SalesMode::GuestCount, 500.0, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::VariableCostsTooHigh {
                total_percent: 100.0
            }
        );
    }

    #[test]
    fn test_sales_value_must_be_positive() {
        let err = input(TEN_THOUSAND, [10.0; 3], SalesMode::PerGuestPrice, 0.0, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert_eq!(err.field(), PRICE_PER_GUEST);

        let err = input(TEN_THOUSAND, [10.0; 3], SalesMode::GuestCount, -3.0, TimePeriod::Year)
            .calculate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid positive number for Average Number of Guests (annually)."
        );
    }

    #[test]
    fn test_weekly_divisor_follows_period() {
        let month = input(TEN_THOUSAND, [0.0; 3], SalesMode::PerGuestPrice, 10.0, TimePeriod::Month)
            .calculate()
            .unwrap();
        let year = input(TEN_THOUSAND, [0.0; 3], SalesMode::PerGuestPrice, 10.0, TimePeriod::Year)
            .calculate()
            .unwrap();

        assert_eq!(month.total_revenue, year.total_revenue);
        assert_eq!(month.weekly_revenue, 10000.0 / 4.33);
        assert_eq!(year.weekly_revenue, 10000.0 / 52.0);
    }

    #[test]
    fn test_overflowing_fixed_cost_total_rejected() {
        let err = input([1e308; 8], [0.0; 3], SalesMode::PerGuestPrice, 10.0, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ResultOutOfRange {
                field: TOTAL_FIXED_COSTS.to_string()
            }
        );
    }

    #[test]
    fn test_overflowing_results_rejected() {
        let mut fixed = [0.0; 8];
        fixed[5] = 1e308;

        // 1e308 over a 1e-10 margin per guest
        let err = input(fixed, [0.0; 3], SalesMode::PerGuestPrice, 1e-10, TimePeriod::Month)
            .calculate()
            .unwrap_err();
        assert_eq!(err.field(), BREAKEVEN_POINT);

        // 1e299 per guest is finite, but 99% variable costs need 100x fixed
        let mut fixed = [0.0; 8];
        fixed[5] = 1e307;
        let err = input(fixed, [99.0, 0.0, 0.0], SalesMode::GuestCount, 1e10, TimePeriod::Year)
            .calculate()
            .unwrap_err();
        assert_eq!(err.field(), REQUIRED_REVENUE);
    }
}
