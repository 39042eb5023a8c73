//! # Simple Breakeven Calculator
//!
//! Single product, per-unit pricing.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  contribution margin = price per unit - variable cost per unit         │
//! │                                                                         │
//! │  breakeven units     = fixed costs / contribution margin               │
//! │  breakeven revenue   = breakeven units × price per unit                │
//! │                                                                         │
//! │  fixed 1000, price 50, variable 30                                      │
//! │    margin 20 → 50 units → $2500.00                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{SimpleBreakevenInput, SimpleBreakevenResult};
use crate::validation::{
    require_finite_result, require_non_negative, require_positive, ValidationResult,
};

pub const FIXED_COSTS: &str = "Fixed Costs";
pub const PRICE_PER_UNIT: &str = "Selling Price Per Unit";
pub const VARIABLE_COST_PER_UNIT: &str = "Variable Costs Per Unit";
pub const BREAKEVEN_UNITS: &str = "Breakeven Units";
pub const BREAKEVEN_REVENUE: &str = "Breakeven Revenue";

/// Computes breakeven units and revenue.
///
/// Fields are checked in form order (fixed costs, price, variable cost), so
/// the first bad field is the one reported.
///
/// ## Errors
/// - [`ValidationError::Negative`] for a negative or non-finite cost
/// - [`ValidationError::NotPositive`] for a price `<= 0`
/// - [`ValidationError::NonPositiveMargin`] when price `<=` variable cost
/// - [`ValidationError::ResultOutOfRange`] when a result overflows
///
/// ## Example
/// ```rust
/// use breakeven_core::{calculate_simple_breakeven, SimpleBreakevenInput};
///
/// let result = calculate_simple_breakeven(&SimpleBreakevenInput {
///     fixed_costs: 1000.0,
///     price_per_unit: 50.0,
///     variable_cost_per_unit: 30.0,
/// })
/// .unwrap();
///
/// assert_eq!(result.breakeven_units, 50.0);
/// assert_eq!(result.breakeven_revenue, 2500.0);
/// ```
pub fn calculate_simple_breakeven(
    input: &SimpleBreakevenInput,
) -> ValidationResult<SimpleBreakevenResult> {
    let fixed_costs = require_non_negative(FIXED_COSTS, input.fixed_costs)?;
    let price = require_positive(PRICE_PER_UNIT, input.price_per_unit)?;
    let variable_cost = require_non_negative(VARIABLE_COST_PER_UNIT, input.variable_cost_per_unit)?;

    let contribution_margin = price - variable_cost;
    if contribution_margin <= 0.0 {
        return Err(ValidationError::NonPositiveMargin {
            price_field: PRICE_PER_UNIT.to_string(),
            cost_field: VARIABLE_COST_PER_UNIT.to_string(),
        });
    }

    let breakeven_units =
        require_finite_result(BREAKEVEN_UNITS, fixed_costs / contribution_margin)?;
    let breakeven_revenue = require_finite_result(BREAKEVEN_REVENUE, breakeven_units * price)?;

    Ok(SimpleBreakevenResult {
        breakeven_units,
        breakeven_revenue,
        contribution_margin,
    })
}

impl SimpleBreakevenInput {
    /// Shorthand for [`calculate_simple_breakeven`].
    pub fn calculate(&self) -> ValidationResult<SimpleBreakevenResult> {
        calculate_simple_breakeven(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(fixed_costs: f64, price_per_unit: f64, variable_cost_per_unit: f64) -> SimpleBreakevenInput {
        SimpleBreakevenInput {
            fixed_costs,
            price_per_unit,
            variable_cost_per_unit,
        }
    }

    #[test]
    fn test_reference_example() {
        let result = input(1000.0, 50.0, 30.0).calculate().unwrap();
        assert_eq!(result.contribution_margin, 20.0);
        assert_eq!(result.breakeven_units, 50.0);
        assert_eq!(result.breakeven_revenue, 2500.0);
    }

    #[test]
    fn test_fractional_units_keep_full_precision() {
        // 1000 / 30 = 33.333...; revenue uses the unrounded count
        let result = input(1000.0, 40.0, 10.0).calculate().unwrap();
        assert!((result.breakeven_units - 33.333_333_333).abs() < 1e-6);
        assert!((result.breakeven_revenue - 1333.333_333_333).abs() < 1e-6);

        let rounded = result.rounded();
        assert_eq!(rounded.breakeven_units, 33.33);
        assert_eq!(rounded.breakeven_revenue, 1333.33);
    }

    #[test]
    fn test_zero_fixed_costs_breaks_even_immediately() {
        let result = input(0.0, 10.0, 4.0).calculate().unwrap();
        assert_eq!(result.breakeven_units, 0.0);
        assert_eq!(result.breakeven_revenue, 0.0);
    }

    #[test]
    fn test_negative_fixed_costs_rejected_first() {
        // Price is also invalid, but fixed costs are checked first
        let err = input(-1.0, 0.0, 5.0).calculate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: FIXED_COSTS.to_string()
            }
        );
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let err = input(100.0, 0.0, 0.0).calculate().unwrap_err();
        assert_eq!(err.field(), PRICE_PER_UNIT);
        assert!(matches!(err, ValidationError::NotPositive { .. }));
    }

    #[test]
    fn test_negative_variable_cost_rejected() {
        let err = input(100.0, 10.0, -1.0).calculate().unwrap_err();
        assert_eq!(err.field(), VARIABLE_COST_PER_UNIT);
    }

    #[test]
    fn test_margin_must_be_positive() {
        let err = input(100.0, 30.0, 30.0).calculate().unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveMargin { .. }));

        let err = input(100.0, 20.0, 30.0).calculate().unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveMargin { .. }));
    }

    #[test]
    fn test_nan_inputs_rejected() {
        assert!(input(f64::NAN, 10.0, 1.0).calculate().is_err());
        assert!(input(10.0, f64::NAN, 1.0).calculate().is_err());
        assert!(input(10.0, 10.0, f64::NAN).calculate().is_err());
    }

    #[test]
    fn test_overflowing_results_rejected() {
        // Tiny margin pushes the unit count past f64::MAX
        let err = input(1e308, 1e-10, 0.0).calculate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::ResultOutOfRange {
                field: BREAKEVEN_UNITS.to_string()
            }
        );

        // Units fit, but units × price does not
        let err = input(1e308, 2.0, 1.0).calculate().unwrap_err();
        assert_eq!(err.field(), BREAKEVEN_REVENUE);
    }
}
