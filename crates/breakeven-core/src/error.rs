//! # Error Types
//!
//! The single error kind raised by the breakeven calculators.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  breakeven-core errors (this file)                                     │
//! │  └── ValidationError  - Bad input or no breakeven point exists         │
//! │                                                                         │
//! │  breakeven-cli errors (host app)                                       │
//! │  └── CliError / ApiError - What the terminal or JSON consumer sees     │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → ApiError → stdout/stderr           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Categories
//! - **Non-numeric input**: `NotANumber`
//! - **Out-of-range input**: `Negative`, `NotPositive`, `PercentOutOfRange`
//! - **Domain violations**: `NonPositiveMargin`, `NegativeTotalFixedCosts`,
//!   `VariableCostsTooHigh`, `NonPositiveDenominator`
//! - **Overflow**: `ResultOutOfRange`
//!
//! The `Display` text of every variant is the message shown to the user
//! verbatim. Hosts use [`ValidationError::field`] to decide which input to
//! highlight.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation and domain errors.
///
/// Raised synchronously; the calculation stops at the first failing check and
/// no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Text could not be read as a finite number.
    #[error("Please enter a valid number for {field}.")]
    NotANumber { field: String },

    /// Value must be zero or greater.
    #[error("Please enter a valid non-negative number for {field}.")]
    Negative { field: String },

    /// Value must be strictly greater than zero.
    #[error("Please enter a valid positive number for {field}.")]
    NotPositive { field: String },

    /// A variable-cost percentage is outside `[0, 100]`.
    #[error("Please enter valid percentages (0-100) for all Variable Cost fields.")]
    PercentOutOfRange { field: String, value: f64 },

    /// Price does not exceed variable cost, so each sale loses money.
    ///
    /// ## When This Occurs
    /// ```text
    /// price 30, variable cost 30
    ///      │
    ///      ▼
    /// margin = 0 → no number of sales ever covers fixed costs
    /// ```
    #[error("{price_field} must be greater than {cost_field} to have a positive contribution margin.")]
    NonPositiveMargin {
        price_field: String,
        cost_field: String,
    },

    /// Itemized fixed costs summed to a negative total.
    #[error("Total Fixed Costs cannot be negative.")]
    NegativeTotalFixedCosts { total: f64 },

    /// Variable-cost percentages consume the whole selling price.
    #[error("Total Variable Costs Percentage must be less than 100% of the Selling Price for a breakeven point to exist.")]
    VariableCostsTooHigh { total_percent: f64 },

    /// `guests * (1 - variable%)` is not positive.
    #[error("Cannot calculate breakeven average revenue. Ensure average number of guests is positive and total variable costs are less than 100%.")]
    NonPositiveDenominator { denominator: f64 },

    /// Inputs were valid but a computed figure overflowed `f64`.
    #[error("The values entered are too large to calculate {field}. Please enter smaller amounts.")]
    ResultOutOfRange { field: String },
}

impl ValidationError {
    /// Name of the input the user should correct.
    ///
    /// For margin errors this is the price field, since raising the price is
    /// the usual fix.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::Negative { field }
            | ValidationError::NotPositive { field }
            | ValidationError::PercentOutOfRange { field, .. }
            | ValidationError::ResultOutOfRange { field } => field.as_str(),
            ValidationError::NonPositiveMargin { price_field, .. } => price_field.as_str(),
            ValidationError::NegativeTotalFixedCosts { .. } => "Total Fixed Costs",
            ValidationError::VariableCostsTooHigh { .. } => "Total Variable Costs",
            ValidationError::NonPositiveDenominator { .. } => "Average Number of Guests",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
