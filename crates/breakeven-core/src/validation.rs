//! # Validation Module
//!
//! Field validators shared by both calculators and the form parsers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (CLI flags / JSON)                                      │
//! │  └── Text → number via parse_number / parse_number_or_zero             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field rules (THIS MODULE)                                    │
//! │  ├── require_non_negative  (costs)                                     │
//! │  ├── require_positive      (prices, guest counts)                      │
//! │  └── require_percent       (variable-cost percentages)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain rules (simple.rs / detailed.rs)                       │
//! │  └── margin > 0, total percent < 100, denominator > 0                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator returns the value it checked so calls can be chained with
//! `?` directly into a `let`.
//!
//! ## Usage
//! ```rust
//! use breakeven_core::validation::{parse_number, require_positive};
//!
//! let price = parse_number("Selling Price Per Unit", " 49.99 ").unwrap();
//! assert_eq!(require_positive("Selling Price Per Unit", price).unwrap(), 49.99);
//! ```

use crate::error::ValidationError;
use crate::PERCENT_MAX;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Rejects NaN and infinities.
pub fn require_finite(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Rejects a computed figure that overflowed.
///
/// Applied to calculator outputs, where every input already passed its own
/// check, so the failure is about magnitude rather than bad text.
pub fn require_finite_result(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::ResultOutOfRange {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a cost: finite and `>= 0`.
///
/// ## Example
/// ```rust
/// use breakeven_core::validation::require_non_negative;
///
/// assert!(require_non_negative("Fixed Costs", 0.0).is_ok());
/// assert!(require_non_negative("Fixed Costs", -1.0).is_err());
/// assert!(require_non_negative("Fixed Costs", f64::NAN).is_err());
/// ```
pub fn require_non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    // NaN fails both comparisons, so it lands here too
    if !(value.is_finite() && value >= 0.0) {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a price or count: finite and `> 0`.
pub fn require_positive(field: &str, value: f64) -> ValidationResult<f64> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a percentage in the inclusive range `[0, 100]`.
///
/// ## Example
/// ```rust
/// use breakeven_core::validation::require_percent;
///
/// assert!(require_percent("Payroll", 0.0).is_ok());
/// assert!(require_percent("Payroll", 100.0).is_ok());
/// assert!(require_percent("Payroll", 100.5).is_err());
/// ```
pub fn require_percent(field: &str, value: f64) -> ValidationResult<f64> {
    if !(value.is_finite() && (0.0..=PERCENT_MAX).contains(&value)) {
        return Err(ValidationError::PercentOutOfRange {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses user-entered text into a finite number.
///
/// Surrounding whitespace is ignored. Empty text, trailing garbage
/// (`"12abc"`), and the special spellings `inf` / `NaN` are all rejected.
pub fn parse_number(field: &str, text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    let value: f64 = text.parse().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
    })?;

    require_finite(field, value)
}

/// Like [`parse_number`], but blank text counts as zero.
///
/// The hospitality form leaves most cost lines empty; an empty line means
/// "no cost in this category".
pub fn parse_number_or_zero(field: &str, text: &str) -> ValidationResult<f64> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }

    parse_number(field, text)
}

// =============================================================================
// Unit Tests
// =============================================================================
