//! # Rounding Module
//!
//! Display rounding for calculator results.
//!
//! ## Full Precision Inside, Two Decimals Outside
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fixed 10000, margin 60                                                 │
//! │                                                                         │
//! │  breakeven = 166.666666...   ← carried at full f64 precision           │
//! │  revenue   = 16666.6666...   ← computed from the UNROUNDED breakeven   │
//! │  weekly    = 3849.1147...                                              │
//! │                                                                         │
//! │  Display:  166.67 / 16666.67 / 3849.11   ← rounded only here           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding intermediate values would compound error, so calculators never
//! call into this module. Only `rounded()` on the result types and hosts do.

use std::fmt;

use crate::DISPLAY_DECIMALS;

/// From this magnitude up an `f64` no longer resolves cents exactly, and scaling
/// by 100 would overflow near `f64::MAX`.
pub const EXACT_CENTS_LIMIT: f64 = 1e15;

/// Rounds to two decimal places, half away from zero.
///
/// Non-finite values pass through unchanged, as do magnitudes of
/// [`EXACT_CENTS_LIMIT`] and above.
///
/// ## Example
/// ```rust
/// use breakeven_core::rounding::round_to_cents;
///
/// assert_eq!(round_to_cents(166.666_666), 166.67);
/// assert_eq!(round_to_cents(2.5), 2.5);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= EXACT_CENTS_LIMIT {
        return value;
    }

    let rounded = (value * 100.0).round() / 100.0;

    // Collapse -0.0 so it never displays as "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Display wrapper that always prints exactly two decimals.
///
/// ## Example
/// ```rust
/// use breakeven_core::rounding::Rounded;
///
/// assert_eq!(Rounded(50.0).to_string(), "50.00");
/// assert_eq!(Rounded(166.666_666).to_string(), "166.67");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded(pub f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*}",
            DISPLAY_DECIMALS,
            round_to_cents(self.0)
        )
    }
}

/// Formats a monetary value with a currency symbol, sign first.
///
/// ## Example
/// ```rust
/// use breakeven_core::rounding::format_currency;
///
/// assert_eq!(format_currency(2500.0, "$"), "$2500.00");
/// assert_eq!(format_currency(-5.5, "€"), "-€5.50");
/// ```
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = round_to_cents(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, Rounded(rounded.abs()))
}

// =============================================================================
// Unit Tests
// =============================================================================
