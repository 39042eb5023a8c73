//! # breakeven-core: Pure Breakeven Calculations
//!
//! This crate holds the computational core of the breakeven calculators:
//! input types, validation, and the formulas. It has no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Breakeven Calculator Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host (breakeven-cli, web form, ...)             │   │
//! │  │      flags / JSON ──► Form ──► result text / JSON               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ breakeven-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   form    │  │  simple   │  │ detailed  │  │ rounding  │  │   │
//! │  │   │ text→typed│  │ per unit  │  │hospitality│  │ 2 decimals│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │            ┌───────────┐  ┌───────────┐  ┌───────────┐        │   │
//! │  │            │   types   │  │validation │  │   error   │        │   │
//! │  │            └───────────┘  └───────────┘  └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs, results, and the sales-mode / period selectors
//! - [`simple`] - Per-unit breakeven
//! - [`detailed`] - Hospitality breakeven with itemized costs
//! - [`form`] - Text-valued forms and their parsing
//! - [`validation`] - Field validators and number parsing
//! - [`rounding`] - Two-decimal display rounding
//! - [`error`] - [`ValidationError`]
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; nothing is remembered between calls
//! 2. **Full Precision**: rounding happens only when a result is displayed
//! 3. **Explicit Errors**: every failure is a typed [`ValidationError`], never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use breakeven_core::{calculate_simple_breakeven, rounding::Rounded, SimpleBreakevenInput};
//!
//! let result = calculate_simple_breakeven(&SimpleBreakevenInput {
//!     fixed_costs: 1000.0,
//!     price_per_unit: 50.0,
//!     variable_cost_per_unit: 30.0,
//! })
//! .unwrap();
//!
//! assert_eq!(Rounded(result.breakeven_units).to_string(), "50.00");
//! assert_eq!(Rounded(result.breakeven_revenue).to_string(), "2500.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod detailed;
pub mod error;
pub mod form;
pub mod rounding;
pub mod simple;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use detailed::calculate_detailed_breakeven;
pub use error::ValidationError;
pub use form::{DetailedBreakevenForm, SimpleBreakevenForm};
pub use simple::calculate_simple_breakeven;
pub use types::*;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Weeks per month used to derive weekly revenue.
///
/// An approximation (52 / 12 = 4.333...). Reported weekly figures depend on
/// this exact value, so it is not derived from `WEEKS_PER_YEAR`.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Weeks per year used to derive weekly revenue.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Upper bound of a percentage, and the exclusive bound on summed variable costs.
pub const PERCENT_MAX: f64 = 100.0;

/// Decimal places shown for every displayed figure.
pub const DISPLAY_DECIMALS: usize = 2;
