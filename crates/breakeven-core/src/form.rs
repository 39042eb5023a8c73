//! # Form Module
//!
//! Raw, text-valued forms as a host receives them, and their conversion into
//! typed calculator inputs.
//!
//! ## Where Forms Fit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CLI flags / JSON body / HTML inputs                                    │
//! │        │   every value is still a string                                │
//! │        ▼                                                                │
//! │  SimpleBreakevenForm / DetailedBreakevenForm   ← THIS MODULE            │
//! │        │   parse(): text → f64, selectors → enums                       │
//! │        ▼                                                                │
//! │  SimpleBreakevenInput / DetailedBreakevenInput                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  calculate_*_breakeven                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two forms treat blank fields differently. On the simple form every
//! field is required. On the hospitality form a blank line counts as zero,
//! because most venues leave several cost categories empty.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::detailed::{guest_count_label, PRICE_PER_GUEST};
use crate::simple::{FIXED_COSTS, PRICE_PER_UNIT, VARIABLE_COST_PER_UNIT};
use crate::types::{
    DetailedBreakevenInput, DetailedBreakevenResult, FixedCostItems, SalesMode,
    SimpleBreakevenInput, SimpleBreakevenResult, TimePeriod, VariableCostPercents,
};
use crate::validation::{parse_number, parse_number_or_zero, ValidationResult};

// =============================================================================
// Simple Form
// =============================================================================

/// Text fields of the simple calculator form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SimpleBreakevenForm {
    pub fixed_costs: String,
    pub price_per_unit: String,
    pub variable_cost_per_unit: String,
}

impl SimpleBreakevenForm {
    /// Parses every field; blank or non-numeric text is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use breakeven_core::form::SimpleBreakevenForm;
    ///
    /// let form = SimpleBreakevenForm {
    ///     fixed_costs: "1000".into(),
    ///     price_per_unit: "50".into(),
    ///     variable_cost_per_unit: "30".into(),
    /// };
    /// let input = form.parse().unwrap();
    /// assert_eq!(input.price_per_unit, 50.0);
    /// ```
    pub fn parse(&self) -> ValidationResult<SimpleBreakevenInput> {
        Ok(SimpleBreakevenInput {
            fixed_costs: parse_number(FIXED_COSTS, &self.fixed_costs)?,
            price_per_unit: parse_number(PRICE_PER_UNIT, &self.price_per_unit)?,
            variable_cost_per_unit: parse_number(VARIABLE_COST_PER_UNIT, &self.variable_cost_per_unit)?,
        })
    }

    /// Parses and calculates in one step.
    pub fn calculate(&self) -> ValidationResult<SimpleBreakevenResult> {
        self.parse()?.calculate()
    }
}

// =============================================================================
// Hospitality Form
// =============================================================================

/// Text fields and selectors of the hospitality calculator form.
///
/// Both sales fields are kept so switching `sales_mode` back and forth does
/// not lose what the user typed; only the one matching the mode is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DetailedBreakevenForm {
    pub period: TimePeriod,
    pub sales_mode: SalesMode,

    pub min_operational_staff: String,
    pub manager_payroll: String,
    pub administration: String,
    pub marketing: String,
    pub repairs_maintenance: String,
    pub rent: String,
    pub insurance: String,
    pub utilities: String,

    pub cost_of_sales_percent: String,
    pub direct_expenses_percent: String,
    pub payroll_percent: String,

    pub price_per_guest: String,
    pub guest_count: String,
}

impl DetailedBreakevenForm {
    /// Parses the form. Blank numeric fields become zero.
    ///
    /// A blank sales value therefore parses to `0` and is rejected later by
    /// the calculator's positivity check, with the calculator's message.
    pub fn parse(&self) -> ValidationResult<DetailedBreakevenInput> {
        let fixed_text = [
            &self.min_operational_staff,
            &self.manager_payroll,
            &self.administration,
            &self.marketing,
            &self.repairs_maintenance,
            &self.rent,
            &self.insurance,
            &self.utilities,
        ];
        let mut fixed = [0.0; 8];
        for ((slot, label), text) in fixed.iter_mut().zip(FixedCostItems::LABELS).zip(fixed_text) {
            *slot = parse_number_or_zero(label, text)?;
        }

        let percent_text = [
            &self.cost_of_sales_percent,
            &self.direct_expenses_percent,
            &self.payroll_percent,
        ];
        let mut percents = [0.0; 3];
        for ((slot, label), text) in percents
            .iter_mut()
            .zip(VariableCostPercents::LABELS)
            .zip(percent_text)
        {
            *slot = parse_number_or_zero(label, text)?;
        }

        let sales_value = match self.sales_mode {
            SalesMode::PerGuestPrice => parse_number_or_zero(PRICE_PER_GUEST, &self.price_per_guest)?,
            SalesMode::GuestCount => {
                parse_number_or_zero(&guest_count_label(self.period), &self.guest_count)?
            }
        };

        Ok(DetailedBreakevenInput {
            fixed_costs: FixedCostItems::from_array(fixed),
            variable_cost_percents: VariableCostPercents::from_array(percents),
            sales_mode: self.sales_mode,
            sales_value,
            period: self.period,
        })
    }

    /// Parses and calculates in one step.
    pub fn calculate(&self) -> ValidationResult<DetailedBreakevenResult> {
        self.parse()?.calculate()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
