//! # Domain Types
//!
//! Input and result types for both calculators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Simple calculator                                                      │
//! │  ┌────────────────────────┐        ┌────────────────────────┐          │
//! │  │ SimpleBreakevenInput   │  ───►  │ SimpleBreakevenResult  │          │
//! │  │  fixed_costs           │        │  breakeven_units       │          │
//! │  │  price_per_unit        │        │  breakeven_revenue     │          │
//! │  │  variable_cost_per_unit│        │  contribution_margin   │          │
//! │  └────────────────────────┘        └────────────────────────┘          │
//! │                                                                         │
//! │  Hospitality calculator                                                 │
//! │  ┌────────────────────────┐        ┌────────────────────────┐          │
//! │  │ DetailedBreakevenInput │  ───►  │ DetailedBreakevenResult│          │
//! │  │  FixedCostItems (8)    │        │  breakeven_point       │          │
//! │  │  VariableCostPercents  │        │  output_kind           │          │
//! │  │  SalesMode, TimePeriod │        │  total / weekly revenue│          │
//! │  └────────────────────────┘        └────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types are transient: built from user input per call and dropped after
//! the result is displayed. They serialize with camelCase names so the same
//! JSON shape works for the CLI and a TypeScript frontend (via `ts-rs`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::rounding::round_to_cents;
use crate::{WEEKS_PER_MONTH, WEEKS_PER_YEAR};

// =============================================================================
// Simple Calculator
// =============================================================================

/// Inputs for the single-product breakeven calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimpleBreakevenInput {
    /// Costs that do not vary with volume. Must be `>= 0`.
    pub fixed_costs: f64,

    /// Selling price of one unit. Must be `> 0`.
    pub price_per_unit: f64,

    /// Variable cost of one unit. Must be `>= 0`.
    pub variable_cost_per_unit: f64,
}

/// Output of the simple calculator, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimpleBreakevenResult {
    /// Units to sell before profit reaches zero.
    pub breakeven_units: f64,

    /// Revenue at the breakeven volume.
    pub breakeven_revenue: f64,

    /// Price minus variable cost per unit.
    pub contribution_margin: f64,
}

impl SimpleBreakevenResult {
    /// Returns a copy with every figure rounded to two decimals.
    pub fn rounded(&self) -> Self {
        SimpleBreakevenResult {
            breakeven_units: round_to_cents(self.breakeven_units),
            breakeven_revenue: round_to_cents(self.breakeven_revenue),
            contribution_margin: round_to_cents(self.contribution_margin),
        }
    }
}

// =============================================================================
// Selectors
// =============================================================================

/// What the single sales figure on the hospitality form means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SalesMode {
    /// The user knows the average spend per guest; solve for guest count.
    #[default]
    PerGuestPrice,

    /// The user knows the expected guest count; solve for spend per guest.
    GuestCount,
}

impl SalesMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesMode::PerGuestPrice => "perGuestPrice",
            SalesMode::GuestCount => "guestCount",
        }
    }
}

impl fmt::Display for SalesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalesMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-guest" | "perguest" | "perguestprice" | "per-guest-price" | "price" => {
                Ok(SalesMode::PerGuestPrice)
            }
            "num-guests" | "numguests" | "guestcount" | "guest-count" | "guests" => {
                Ok(SalesMode::GuestCount)
            }
            other => Err(format!(
                "unknown sales mode '{}' (expected per-guest or num-guests)",
                other
            )),
        }
    }
}

/// Reporting period the cost figures cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum TimePeriod {
    #[default]
    Month,
    Year,
}

impl TimePeriod {
    /// Weeks in the period, used to derive weekly revenue.
    ///
    /// `4.33` and `52` are fixed approximations; changing them changes
    /// every weekly figure the calculators have ever reported.
    #[inline]
    pub const fn weeks(&self) -> f64 {
        match self {
            TimePeriod::Month => WEEKS_PER_MONTH,
            TimePeriod::Year => WEEKS_PER_YEAR,
        }
    }

    /// "month" / "year"
    pub fn noun(&self) -> &'static str {
        match self {
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    /// "monthly" / "annually", as used in field labels.
    pub fn adverb(&self) -> &'static str {
        match self {
            TimePeriod::Month => "monthly",
            TimePeriod::Year => "annually",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" => Ok(TimePeriod::Month),
            "year" | "yearly" | "annual" | "annually" => Ok(TimePeriod::Year),
            other => Err(format!(
                "unknown time period '{}' (expected month or year)",
                other
            )),
        }
    }
}

/// How to read `DetailedBreakevenResult::breakeven_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum OutputKind {
    /// Number of guests needed in the period.
    Guests,

    /// Average revenue each guest must bring in.
    RevenuePerGuest,
}

// =============================================================================
// Hospitality Calculator
// =============================================================================

/// The eight overhead categories of the hospitality form, per period.
///
/// Field order is significant: it is the order of [`FixedCostItems::LABELS`]
/// and of [`FixedCostItems::as_array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FixedCostItems {
    pub min_operational_staff: f64,
    pub manager_payroll: f64,
    pub administration: f64,
    pub marketing: f64,
    pub repairs_maintenance: f64,
    pub rent: f64,
    pub insurance: f64,
    pub utilities: f64,
}

impl FixedCostItems {
    /// User-facing category names, in field order.
    pub const LABELS: [&'static str; 8] = [
        "Min. Operational Staff Costs",
        "Manager Payroll Costs",
        "Administration Costs",
        "Marketing Costs",
        "Repairs & Maintenance Costs",
        "Rent Costs",
        "Insurance Costs",
        "Utilities Costs",
    ];

    pub const fn from_array(items: [f64; 8]) -> Self {
        FixedCostItems {
            min_operational_staff: items[0],
            manager_payroll: items[1],
            administration: items[2],
            marketing: items[3],
            repairs_maintenance: items[4],
            rent: items[5],
            insurance: items[6],
            utilities: items[7],
        }
    }

    pub const fn as_array(&self) -> [f64; 8] {
        [
            self.min_operational_staff,
            self.manager_payroll,
            self.administration,
            self.marketing,
            self.repairs_maintenance,
            self.rent,
            self.insurance,
            self.utilities,
        ]
    }

    /// Pairs each amount with its label.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::LABELS.into_iter().zip(self.as_array())
    }

    /// Unvalidated sum of all eight items.
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Variable costs expressed as percentages of the selling price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VariableCostPercents {
    /// Raw materials.
    pub cost_of_sales: f64,

    /// Cleaning, consumables, card fees.
    pub direct_expenses: f64,

    /// Staff that scale with covers, excluding the fixed minimum crew.
    pub payroll: f64,
}

impl VariableCostPercents {
    pub const LABELS: [&'static str; 3] = [
        "Cost of Sales (Raw Materials)",
        "Direct Expenses (Cleaning, etc.)",
        "Payroll (Other Staff)",
    ];

    pub const fn from_array(percents: [f64; 3]) -> Self {
        VariableCostPercents {
            cost_of_sales: percents[0],
            direct_expenses: percents[1],
            payroll: percents[2],
        }
    }

    pub const fn as_array(&self) -> [f64; 3] {
        [self.cost_of_sales, self.direct_expenses, self.payroll]
    }

    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::LABELS.into_iter().zip(self.as_array())
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Inputs for the hospitality breakeven calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailedBreakevenInput {
    pub fixed_costs: FixedCostItems,

    pub variable_cost_percents: VariableCostPercents,

    pub sales_mode: SalesMode,

    /// Price per guest or guest count, depending on `sales_mode`.
    pub sales_value: f64,

    pub period: TimePeriod,
}

/// Output of the hospitality calculator, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailedBreakevenResult {
    /// Guests needed, or revenue per guest needed; see `output_kind`.
    pub breakeven_point: f64,

    pub output_kind: OutputKind,

    /// Revenue required over the whole period.
    pub total_revenue: f64,

    /// `total_revenue` spread over the weeks of the period.
    pub weekly_revenue: f64,

    pub period: TimePeriod,

    pub total_fixed_costs: f64,

    pub total_variable_cost_percent: f64,
}

impl DetailedBreakevenResult {
    /// Returns a copy with every figure rounded to two decimals.
    pub fn rounded(&self) -> Self {
        DetailedBreakevenResult {
            breakeven_point: round_to_cents(self.breakeven_point),
            total_revenue: round_to_cents(self.total_revenue),
            weekly_revenue: round_to_cents(self.weekly_revenue),
            total_fixed_costs: round_to_cents(self.total_fixed_costs),
            total_variable_cost_percent: round_to_cents(self.total_variable_cost_percent),
            ..*self
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_cost_items_order() {
        let items = FixedCostItems::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(items.rent, 6.0);
        assert_eq!(items.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(items.total(), 36.0);

        let labeled: Vec<_> = items.labeled().collect();
        assert_eq!(labeled[5], ("Rent Costs", 6.0));
    }

    #[test]
    fn test_variable_cost_percents_total() {
        let percents = VariableCostPercents::from_array([20.0, 5.0, 15.0]);
        assert_eq!(percents.total(), 40.0);
        assert_eq!(percents.labeled().count(), 3);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("per-guest".parse::<SalesMode>(), Ok(SalesMode::PerGuestPrice));
        assert_eq!("perGuest".parse::<SalesMode>(), Ok(SalesMode::PerGuestPrice));
        assert_eq!("numGuests".parse::<SalesMode>(), Ok(SalesMode::GuestCount));
        assert_eq!("guest-count".parse::<SalesMode>(), Ok(SalesMode::GuestCount));
        assert!("weekly".parse::<SalesMode>().is_err());

        assert_eq!("Month".parse::<TimePeriod>(), Ok(TimePeriod::Month));
        assert_eq!("annually".parse::<TimePeriod>(), Ok(TimePeriod::Year));
        assert!("week".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn test_period_weeks() {
        assert_eq!(TimePeriod::Month.weeks(), 4.33);
        assert_eq!(TimePeriod::Year.weeks(), 52.0);
        assert_eq!(TimePeriod::Year.adverb(), "annually");
    }

    #[test]
    fn test_serde_shape() {
        let input = DetailedBreakevenInput {
            fixed_costs: FixedCostItems::default(),
            variable_cost_percents: VariableCostPercents::default(),
            sales_mode: SalesMode::GuestCount,
            sales_value: 10.0,
            period: TimePeriod::Year,
        };
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["salesMode"], "guestCount");
        assert_eq!(json["period"], "year");
        assert_eq!(json["fixedCosts"]["repairsMaintenance"], 0.0);

        let back: DetailedBreakevenInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_simple_result_rounded() {
        let result = SimpleBreakevenResult {
            breakeven_units: 33.333_333,
            breakeven_revenue: 1666.666_666,
            contribution_margin: 30.0,
        };
        let rounded = result.rounded();
        assert_eq!(rounded.breakeven_units, 33.33);
        assert_eq!(rounded.breakeven_revenue, 1666.67);
    }
}
