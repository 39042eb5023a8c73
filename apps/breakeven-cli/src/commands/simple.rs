//! # Simple Command
//!
//! `breakeven simple`: units and revenue for a single product.

use tracing::{debug, info, warn};

use breakeven_core::{SimpleBreakevenForm, SimpleBreakevenResult};

use crate::error::CliError;

/// Parses the form and computes the breakeven point.
pub fn calculate(form: &SimpleBreakevenForm) -> Result<SimpleBreakevenResult, CliError> {
    debug!(?form, "simple command");

    match form.calculate() {
        Ok(result) => {
            info!(
                units = result.breakeven_units,
                revenue = result.breakeven_revenue,
                margin = result.contribution_margin,
                "Simple breakeven computed"
            );
            Ok(result)
        }
        Err(error) => {
            warn!(field = error.field(), %error, "Simple breakeven rejected");
            Err(error.into())
        }
    }
}
