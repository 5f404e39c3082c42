//! Comparison of computed coefficients against stored truth values.

use std::fmt;

use airframe_config::TruthConfig;
use airframe_core::series::max_abs_difference;
use thiserror::Error;
use tracing::warn;

use crate::case::CaseResult;

#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("truth {quantity} has {truth} samples but the result has {computed}")]
    LengthMismatch {
        quantity: &'static str,
        truth: usize,
        computed: usize,
    },
}

/// Largest deviation of one output quantity from its truth values.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityError {
    pub quantity: &'static str,
    pub max_abs_error: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionReport {
    pub case: String,
    pub tolerance: f64,
    pub errors: Vec<QuantityError>,
}

impl RegressionReport {
    /// True when every quantity is within tolerance. NaN errors fail.
    pub fn passed(&self) -> bool {
        self.errors
            .iter()
            .all(|e| e.max_abs_error.abs() < self.tolerance)
    }
}

impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (tolerance {:e})", self.case, self.tolerance)?;
        for e in &self.errors {
            writeln!(f, "  {:<18} max |error| = {:.4e}", e.quantity, e.max_abs_error)?;
        }
        Ok(())
    }
}

/// Compare a case result against its truth block.
pub fn check(result: &CaseResult, truth: &TruthConfig) -> Result<RegressionReport, RegressionError> {
    let errors = vec![
        quantity_error(
            "lift_coefficient",
            &truth.lift_coefficient,
            &result.aggregate.lift_coefficient,
        )?,
        quantity_error(
            "drag_coefficient",
            &truth.drag_coefficient,
            &result.aggregate.drag_coefficient,
        )?,
    ];

    let report = RegressionReport {
        case: result.name.clone(),
        tolerance: truth.tolerance,
        errors,
    };
    for e in &report.errors {
        if !(e.max_abs_error.abs() < report.tolerance) {
            warn!(
                case = %report.case,
                quantity = e.quantity,
                error = e.max_abs_error,
                tolerance = report.tolerance,
                "result deviates from truth"
            );
        }
    }
    Ok(report)
}

fn quantity_error(
    quantity: &'static str,
    truth: &[f64],
    computed: &[f64],
) -> Result<QuantityError, RegressionError> {
    let max_abs_error =
        max_abs_difference(truth, computed).ok_or(RegressionError::LengthMismatch {
            quantity,
            truth: truth.len(),
            computed: computed.len(),
        })?;
    Ok(QuantityError {
        quantity,
        max_abs_error,
    })
}
