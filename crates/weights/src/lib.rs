//! Weight-fraction model and iterative MTOW convergence.
//!
//! The empty-weight fraction follows an empirical power law in take-off weight and
//! the fuel fraction multiplies per-segment retained-weight ratios, with the cruise
//! segment taken from the Breguet relation. [`solver::solve`] closes the weight
//! balance `W0 = W_payload / (1 - We/W0 - Wf/W0)` by direct substitution.

pub mod fractions;
pub mod solver;

pub use fractions::{
    EmptyWeightRegression, MissionProfile, SegmentFractions, WeightFractionModel,
    WeightFractionResult,
};
pub use solver::{
    ConvergenceState, SolveReport, SolverSettings, WeightSolution, iterate_once, solve,
    solve_with_history,
};

use thiserror::Error;

/// Failures raised by the weight model and solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("empty-weight regression needs a positive take-off weight, got {weight_n} N")]
    NonPositiveWeight { weight_n: f64 },
    #[error("weight fractions leave no room for payload (1 - We/W0 - Wf/W0 = {denominator:.5})")]
    InfeasibleWeightBalance { denominator: f64 },
    #[error("`{field}` must be {expected}, got {value}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

pub(crate) fn require(
    field: &'static str,
    value: f64,
    expected: &'static str,
    ok: bool,
) -> Result<(), WeightError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(WeightError::InvalidInput {
            field,
            expected,
            value,
        })
    }
}
