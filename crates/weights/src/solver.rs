//! Direct-substitution MTOW solver.
//!
//! Each step evaluates the fractions at the current guess and recomputes
//! `W0 = W_payload / (1 - We/W0 - Wf/W0)`. The loop stops when the change drops
//! below the tolerance, when the fractions sum to one or more (hard failure), or when
//! the iteration cap is reached (soft failure, reported through `converged`).

use serde::Serialize;
use sizing_core::mass::{kg_to_newtons, newtons_to_kg};
use tracing::debug;

use crate::fractions::{MissionProfile, WeightFractionModel};
use crate::{WeightError, require};

/// Iteration policy for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverSettings {
    pub initial_guess_kg: f64,
    pub tolerance_kg: f64,
    pub max_iterations: usize,
}

impl SolverSettings {
    pub const DEFAULT_TOLERANCE_KG: f64 = 1.0;
    pub const DEFAULT_MAX_ITERATIONS: usize = 50;

    pub fn new(initial_guess_kg: f64, tolerance_kg: f64, max_iterations: usize) -> Self {
        Self {
            initial_guess_kg,
            tolerance_kg,
            max_iterations,
        }
    }

    /// Settings with the 1 kg / 50 iteration policy.
    pub fn with_default_policy(initial_guess_kg: f64) -> Self {
        Self::new(
            initial_guess_kg,
            Self::DEFAULT_TOLERANCE_KG,
            Self::DEFAULT_MAX_ITERATIONS,
        )
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        require(
            "initial_guess_kg",
            self.initial_guess_kg,
            "positive",
            self.initial_guess_kg > 0.0,
        )?;
        require(
            "tolerance_kg",
            self.tolerance_kg,
            "non-negative",
            self.tolerance_kg >= 0.0,
        )?;
        require(
            "max_iterations",
            self.max_iterations as f64,
            "at least 1",
            self.max_iterations >= 1,
        )
    }
}

/// One row of the iteration: the guess, the fractions it produced and the update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceState {
    /// Zero-based iteration index.
    pub iteration: usize,
    pub mtow_guess_kg: f64,
    pub empty_weight_fraction: f64,
    pub fuel_fraction: f64,
    pub mtow_computed_kg: f64,
    /// `mtow_guess_kg - mtow_computed_kg`.
    pub residual_kg: f64,
}

impl ConvergenceState {
    pub fn within(&self, tolerance_kg: f64) -> bool {
        self.residual_kg.abs() < tolerance_kg
    }

    fn solution(&self, iterations: usize, converged: bool) -> WeightSolution {
        let mtow = self.mtow_computed_kg;
        WeightSolution {
            mtow_kg: mtow,
            oew_kg: mtow * self.empty_weight_fraction,
            fuel_kg: mtow * self.fuel_fraction,
            iterations,
            converged,
            residual_kg: self.residual_kg,
        }
    }
}

/// Result of a solve. `converged == false` means the cap was hit and the figures are
/// the last estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSolution {
    pub mtow_kg: f64,
    pub oew_kg: f64,
    pub fuel_kg: f64,
    pub iterations: usize,
    pub converged: bool,
    pub residual_kg: f64,
}

/// Solution together with every intermediate state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub solution: WeightSolution,
    pub history: Vec<ConvergenceState>,
}

/// Evaluate a single substitution step from `guess_kg`.
///
/// Fails with [`WeightError::InfeasibleWeightBalance`] when `1 - We/W0 - Wf/W0 <= 0`.
pub fn iterate_once(
    model: &WeightFractionModel,
    mission: &MissionProfile,
    iteration: usize,
    guess_kg: f64,
) -> Result<ConvergenceState, WeightError> {
    let fractions = model.evaluate(guess_kg, mission)?;
    let denominator = fractions.payload_margin();
    if denominator <= 0.0 {
        return Err(WeightError::InfeasibleWeightBalance { denominator });
    }

    let computed_kg = newtons_to_kg(kg_to_newtons(mission.payload_kg) / denominator);

    Ok(ConvergenceState {
        iteration,
        mtow_guess_kg: guess_kg,
        empty_weight_fraction: fractions.empty_weight_fraction,
        fuel_fraction: fractions.fuel_fraction,
        mtow_computed_kg: computed_kg,
        residual_kg: guess_kg - computed_kg,
    })
}

/// Close the weight balance for `mission`.
pub fn solve(
    model: &WeightFractionModel,
    mission: &MissionProfile,
    settings: &SolverSettings,
) -> Result<WeightSolution, WeightError> {
    run(model, mission, settings, |_| {})
}

/// Same as [`solve`] but keeps every intermediate state.
pub fn solve_with_history(
    model: &WeightFractionModel,
    mission: &MissionProfile,
    settings: &SolverSettings,
) -> Result<SolveReport, WeightError> {
    let mut history = Vec::new();
    let solution = run(model, mission, settings, |state| history.push(*state))?;
    Ok(SolveReport { solution, history })
}

fn run<F>(
    model: &WeightFractionModel,
    mission: &MissionProfile,
    settings: &SolverSettings,
    mut observe: F,
) -> Result<WeightSolution, WeightError>
where
    F: FnMut(&ConvergenceState),
{
    mission.validate()?;
    // a weightless payload collapses W0 to zero on the first step
    require(
        "payload_kg",
        mission.payload_kg,
        "positive to size an aircraft",
        mission.payload_kg > 0.0,
    )?;
    settings.validate()?;

    let mut guess = settings.initial_guess_kg;
    let mut last: Option<ConvergenceState> = None;

    for iteration in 0..settings.max_iterations {
        let state = iterate_once(model, mission, iteration, guess)?;
        debug!(
            iteration,
            guess_kg = state.mtow_guess_kg,
            empty_fraction = state.empty_weight_fraction,
            fuel_fraction = state.fuel_fraction,
            computed_kg = state.mtow_computed_kg,
            residual_kg = state.residual_kg,
            "weight iteration"
        );
        observe(&state);

        if state.within(settings.tolerance_kg) {
            return Ok(state.solution(iteration + 1, true));
        }
        guess = state.mtow_computed_kg;
        last = Some(state);
    }

    // validate() guarantees at least one pass through the loop
    let last = last.ok_or(WeightError::InvalidInput {
        field: "max_iterations",
        expected: "at least 1",
        value: settings.max_iterations as f64,
    })?;
    Ok(last.solution(settings.max_iterations, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(range_km: f64) -> MissionProfile {
        MissionProfile::new(2_812.0, range_km, 250.56, 12_497.0, 16.0, 2.0e-5).unwrap()
    }

    #[test]
    fn single_step_reports_guess_and_update() {
        let model = WeightFractionModel::default();
        let state = iterate_once(&model, &mission(7_200.0), 0, 40_000.0).unwrap();
        assert_eq!(state.iteration, 0);
        assert_eq!(state.mtow_guess_kg, 40_000.0);
        assert!((state.mtow_computed_kg - 14_696.890_312_348_52).abs() < 1e-6);
        assert!((state.residual_kg - (40_000.0 - state.mtow_computed_kg)).abs() < 1e-9);
    }

    #[test]
    fn single_step_flags_infeasible_balance() {
        let model = WeightFractionModel::default();
        let err = iterate_once(&model, &mission(30_000.0), 0, 40_000.0).unwrap_err();
        match err {
            WeightError::InfeasibleWeightBalance { denominator } => assert!(denominator <= 0.0),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn history_rows_chain_guesses() {
        let model = WeightFractionModel::default();
        let settings = SolverSettings::with_default_policy(40_000.0);
        let report = solve_with_history(&model, &mission(7_200.0), &settings).unwrap();
        assert_eq!(report.history.len(), report.solution.iterations);
        for pair in report.history.windows(2) {
            assert_eq!(pair[1].mtow_guess_kg, pair[0].mtow_computed_kg);
        }
        let last = report.history.last().unwrap();
        assert_eq!(last.mtow_computed_kg, report.solution.mtow_kg);
    }

    #[test]
    fn zero_payload_is_reported_against_the_payload() {
        let model = WeightFractionModel::default();
        let mission = MissionProfile::new(0.0, 7_200.0, 250.56, 12_497.0, 16.0, 2.0e-5).unwrap();
        let err = solve(&model, &mission, &SolverSettings::with_default_policy(40_000.0))
            .unwrap_err();
        assert_eq!(
            err,
            WeightError::InvalidInput {
                field: "payload_kg",
                expected: "positive to size an aircraft",
                value: 0.0,
            }
        );
        assert!(err.to_string().contains("payload_kg"));
    }

    #[test]
    fn settings_sign_checks() {
        assert!(SolverSettings::new(0.0, 1.0, 10).validate().is_err());
        assert!(SolverSettings::new(1.0, -1.0, 10).validate().is_err());
        assert!(SolverSettings::new(1.0, 1.0, 0).validate().is_err());
        assert!(SolverSettings::new(1.0, 0.0, 1).validate().is_ok());
    }
}
