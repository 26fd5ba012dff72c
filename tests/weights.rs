use aircraft_sizing::weights::{
    MissionProfile, SolverSettings, WeightError, WeightFractionModel, iterate_once, solve,
    solve_with_history,
};
use proptest::prelude::*;

fn mission(payload_kg: f64, range_km: f64) -> MissionProfile {
    MissionProfile::new(payload_kg, range_km, 250.56, 12_497.0, 16.0, 2.0e-5).expect("mission")
}

fn tight() -> SolverSettings {
    SolverSettings::new(40_000.0, 1.0e-6, 500)
}

#[test]
fn reference_mission_converges_in_eight_iterations() {
    let report = solve_with_history(
        &WeightFractionModel::default(),
        &mission(2_812.0, 7_200.0),
        &SolverSettings::with_default_policy(40_000.0),
    )
    .expect("solve");
    let solution = report.solution;
    assert!(solution.converged);
    assert_eq!(solution.iterations, 8);
    assert!((solution.mtow_kg - 17_180.326_441_867_466).abs() < 1e-6);
    assert!(solution.residual_kg.abs() < 1.0);
    assert!((solution.oew_kg + solution.fuel_kg + 2_812.0 - solution.mtow_kg).abs() < 1.0);

    // each guess is the previous computed value
    for pair in report.history.windows(2) {
        assert_eq!(pair[1].mtow_guess_kg, pair[0].mtow_computed_kg);
        assert_eq!(pair[1].iteration, pair[0].iteration + 1);
    }
}

#[test]
fn solving_twice_gives_identical_results() {
    let model = WeightFractionModel::default();
    let mission = mission(2_812.0, 7_200.0);
    let settings = SolverSettings::with_default_policy(40_000.0);
    assert_eq!(
        solve_with_history(&model, &mission, &settings).expect("first"),
        solve_with_history(&model, &mission, &settings).expect("second")
    );
}

#[test]
fn restarting_from_the_solution_converges_immediately() {
    let model = WeightFractionModel::default();
    let mission = mission(2_812.0, 7_200.0);
    let first = solve(&model, &mission, &tight()).expect("solve");
    let again = solve(
        &model,
        &mission,
        &SolverSettings::new(first.mtow_kg, 1.0e-6, 500),
    )
    .expect("restart");
    assert_eq!(again.iterations, 1);
    assert!((again.mtow_kg - first.mtow_kg).abs() < 1.0e-6);
}

#[test]
fn iteration_cap_returns_last_estimate_unconverged() {
    let solution = solve(
        &WeightFractionModel::default(),
        &mission(2_812.0, 7_200.0),
        &SolverSettings::new(40_000.0, 0.0, 1),
    )
    .expect("solve");
    assert!(!solution.converged);
    assert_eq!(solution.iterations, 1);
    assert!((solution.mtow_kg - 14_696.890_312_348_52).abs() < 1e-6);
}

#[test]
fn unreachable_range_is_infeasible() {
    let result = solve(
        &WeightFractionModel::default(),
        &mission(2_812.0, 30_000.0),
        &SolverSettings::with_default_policy(40_000.0),
    );
    assert!(matches!(
        result,
        Err(WeightError::InfeasibleWeightBalance { denominator }) if denominator <= 0.0
    ));
}

#[test]
fn negative_payload_is_rejected() {
    assert!(matches!(
        MissionProfile::new(-1.0, 7_200.0, 250.56, 12_497.0, 16.0, 2.0e-5),
        Err(WeightError::InvalidInput {
            field: "payload_kg",
            ..
        })
    ));
}

#[test]
fn zero_payload_is_rejected_with_the_payload_named() {
    let result = solve(
        &WeightFractionModel::default(),
        &mission(0.0, 7_200.0),
        &SolverSettings::with_default_policy(40_000.0),
    );
    assert!(matches!(
        result,
        Err(WeightError::InvalidInput {
            field: "payload_kg",
            ..
        })
    ));
}

proptest! {
    /// A converged MTOW is a fixed point of the update to within the tolerance.
    #[test]
    fn converged_mtow_is_a_fixed_point(
        payload_kg in 500.0f64..5_000.0,
        range_km in 1_000.0f64..9_000.0,
    ) {
        let model = WeightFractionModel::default();
        let mission = mission(payload_kg, range_km);
        let solution = solve(&model, &mission, &SolverSettings::with_default_policy(40_000.0))
            .expect("solve");
        prop_assert!(solution.converged);
        let check = iterate_once(&model, &mission, 0, solution.mtow_kg).expect("step");
        prop_assert!(check.residual_kg.abs() < 1.0);
    }

    /// Flying further never makes the aircraft lighter.
    #[test]
    fn mtow_grows_with_range(
        payload_kg in 500.0f64..5_000.0,
        range_km in 1_000.0f64..8_000.0,
        extra_km in 100.0f64..1_000.0,
    ) {
        let model = WeightFractionModel::default();
        let short = solve(&model, &mission(payload_kg, range_km), &tight()).expect("short");
        let long = solve(&model, &mission(payload_kg, range_km + extra_km), &tight())
            .expect("long");
        prop_assert!(long.mtow_kg > short.mtow_kg);
    }

    /// Carrying more payload never makes the aircraft lighter.
    #[test]
    fn mtow_grows_with_payload(
        payload_kg in 500.0f64..5_000.0,
        extra_kg in 50.0f64..1_000.0,
    ) {
        let model = WeightFractionModel::default();
        let light = solve(&model, &mission(payload_kg, 7_200.0), &tight()).expect("light");
        let heavy = solve(&model, &mission(payload_kg + extra_kg, 7_200.0), &tight())
            .expect("heavy");
        prop_assert!(heavy.mtow_kg > light.mtow_kg);
    }
}
