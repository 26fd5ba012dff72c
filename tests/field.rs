use aircraft_sizing::field::{
    LandingAeroConfig, LandingInputs, TakeoffAeroConfig, TakeoffInputs, estimate_landing,
    estimate_takeoff, stall_speed,
};
use proptest::prelude::*;

fn takeoff_inputs(weight_kg: f64) -> TakeoffInputs {
    TakeoffInputs {
        weight_kg,
        wing_area_m2: 113.7,
        static_thrust_n: 136_880.0,
        cl_max: 2.1,
    }
}

fn landing_inputs(weight_kg: f64) -> LandingInputs {
    LandingInputs {
        weight_kg,
        wing_area_m2: 113.7,
        cl_max: 2.6,
    }
}

#[test]
fn reference_takeoff_distance() {
    let perf = estimate_takeoff(
        &takeoff_inputs(17_180.326_441_867_466),
        &TakeoffAeroConfig::default(),
    )
    .expect("takeoff");
    assert!((perf.stall_speed_m_s - 33.947_459_841_889_774).abs() < 1e-9);
    assert!((perf.total_m - 190.000_394_157_263_34).abs() < 1e-6);
    assert!(!perf.performance_infeasible && !perf.climb_infeasible);
}

#[test]
fn takeoff_without_thrust_is_flagged_not_failed() {
    let inputs = TakeoffInputs {
        static_thrust_n: 0.0,
        ..takeoff_inputs(17_180.0)
    };
    let perf = estimate_takeoff(&inputs, &TakeoffAeroConfig::default()).expect("takeoff");
    assert!(perf.performance_infeasible);
    assert!(perf.total_m.is_infinite());
}

#[test]
fn landing_stall_speed_uses_landing_lift_coefficient() {
    let weight_kg = 11_167.0;
    let perf = estimate_landing(&landing_inputs(weight_kg), &LandingAeroConfig::default())
        .expect("landing");
    let expected = stall_speed(weight_kg * 9.81, 1.225, 113.7, 2.6).expect("stall");
    assert_eq!(perf.stall_speed_m_s, expected);
    assert!((perf.approach_speed_m_s - 1.3 * expected).abs() < 1e-12);
}

proptest! {
    /// The takeoff total is exactly the sum of its three segments.
    #[test]
    fn takeoff_total_is_sum_of_segments(weight_kg in 5_000.0f64..60_000.0) {
        let perf = estimate_takeoff(&takeoff_inputs(weight_kg), &TakeoffAeroConfig::default())
            .expect("takeoff");
        prop_assert!(!perf.performance_infeasible);
        prop_assert_eq!(perf.total_m, perf.ground_run_m + perf.rotation_m + perf.airborne_m);
    }

    /// The landing total is exactly the sum of its three segments.
    #[test]
    fn landing_total_is_sum_of_segments(weight_kg in 5_000.0f64..60_000.0) {
        let perf = estimate_landing(&landing_inputs(weight_kg), &LandingAeroConfig::default())
            .expect("landing");
        prop_assert!(!perf.performance_infeasible);
        prop_assert_eq!(perf.total_m, perf.approach_m + perf.flare_m + perf.ground_roll_m);
    }

    /// Heavier aircraft need more runway.
    #[test]
    fn takeoff_distance_grows_with_weight(
        weight_kg in 8_000.0f64..40_000.0,
        extra_kg in 500.0f64..5_000.0,
    ) {
        let config = TakeoffAeroConfig::default();
        let light = estimate_takeoff(&takeoff_inputs(weight_kg), &config).expect("light");
        let heavy = estimate_takeoff(&takeoff_inputs(weight_kg + extra_kg), &config)
            .expect("heavy");
        prop_assert!(heavy.ground_run_m > light.ground_run_m);
    }
}
