//! Sizing pipeline that chains the weight iteration, field lengths and payload-range.
//!
//! The converged MTOW feeds the takeoff estimate, a fraction of it (or an explicit value)
//! feeds the landing estimate, and the converged OEW/MTOW anchor the payload-range
//! envelope unless the configuration overrides them.

use serde::Serialize;
use sizing_config::AircraftConfig;
use sizing_field::{
    FieldError, LandingPerformance, TakeoffPerformance, estimate_landing, estimate_takeoff,
};
use sizing_payload_range::{PayloadRangeDiagram, PayloadRangeError, compute_payload_range};
use sizing_weights::{SolveReport, WeightError, solve_with_history};
use tracing::{info, warn};

use crate::facade::convert;

/// Top-level pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("weight sizing failed: {0}")]
    Weights(#[from] WeightError),
    #[error("field performance failed: {0}")]
    Field(#[from] FieldError),
    #[error("payload-range analysis failed: {0}")]
    PayloadRange(#[from] PayloadRangeError),
}

/// Headline figures of a completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub aircraft_name: String,
    pub mtow_kg: f64,
    pub oew_kg: f64,
    pub mission_fuel_kg: f64,
    pub max_payload_kg: f64,
    pub range_at_max_payload_km: f64,
    pub max_range_km: f64,
    pub takeoff_distance_m: f64,
    pub landing_distance_m: f64,
    pub payload_fraction: f64,
    pub oew_fraction: f64,
    pub fuel_fraction: f64,
    pub weights_converged: bool,
}

/// Everything produced by [`run_analysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: AnalysisSummary,
    pub weights: SolveReport,
    pub takeoff: TakeoffPerformance,
    pub landing_weight_kg: f64,
    pub landing: LandingPerformance,
    pub payload_range: PayloadRangeDiagram,
}

/// Run the full sizing pipeline for one aircraft.
pub fn run_analysis(config: &AircraftConfig) -> Result<AnalysisReport, AnalysisError> {
    info!(aircraft = %config.aircraft_name, "starting sizing analysis");

    let mission = convert::mission(&config.weights)?;
    let model = convert::fraction_model(&config.weights);
    let settings = convert::solver_settings(&config.weights);
    let weights = solve_with_history(&model, &mission, &settings)?;
    let solution = weights.solution;
    if solution.converged {
        info!(
            mtow_kg = solution.mtow_kg,
            oew_kg = solution.oew_kg,
            iterations = solution.iterations,
            "weight iteration converged"
        );
    } else {
        warn!(
            residual_kg = solution.residual_kg,
            iterations = solution.iterations,
            "weight iteration hit the iteration cap; using last estimate"
        );
    }

    let (takeoff_inputs, takeoff_aero) = convert::takeoff(&config.runway, solution.mtow_kg);
    let takeoff = estimate_takeoff(&takeoff_inputs, &takeoff_aero)?;
    if takeoff.performance_infeasible {
        warn!(
            acceleration_m_s2 = takeoff.average_acceleration_m_s2,
            "takeoff run does not accelerate"
        );
    }
    if takeoff.climb_infeasible {
        warn!("no climb gradient after liftoff");
    }

    let landing_weight_kg = convert::landing_weight(&config.runway, solution.mtow_kg);
    let (landing_inputs, landing_aero) = convert::landing(&config.runway, landing_weight_kg);
    let landing = estimate_landing(&landing_inputs, &landing_aero)?;
    if landing.performance_infeasible {
        warn!(
            deceleration_m_s2 = landing.average_deceleration_m_s2,
            "landing roll does not decelerate"
        );
    }

    let (pr_inputs, cruise) =
        convert::payload_range(&config.payload_range, solution.oew_kg, solution.mtow_kg);
    let payload_range = compute_payload_range(&pr_inputs, &cruise)?;

    let mtow = solution.mtow_kg;
    let summary = AnalysisSummary {
        aircraft_name: config.aircraft_name.clone(),
        mtow_kg: mtow,
        oew_kg: solution.oew_kg,
        mission_fuel_kg: solution.fuel_kg,
        max_payload_kg: pr_inputs.max_payload_kg,
        range_at_max_payload_km: payload_range.b.range_km,
        max_range_km: payload_range.d.range_km,
        takeoff_distance_m: takeoff.total_m,
        landing_distance_m: landing.total_m,
        payload_fraction: config.weights.payload_kg / mtow,
        oew_fraction: solution.oew_kg / mtow,
        fuel_fraction: solution.fuel_kg / mtow,
        weights_converged: solution.converged,
    };
    info!(
        takeoff_m = summary.takeoff_distance_m,
        landing_m = summary.landing_distance_m,
        max_range_km = summary.max_range_km,
        "sizing analysis complete"
    );

    Ok(AnalysisReport {
        summary,
        weights,
        takeoff,
        landing_weight_kg,
        landing,
        payload_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_aircraft_pipeline() {
        let report = run_analysis(&AircraftConfig::default()).unwrap();
        let summary = &report.summary;
        assert!(summary.weights_converged);
        assert_eq!(report.weights.solution.iterations, 8);
        assert_eq!(report.weights.history.len(), 8);
        assert!((summary.mtow_kg - 17_180.326_441_867_466).abs() < 1e-6);
        assert!((summary.oew_kg - 8_271.887_705_756_806).abs() < 1e-6);
        assert!((summary.mission_fuel_kg - 6_096.438_736_110_661).abs() < 1e-6);
        assert!((summary.takeoff_distance_m - 190.000_394_157_263_34).abs() < 1e-6);
        assert!((summary.landing_distance_m - 295.635_986_783_325_05).abs() < 1e-6);
        assert!((report.landing_weight_kg - summary.mtow_kg * 0.65).abs() < 1e-9);
        assert!((summary.range_at_max_payload_km - 3_833.334_683_961_937_6).abs() < 1e-6);
        assert!((summary.max_range_km - 5_804.389_032_766_005).abs() < 1e-6);
        let fractions = summary.payload_fraction + summary.oew_fraction + summary.fuel_fraction;
        assert!((fractions - 1.0).abs() < 1e-9);
    }

    #[test]
    fn infeasible_mission_stops_the_pipeline() {
        let mut config = AircraftConfig::default();
        config.weights.range_km = 30_000.0;
        assert!(matches!(
            run_analysis(&config),
            Err(AnalysisError::Weights(
                WeightError::InfeasibleWeightBalance { .. }
            ))
        ));
    }

    #[test]
    fn iteration_cap_still_produces_a_report() {
        let mut config = AircraftConfig::default();
        config.weights.max_iterations = 1;
        config.weights.tolerance_kg = 0.0;
        let report = run_analysis(&config).unwrap();
        assert!(!report.summary.weights_converged);
        assert!((report.summary.mtow_kg - 14_696.890_312_348_52).abs() < 1e-6);
    }

    #[test]
    fn overrides_anchor_the_envelope() {
        let mut config = AircraftConfig::default();
        config.payload_range.oew_kg = Some(22_069.24);
        config.payload_range.mtow_kg = Some(41_557.66);
        let report = run_analysis(&config).unwrap();
        assert!((report.payload_range.b.range_km - 8_816.179_962_649_425).abs() < 1e-6);
        assert!((report.payload_range.d.range_km - 10_208.659_373_341_03).abs() < 1e-6);
    }

    #[test]
    fn bad_runway_geometry_is_reported_as_field_error() {
        let mut config = AircraftConfig::default();
        config.runway.wing_area_m2 = 0.0;
        assert!(matches!(
            run_analysis(&config),
            Err(AnalysisError::Field(_))
        ));
    }
}
