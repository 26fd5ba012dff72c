//! Re-exported APIs for consumers of the analysis crate.

pub use crate::pipeline::{AnalysisError, AnalysisReport, AnalysisSummary, run_analysis};
pub use sizing_field::{LandingPerformance, TakeoffPerformance};
pub use sizing_payload_range::{PayloadRangeDiagram, PayloadRangePoint, PointLabel};
pub use sizing_weights::{ConvergenceState, WeightSolution};

/// Conversions from configuration records into the runtime inputs of each stage.
pub mod convert {
    use sizing_config::{PayloadRangeParams, RunwayParams, WeightParams};
    use sizing_field::{LandingAeroConfig, LandingInputs, TakeoffAeroConfig, TakeoffInputs};
    use sizing_payload_range::{CruiseAeroConfig, PayloadRangeInputs};
    use sizing_weights::{
        EmptyWeightRegression, MissionProfile, SegmentFractions, SolverSettings, WeightError,
        WeightFractionModel,
    };

    /// Design mission described by the weight section. Applies the mission sign checks.
    pub fn mission(params: &WeightParams) -> Result<MissionProfile, WeightError> {
        MissionProfile::new(
            params.payload_kg,
            params.range_km,
            params.cruise_speed_m_s,
            params.cruise_altitude_m,
            params.cruise_lift_to_drag,
            params.tsfc_kg_per_n_s,
        )
    }

    pub fn fraction_model(params: &WeightParams) -> WeightFractionModel {
        let regression = EmptyWeightRegression {
            a: params.empty_weight_regression.a,
            c: params.empty_weight_regression.c,
        };
        let segments = &params.segment_fractions;
        WeightFractionModel::new(
            regression,
            SegmentFractions {
                taxi: segments.taxi,
                takeoff: segments.takeoff,
                climb: segments.climb,
                descent: segments.descent,
                reserve: segments.reserve,
            },
        )
    }

    pub fn solver_settings(params: &WeightParams) -> SolverSettings {
        SolverSettings::new(
            params.initial_mtow_guess_kg,
            params.tolerance_kg,
            params.max_iterations,
        )
    }

    /// Takeoff inputs at `weight_kg` with the configured low-speed polar.
    pub fn takeoff(params: &RunwayParams, weight_kg: f64) -> (TakeoffInputs, TakeoffAeroConfig) {
        let inputs = TakeoffInputs {
            weight_kg,
            wing_area_m2: params.wing_area_m2,
            static_thrust_n: params.static_thrust_n,
            cl_max: params.cl_max_takeoff,
        };
        let aero = TakeoffAeroConfig {
            zero_lift_drag: params.cd0_takeoff,
            induced_drag_factor: params.induced_drag_factor,
            ..TakeoffAeroConfig::default()
        };
        (inputs, aero)
    }

    /// Landing weight: the explicit value, else the configured fraction of MTOW.
    pub fn landing_weight(params: &RunwayParams, mtow_kg: f64) -> f64 {
        params
            .landing_weight_kg
            .unwrap_or(mtow_kg * params.landing_weight_fraction)
    }

    pub fn landing(params: &RunwayParams, weight_kg: f64) -> (LandingInputs, LandingAeroConfig) {
        let inputs = LandingInputs {
            weight_kg,
            wing_area_m2: params.wing_area_m2,
            cl_max: params.cl_max_landing,
        };
        let aero = LandingAeroConfig {
            zero_lift_drag: params.cd0_landing,
            induced_drag_factor: params.induced_drag_factor,
            reverse_thrust_n: params.reverse_thrust_n,
            ..LandingAeroConfig::default()
        };
        (inputs, aero)
    }

    /// Payload-range inputs; configured OEW/MTOW overrides win over the solved values.
    pub fn payload_range(
        params: &PayloadRangeParams,
        oew_kg: f64,
        mtow_kg: f64,
    ) -> (PayloadRangeInputs, CruiseAeroConfig) {
        let inputs = PayloadRangeInputs {
            oew_kg: params.oew_kg.unwrap_or(oew_kg),
            mtow_kg: params.mtow_kg.unwrap_or(mtow_kg),
            max_payload_kg: params.max_payload_kg,
            max_fuel_kg: params.max_fuel_kg,
        };
        let cruise = CruiseAeroConfig {
            density_kg_m3: params.density_kg_m3,
            wing_area_m2: params.wing_area_m2,
            speed_m_s: params.cruise_speed_m_s,
            zero_lift_drag: params.cd0,
            induced_drag_factor: params.induced_drag_factor,
            tsfc_kg_per_n_s: params.tsfc_kg_per_n_s,
        };
        (inputs, cruise)
    }

}
