//! Landing distance: approach from the screen height, flare and braked ground roll.

use serde::Serialize;
use sizing_core::constants::{GRAVITY_M_S2, SEA_LEVEL_DENSITY_KG_M3};

use crate::{FieldError, aero_force, drag_coefficient, positive, stall_speed};

/// Aerodynamic and procedural constants for the landing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandingAeroConfig {
    pub density_kg_m3: f64,
    pub gravity_m_s2: f64,
    pub braking_friction: f64,
    pub zero_lift_drag: f64,
    pub induced_drag_factor: f64,
    pub ground_lift_coefficient: f64,
    pub approach_speed_factor: f64,
    pub touchdown_speed_factor: f64,
    /// Ground-roll average speed as a multiple of the touchdown speed.
    pub average_speed_factor: f64,
    pub approach_angle_deg: f64,
    /// Screen height, 50 ft by default.
    pub obstacle_height_m: f64,
    pub flare_height_m: f64,
    pub flare_time_s: f64,
    /// Signed along the direction of travel, so reverse thrust is negative.
    pub reverse_thrust_n: f64,
}

impl Default for LandingAeroConfig {
    fn default() -> Self {
        Self {
            density_kg_m3: SEA_LEVEL_DENSITY_KG_M3,
            gravity_m_s2: GRAVITY_M_S2,
            braking_friction: 0.4,
            zero_lift_drag: 0.063,
            induced_drag_factor: 0.049,
            ground_lift_coefficient: 0.1,
            approach_speed_factor: 1.3,
            touchdown_speed_factor: 1.15,
            average_speed_factor: 0.7,
            approach_angle_deg: 3.0,
            obstacle_height_m: 15.2,
            flare_height_m: 10.0,
            flare_time_s: 3.0,
            reverse_thrust_n: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandingInputs {
    pub weight_kg: f64,
    pub wing_area_m2: f64,
    pub cl_max: f64,
}

/// Landing distance breakdown; `total_m = approach_m + flare_m + ground_roll_m`.
///
/// A ground-roll force balance that does not decelerate the aircraft yields an infinite
/// ground roll and total with `performance_infeasible` set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandingPerformance {
    pub stall_speed_m_s: f64,
    pub approach_speed_m_s: f64,
    pub touchdown_speed_m_s: f64,
    pub average_deceleration_m_s2: f64,
    pub approach_m: f64,
    pub flare_m: f64,
    pub ground_roll_m: f64,
    pub total_m: f64,
    pub performance_infeasible: bool,
}

/// Estimate the landing distance from the screen height to a full stop.
pub fn estimate_landing(
    inputs: &LandingInputs,
    config: &LandingAeroConfig,
) -> Result<LandingPerformance, FieldError> {
    let g = positive("gravity_m_s2", config.gravity_m_s2)?;
    let rho = config.density_kg_m3;
    let area = inputs.wing_area_m2;
    let weight_n = positive("weight_kg", inputs.weight_kg)? * g;
    let approach_angle = positive("approach_angle_deg", config.approach_angle_deg)?.to_radians();

    let stall = stall_speed(weight_n, rho, area, inputs.cl_max)?;
    let approach_speed = config.approach_speed_factor * stall;
    let touchdown_speed = config.touchdown_speed_factor * stall;

    let approach = (config.obstacle_height_m - config.flare_height_m) / approach_angle.tan();
    let flare = approach_speed * config.flare_time_s;

    let v_avg = config.average_speed_factor * touchdown_speed;
    let cl_ground = config.ground_lift_coefficient;
    let cd_ground = drag_coefficient(config.zero_lift_drag, config.induced_drag_factor, cl_ground);
    let lift = aero_force(rho, v_avg, area, cl_ground);
    let drag = aero_force(rho, v_avg, area, cd_ground);

    let decel = (g / weight_n)
        * (config.reverse_thrust_n - drag - config.braking_friction * (weight_n - lift));

    let (ground_roll, infeasible) = if decel >= 0.0 {
        (f64::INFINITY, true)
    } else {
        (-(touchdown_speed * touchdown_speed) / (2.0 * decel), false)
    };

    Ok(LandingPerformance {
        stall_speed_m_s: stall,
        approach_speed_m_s: approach_speed,
        touchdown_speed_m_s: touchdown_speed,
        average_deceleration_m_s2: decel,
        approach_m: approach,
        flare_m: flare,
        ground_roll_m: ground_roll,
        total_m: approach + flare + ground_roll,
        performance_infeasible: infeasible,
    })
}
