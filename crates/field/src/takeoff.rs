//! Takeoff distance: ground run, rotation and climb-out to the screen height.

use serde::Serialize;
use sizing_core::constants::{GRAVITY_M_S2, SEA_LEVEL_DENSITY_KG_M3};

use crate::{FieldError, aero_force, drag_coefficient, positive, stall_speed};

/// Aerodynamic and procedural constants for the takeoff estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TakeoffAeroConfig {
    pub density_kg_m3: f64,
    pub gravity_m_s2: f64,
    pub rolling_friction: f64,
    /// Average lift coefficient during the ground run.
    pub ground_lift_coefficient: f64,
    pub zero_lift_drag: f64,
    pub induced_drag_factor: f64,
    /// Liftoff speed as a multiple of the takeoff stall speed.
    pub liftoff_speed_factor: f64,
    /// Average ground-run speed as a multiple of the liftoff speed.
    pub average_speed_factor: f64,
    pub rotation_time_s: f64,
    /// Screen height, 35 ft by default.
    pub obstacle_height_m: f64,
}

impl Default for TakeoffAeroConfig {
    fn default() -> Self {
        Self {
            density_kg_m3: SEA_LEVEL_DENSITY_KG_M3,
            gravity_m_s2: GRAVITY_M_S2,
            rolling_friction: 0.03,
            ground_lift_coefficient: 0.1,
            zero_lift_drag: 0.048,
            induced_drag_factor: 0.049,
            liftoff_speed_factor: 1.15,
            average_speed_factor: 0.7,
            rotation_time_s: 2.0,
            obstacle_height_m: 10.7,
        }
    }
}

/// Aircraft state at brake release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TakeoffInputs {
    pub weight_kg: f64,
    pub wing_area_m2: f64,
    pub static_thrust_n: f64,
    pub cl_max: f64,
}

/// Takeoff distance breakdown.
///
/// `total_m` is always `ground_run_m + rotation_m + airborne_m`. When the ground-run
/// force balance cannot accelerate the aircraft, the ground run and total are infinite,
/// rotation and airborne segments are zero and `performance_infeasible` is set. When
/// there is no excess thrust after liftoff the airborne segment is infinite and
/// `climb_infeasible` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TakeoffPerformance {
    pub stall_speed_m_s: f64,
    pub liftoff_speed_m_s: f64,
    pub average_acceleration_m_s2: f64,
    pub climb_angle_deg: f64,
    pub ground_run_m: f64,
    pub rotation_m: f64,
    pub airborne_m: f64,
    pub total_m: f64,
    pub performance_infeasible: bool,
    pub climb_infeasible: bool,
}

/// Estimate the takeoff distance over the screen height.
pub fn estimate_takeoff(
    inputs: &TakeoffInputs,
    config: &TakeoffAeroConfig,
) -> Result<TakeoffPerformance, FieldError> {
    let g = positive("gravity_m_s2", config.gravity_m_s2)?;
    let rho = config.density_kg_m3;
    let area = inputs.wing_area_m2;
    let weight_n = positive("weight_kg", inputs.weight_kg)? * g;

    let stall = stall_speed(weight_n, rho, area, inputs.cl_max)?;
    let liftoff = config.liftoff_speed_factor * stall;
    let v_avg = config.average_speed_factor * liftoff;
    let thrust = inputs.static_thrust_n;

    let cl_ground = config.ground_lift_coefficient;
    let cd_ground = drag_coefficient(config.zero_lift_drag, config.induced_drag_factor, cl_ground);
    let lift_ground = aero_force(rho, v_avg, area, cl_ground);
    let drag_ground = aero_force(rho, v_avg, area, cd_ground);

    let accel = (g / weight_n)
        * (thrust - drag_ground - config.rolling_friction * (weight_n - lift_ground));

    if accel <= 0.0 {
        return Ok(TakeoffPerformance {
            stall_speed_m_s: stall,
            liftoff_speed_m_s: liftoff,
            average_acceleration_m_s2: accel,
            climb_angle_deg: 0.0,
            ground_run_m: f64::INFINITY,
            rotation_m: 0.0,
            airborne_m: 0.0,
            total_m: f64::INFINITY,
            performance_infeasible: true,
            climb_infeasible: false,
        });
    }

    let ground_run = (liftoff * liftoff) / (2.0 * accel);
    let rotation = liftoff * config.rotation_time_s;

    let cl_climb = (weight_n / aero_force(rho, liftoff, area, 1.0)).min(inputs.cl_max);
    let cd_climb = drag_coefficient(config.zero_lift_drag, config.induced_drag_factor, cl_climb);
    let drag_climb = aero_force(rho, liftoff, area, cd_climb);
    let sin_gamma = (thrust - drag_climb) / weight_n;

    let (airborne, gamma, climb_infeasible) = if sin_gamma <= 0.0 {
        (f64::INFINITY, 0.0, true)
    } else {
        // excess thrust above weight means a vertical climb-out
        let gamma = sin_gamma.min(1.0).asin();
        let tan_gamma = gamma.tan();
        let airborne = if tan_gamma > 0.0 {
            config.obstacle_height_m / tan_gamma
        } else {
            f64::INFINITY
        };
        (airborne, gamma, false)
    };

    Ok(TakeoffPerformance {
        stall_speed_m_s: stall,
        liftoff_speed_m_s: liftoff,
        average_acceleration_m_s2: accel,
        climb_angle_deg: gamma.to_degrees(),
        ground_run_m: ground_run,
        rotation_m: rotation,
        airborne_m: airborne,
        total_m: ground_run + rotation + airborne,
        performance_infeasible: false,
        climb_infeasible,
    })
}
