//! Takeoff and landing field-length estimates.
//!
//! Both pipelines use the average-acceleration method: stall speed from the wing
//! loading, characteristic speeds as fixed multiples of it, a force balance at an
//! average ground-roll speed, then `v² = 2·a·s` per phase. A force balance with the
//! wrong sign does not fail; the affected distances become infinite and the result
//! carries a flag.

pub mod landing;
pub mod takeoff;

pub use landing::{LandingAeroConfig, LandingInputs, LandingPerformance, estimate_landing};
pub use takeoff::{TakeoffAeroConfig, TakeoffInputs, TakeoffPerformance, estimate_takeoff};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, FieldError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::NonPositive { field, value })
    }
}

/// Stall speed `sqrt(2W / (ρ·S·CLmax))` for a weight force in newtons.
pub fn stall_speed(
    weight_n: f64,
    density_kg_m3: f64,
    wing_area_m2: f64,
    cl_max: f64,
) -> Result<f64, FieldError> {
    positive("weight", weight_n)?;
    positive("density_kg_m3", density_kg_m3)?;
    positive("wing_area_m2", wing_area_m2)?;
    positive("cl_max", cl_max)?;
    Ok(((2.0 * weight_n) / (density_kg_m3 * wing_area_m2 * cl_max)).sqrt())
}

/// Aerodynamic force `½·ρ·V²·S·C`.
#[inline]
pub(crate) fn aero_force(
    density_kg_m3: f64,
    speed_m_s: f64,
    wing_area_m2: f64,
    coeff: f64,
) -> f64 {
    0.5 * density_kg_m3 * (speed_m_s * speed_m_s) * wing_area_m2 * coeff
}

/// Parabolic drag polar `CD0 + K·CL²`.
#[inline]
pub(crate) fn drag_coefficient(cd0: f64, k: f64, cl: f64) -> f64 {
    cd0 + k * (cl * cl)
}
