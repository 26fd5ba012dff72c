//! Payload-range envelope from the Breguet range equation.
//!
//! The envelope is described by four corner points:
//!
//! - **A**: maximum payload at zero range.
//! - **B**: maximum payload, fuel limited by MTOW (and tank capacity).
//! - **C**: full tanks, payload reduced so the take-off weight stays at MTOW.
//! - **D**: full tanks (capped by MTOW) and no payload.
//!
//! Each leg uses the lift-to-drag ratio required at its average weight.

use serde::Serialize;
use sizing_core::constants::GRAVITY_M_S2;
use sizing_core::units::m_to_km;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadRangeError {
    #[error("`{field}` must be {expected}, got {value}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("lift coefficient is zero at {weight_kg} kg; L/D is undefined")]
    ZeroLiftCoefficient { weight_kg: f64 },
}

/// Cruise condition used to evaluate L/D and the Breguet range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CruiseAeroConfig {
    pub density_kg_m3: f64,
    pub wing_area_m2: f64,
    pub speed_m_s: f64,
    pub zero_lift_drag: f64,
    pub induced_drag_factor: f64,
    pub tsfc_kg_per_n_s: f64,
}

impl Default for CruiseAeroConfig {
    /// Long-range business jet at FL410.
    fn default() -> Self {
        Self {
            density_kg_m3: 0.301,
            wing_area_m2: 113.7,
            speed_m_s: 250.56,
            zero_lift_drag: 0.018,
            induced_drag_factor: 0.049,
            tsfc_kg_per_n_s: 2.0028e-5,
        }
    }
}

/// Weight limits of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRangeInputs {
    pub oew_kg: f64,
    pub mtow_kg: f64,
    pub max_payload_kg: f64,
    pub max_fuel_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointLabel {
    A,
    B,
    C,
    D,
}

impl PointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointLabel::A => "A",
            PointLabel::B => "B",
            PointLabel::C => "C",
            PointLabel::D => "D",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PointLabel::A => "zero range, maximum payload",
            PointLabel::B => "range at maximum payload",
            PointLabel::C => "full tanks, reduced payload",
            PointLabel::D => "maximum range, zero payload",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRangePoint {
    pub label: PointLabel,
    pub range_km: f64,
    pub payload_kg: f64,
    pub fuel_kg: f64,
    pub takeoff_weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRangeDiagram {
    pub a: PayloadRangePoint,
    pub b: PayloadRangePoint,
    pub c: PayloadRangePoint,
    pub d: PayloadRangePoint,
}

impl PayloadRangeDiagram {
    /// Corner points in envelope order A → D.
    pub fn points(&self) -> [PayloadRangePoint; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// Lift-to-drag ratio in level flight at `weight_kg`, from `L/D = 1 / (CD0/CL + k·CL)`.
pub fn lift_to_drag(weight_kg: f64, cruise: &CruiseAeroConfig) -> Result<f64, PayloadRangeError> {
    let weight_n = weight_kg * GRAVITY_M_S2;
    let cl = (2.0 * weight_n)
        / (cruise.density_kg_m3 * cruise.wing_area_m2 * (cruise.speed_m_s * cruise.speed_m_s));
    if cl == 0.0 {
        return Err(PayloadRangeError::ZeroLiftCoefficient { weight_kg });
    }
    Ok(1.0 / ((cruise.zero_lift_drag / cl) + cruise.induced_drag_factor * cl))
}

/// Breguet range in kilometres. Returns 0 when `end_kg <= 0` or `start_kg <= end_kg`.
pub fn breguet_range_km(
    start_kg: f64,
    end_kg: f64,
    lift_to_drag: f64,
    speed_m_s: f64,
    tsfc_kg_per_n_s: f64,
) -> f64 {
    if end_kg <= 0.0 || start_kg <= end_kg {
        return 0.0;
    }
    let range_m =
        (speed_m_s * lift_to_drag) / (GRAVITY_M_S2 * tsfc_kg_per_n_s) * (start_kg / end_kg).ln();
    m_to_km(range_m)
}

/// Compute the four corner points of the payload-range envelope.
pub fn compute_payload_range(
    inputs: &PayloadRangeInputs,
    cruise: &CruiseAeroConfig,
) -> Result<PayloadRangeDiagram, PayloadRangeError> {
    validate(inputs, cruise)?;
    let oew = inputs.oew_kg;
    let mtow = inputs.mtow_kg;
    let max_payload = inputs.max_payload_kg;
    let max_fuel = inputs.max_fuel_kg;

    let a = PayloadRangePoint {
        label: PointLabel::A,
        range_km: 0.0,
        payload_kg: max_payload,
        fuel_kg: 0.0,
        takeoff_weight_kg: oew + max_payload,
    };

    // payload alone above MTOW leaves no fuel, not negative fuel
    let fuel_b = (mtow - oew - max_payload).min(max_fuel).max(0.0);
    let b = leg(
        PointLabel::B,
        oew + max_payload + fuel_b,
        oew + max_payload,
        max_payload,
        cruise,
    )?;

    let payload_c = (mtow - oew - max_fuel).max(0.0);
    let c = leg(PointLabel::C, mtow, oew + payload_c, payload_c, cruise)?;

    let d = leg(PointLabel::D, (oew + max_fuel).min(mtow), oew, 0.0, cruise)?;

    Ok(PayloadRangeDiagram { a, b, c, d })
}

fn leg(
    label: PointLabel,
    start_kg: f64,
    end_kg: f64,
    payload_kg: f64,
    cruise: &CruiseAeroConfig,
) -> Result<PayloadRangePoint, PayloadRangeError> {
    let average_kg = (start_kg + end_kg) / 2.0;
    let ld = lift_to_drag(average_kg, cruise)?;
    Ok(PayloadRangePoint {
        label,
        range_km: breguet_range_km(start_kg, end_kg, ld, cruise.speed_m_s, cruise.tsfc_kg_per_n_s),
        payload_kg,
        fuel_kg: start_kg - end_kg,
        takeoff_weight_kg: start_kg,
    })
}

fn validate(
    inputs: &PayloadRangeInputs,
    cruise: &CruiseAeroConfig,
) -> Result<(), PayloadRangeError> {
    const POSITIVE: &str = "positive";
    const NON_NEGATIVE: &str = "non-negative";
    let checks = [
        ("oew_kg", inputs.oew_kg, POSITIVE),
        ("mtow_kg", inputs.mtow_kg, POSITIVE),
        ("max_payload_kg", inputs.max_payload_kg, NON_NEGATIVE),
        ("max_fuel_kg", inputs.max_fuel_kg, NON_NEGATIVE),
        ("density_kg_m3", cruise.density_kg_m3, POSITIVE),
        ("wing_area_m2", cruise.wing_area_m2, POSITIVE),
        ("speed_m_s", cruise.speed_m_s, POSITIVE),
        ("tsfc_kg_per_n_s", cruise.tsfc_kg_per_n_s, POSITIVE),
    ];
    for (field, value, expected) in checks {
        let ok = if expected == POSITIVE {
            value > 0.0
        } else {
            value >= 0.0
        };
        if !ok || !value.is_finite() {
            return Err(PayloadRangeError::InvalidInput {
                field,
                expected,
                value,
            });
        }
    }
    Ok(())
}
