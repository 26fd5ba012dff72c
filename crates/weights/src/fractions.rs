//! Empty-weight and mission fuel fractions.

use serde::Serialize;
use sizing_core::constants::GRAVITY_M_S2;
use sizing_core::mass::kg_to_newtons;
use sizing_core::units::km_to_m;

use crate::{WeightError, require};

/// Power-law regression `We/W0 = a · W0^c`, with `W0` expressed in newtons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmptyWeightRegression {
    pub a: f64,
    pub c: f64,
}

impl EmptyWeightRegression {
    /// Business-jet class coefficients.
    pub const BUSINESS_JET: Self = Self {
        a: 1.118,
        c: -0.070,
    };
}

impl Default for EmptyWeightRegression {
    fn default() -> Self {
        Self::BUSINESS_JET
    }
}

/// Retained-weight ratios (`W_end / W_start`) for the non-cruise mission segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentFractions {
    pub taxi: f64,
    pub takeoff: f64,
    pub climb: f64,
    /// Descent and landing combined.
    pub descent: f64,
    /// Fuel held back as reserve.
    pub reserve: f64,
}

impl SegmentFractions {
    /// Product of the taxi, takeoff, climb and descent ratios.
    pub fn non_cruise_ratio(&self) -> f64 {
        self.taxi * self.takeoff * self.climb * self.descent
    }
}

impl Default for SegmentFractions {
    fn default() -> Self {
        Self {
            taxi: 0.97,
            takeoff: 0.985,
            climb: 0.985,
            descent: 0.995,
            reserve: 0.98,
        }
    }
}

/// Design mission flown by the aircraft being sized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionProfile {
    pub payload_kg: f64,
    pub range_km: f64,
    pub cruise_speed_m_s: f64,
    /// Cruise altitude; carried as context for reports, the fractions do not depend on it.
    pub cruise_altitude_m: f64,
    pub cruise_lift_to_drag: f64,
    /// Thrust-specific fuel consumption in kg/(N·s).
    pub tsfc_kg_per_n_s: f64,
}

impl MissionProfile {
    /// Build a mission and apply the sign checks.
    pub fn new(
        payload_kg: f64,
        range_km: f64,
        cruise_speed_m_s: f64,
        cruise_altitude_m: f64,
        cruise_lift_to_drag: f64,
        tsfc_kg_per_n_s: f64,
    ) -> Result<Self, WeightError> {
        let mission = Self {
            payload_kg,
            range_km,
            cruise_speed_m_s,
            cruise_altitude_m,
            cruise_lift_to_drag,
            tsfc_kg_per_n_s,
        };
        mission.validate()?;
        Ok(mission)
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        require("payload_kg", self.payload_kg, "non-negative", self.payload_kg >= 0.0)?;
        require("range_km", self.range_km, "non-negative", self.range_km >= 0.0)?;
        require(
            "cruise_speed_m_s",
            self.cruise_speed_m_s,
            "positive",
            self.cruise_speed_m_s > 0.0,
        )?;
        require(
            "cruise_lift_to_drag",
            self.cruise_lift_to_drag,
            "positive",
            self.cruise_lift_to_drag > 0.0,
        )?;
        require(
            "tsfc_kg_per_n_s",
            self.tsfc_kg_per_n_s,
            "non-negative",
            self.tsfc_kg_per_n_s >= 0.0,
        )
    }

    /// Breguet cruise retained-weight ratio `exp(-R·g·TSFC / (V·L/D))`.
    pub fn cruise_weight_ratio(&self) -> f64 {
        let range_m = km_to_m(self.range_km);
        (-(range_m * GRAVITY_M_S2 * self.tsfc_kg_per_n_s)
            / (self.cruise_speed_m_s * self.cruise_lift_to_drag))
            .exp()
    }
}

/// Empty-weight and fuel fractions evaluated at one take-off weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightFractionResult {
    pub empty_weight_fraction: f64,
    pub fuel_fraction: f64,
}

impl WeightFractionResult {
    /// Share of take-off weight left for payload, `1 - We/W0 - Wf/W0`.
    pub fn payload_margin(&self) -> f64 {
        1.0 - self.empty_weight_fraction - self.fuel_fraction
    }
}

/// Aircraft-class regression plus mission segment ratios.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeightFractionModel {
    pub regression: EmptyWeightRegression,
    pub segments: SegmentFractions,
}

impl WeightFractionModel {
    pub fn new(regression: EmptyWeightRegression, segments: SegmentFractions) -> Self {
        Self {
            regression,
            segments,
        }
    }

    /// `We/W0` for a take-off weight expressed as a force in newtons.
    pub fn empty_weight_fraction(&self, w0_n: f64) -> Result<f64, WeightError> {
        if !(w0_n > 0.0 && w0_n.is_finite()) {
            return Err(WeightError::NonPositiveWeight { weight_n: w0_n });
        }
        Ok(self.regression.a * w0_n.powf(self.regression.c))
    }

    /// Total mission fuel fraction `Wf/W0`.
    ///
    /// The segment ratios are weight independent, so `_w0_kg` does not enter the
    /// result. The value is not clamped; callers judge plausibility.
    pub fn fuel_fraction(&self, _w0_kg: f64, mission: &MissionProfile) -> f64 {
        let end_ratio = mission.cruise_weight_ratio()
            * self.segments.non_cruise_ratio()
            * self.segments.reserve;
        1.0 - end_ratio
    }

    /// Both fractions at take-off mass `w0_kg`.
    pub fn evaluate(
        &self,
        w0_kg: f64,
        mission: &MissionProfile,
    ) -> Result<WeightFractionResult, WeightError> {
        Ok(WeightFractionResult {
            empty_weight_fraction: self.empty_weight_fraction(kg_to_newtons(w0_kg))?,
            fuel_fraction: self.fuel_fraction(w0_kg, mission),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g550_mission() -> MissionProfile {
        MissionProfile::new(2_812.0, 7_200.0, 250.56, 12_497.0, 16.0, 2.0e-5).unwrap()
    }

    #[test]
    fn empty_weight_fraction_matches_regression() {
        let model = WeightFractionModel::default();
        let frac = model.empty_weight_fraction(40_000.0 * 9.81).unwrap();
        assert!((frac - 0.453_817_013_690_331_6).abs() < 1e-12, "We/W0 = {frac}");
    }

    #[test]
    fn empty_weight_fraction_decreases_with_size() {
        let model = WeightFractionModel::default();
        let small = model.empty_weight_fraction(1.0e5).unwrap();
        let large = model.empty_weight_fraction(1.0e6).unwrap();
        assert!(large < small);
    }

    #[test]
    fn empty_weight_fraction_rejects_non_positive_weight() {
        let model = WeightFractionModel::default();
        assert_eq!(
            model.empty_weight_fraction(0.0),
            Err(WeightError::NonPositiveWeight { weight_n: 0.0 })
        );
        assert!(model.empty_weight_fraction(-5.0).is_err());
    }

    #[test]
    fn custom_regression_is_honoured() {
        let model = WeightFractionModel::new(
            EmptyWeightRegression { a: 0.5, c: 0.0 },
            SegmentFractions::default(),
        );
        assert_eq!(model.empty_weight_fraction(123_456.0).unwrap(), 0.5);
    }

    #[test]
    fn fuel_fraction_matches_reference_mission() {
        let model = WeightFractionModel::default();
        let frac = model.fuel_fraction(40_000.0, &g550_mission());
        assert!((frac - 0.354_849_994_075_432_2).abs() < 1e-12, "Wf/W0 = {frac}");
    }

    #[test]
    fn zero_range_burns_only_segment_and_reserve_fuel() {
        let model = WeightFractionModel::default();
        let mut mission = g550_mission();
        mission.range_km = 0.0;
        let expected = 1.0 - model.segments.non_cruise_ratio() * model.segments.reserve;
        assert!((model.fuel_fraction(1.0, &mission) - expected).abs() < 1e-15);
    }

    #[test]
    fn mission_sign_checks() {
        assert!(MissionProfile::new(-1.0, 100.0, 200.0, 0.0, 15.0, 2e-5).is_err());
        assert!(MissionProfile::new(1.0, -100.0, 200.0, 0.0, 15.0, 2e-5).is_err());
        let err = MissionProfile::new(1.0, 100.0, 0.0, 0.0, 15.0, 2e-5).unwrap_err();
        assert!(matches!(
            err,
            WeightError::InvalidInput {
                field: "cruise_speed_m_s",
                ..
            }
        ));
    }
}
