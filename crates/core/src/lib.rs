//! Core units, constants, and shared primitives for the aircraft sizing workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used throughout the sizing equations (m/s²).
    pub const GRAVITY_M_S2: f64 = 9.81;
    /// ISA sea-level air density (kg/m³).
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
    /// Knots per metre per second.
    pub const KNOTS_PER_M_S: f64 = 1.94384;
    /// Metres per flight level (100 ft).
    pub const METRES_PER_FLIGHT_LEVEL: f64 = 30.48;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{KNOTS_PER_M_S, METRES_PER_FLIGHT_LEVEL};

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to knots.
    #[inline]
    pub fn ms_to_knots(v: f64) -> f64 {
        v * KNOTS_PER_M_S
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * 3.6
    }

    /// Convert a geometric altitude in metres to a flight level number.
    #[inline]
    pub fn m_to_flight_level(v: f64) -> f64 {
        v / METRES_PER_FLIGHT_LEVEL
    }
}

/// Mass/force helpers shared by the weight and performance crates.
pub mod mass {
    use super::constants::GRAVITY_M_S2;

    /// Convert a mass in kilograms to a weight force in newtons.
    #[inline]
    pub fn kg_to_newtons(mass_kg: f64) -> f64 {
        mass_kg * GRAVITY_M_S2
    }

    /// Convert a weight force in newtons to a mass in kilograms.
    #[inline]
    pub fn newtons_to_kg(force_n: f64) -> f64 {
        force_n / GRAVITY_M_S2
    }
}

#[cfg(test)]
mod tests {
    use super::{mass, units};

    #[test]
    fn conversions_round_trip_through_si() {
        assert_eq!(units::km_to_m(7_200.0), 7_200_000.0);
        assert_eq!(units::m_to_km(1_500.0), 1.5);
        assert!((units::ms_to_kmh(250.56) - 902.016).abs() < 1e-9);
        assert!((units::m_to_flight_level(12_497.0) - 410.0).abs() < 0.1);
        assert!((mass::newtons_to_kg(mass::kg_to_newtons(2_812.0)) - 2_812.0).abs() < 1e-9);
    }
}
