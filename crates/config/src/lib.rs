//! Aircraft configuration models and loaders.
//!
//! Every section falls back to the long-range business-jet reference aircraft, so a
//! file only needs the values it changes.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level aircraft description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub aircraft_name: String,
    pub weights: WeightParams,
    pub runway: RunwayParams,
    pub payload_range: PayloadRangeParams,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            aircraft_name: "Gulfstream G550".to_string(),
            weights: WeightParams::default(),
            runway: RunwayParams::default(),
            payload_range: PayloadRangeParams::default(),
        }
    }
}

/// Design mission and solver policy for the MTOW iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightParams {
    pub payload_kg: f64,
    pub range_km: f64,
    pub cruise_speed_m_s: f64,
    pub cruise_altitude_m: f64,
    pub initial_mtow_guess_kg: f64,
    pub cruise_lift_to_drag: f64,
    pub tsfc_kg_per_n_s: f64,
    pub tolerance_kg: f64,
    pub max_iterations: usize,
    pub empty_weight_regression: RegressionParams,
    pub segment_fractions: SegmentParams,
}

impl Default for WeightParams {
    fn default() -> Self {
        Self {
            payload_kg: 2_812.0,
            range_km: 7_200.0,
            cruise_speed_m_s: 250.56,
            cruise_altitude_m: 12_497.0,
            initial_mtow_guess_kg: 40_000.0,
            cruise_lift_to_drag: 16.0,
            tsfc_kg_per_n_s: 2.0e-5,
            tolerance_kg: 1.0,
            max_iterations: 50,
            empty_weight_regression: RegressionParams::default(),
            segment_fractions: SegmentParams::default(),
        }
    }
}

/// `We/W0 = a · W0^c` coefficients (W0 in newtons).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionParams {
    pub a: f64,
    pub c: f64,
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self {
            a: 1.118,
            c: -0.070,
        }
    }
}

/// Retained-weight ratios of the non-cruise segments and the reserve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    pub taxi: f64,
    pub takeoff: f64,
    pub climb: f64,
    pub descent: f64,
    pub reserve: f64,
}

impl Default for SegmentParams {
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

/// Geometry and low-speed aerodynamics for the field-length estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayParams {
    pub wing_area_m2: f64,
    pub static_thrust_n: f64,
    pub cl_max_takeoff: f64,
    pub cl_max_landing: f64,
    pub cd0_takeoff: f64,
    pub cd0_landing: f64,
    pub induced_drag_factor: f64,
    /// Explicit landing weight; when absent `landing_weight_fraction · MTOW` is used.
    pub landing_weight_kg: Option<f64>,
    pub landing_weight_fraction: f64,
    pub reverse_thrust_n: f64,
}

impl Default for RunwayParams {
    fn default() -> Self {
        Self {
            wing_area_m2: 113.7,
            static_thrust_n: 136_880.0,
            cl_max_takeoff: 2.1,
            cl_max_landing: 2.6,
            cd0_takeoff: 0.048,
            cd0_landing: 0.063,
            induced_drag_factor: 0.049,
            landing_weight_kg: None,
            landing_weight_fraction: 0.65,
            reverse_thrust_n: 0.0,
        }
    }
}

/// Capacities and cruise aerodynamics for the payload-range envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadRangeParams {
    pub max_payload_kg: f64,
    pub max_fuel_kg: f64,
    pub density_kg_m3: f64,
    pub wing_area_m2: f64,
    pub cruise_speed_m_s: f64,
    pub cd0: f64,
    pub induced_drag_factor: f64,
    pub tsfc_kg_per_n_s: f64,
    /// Replaces the converged OEW when set.
    pub oew_kg: Option<f64>,
    /// Replaces the converged MTOW when set.
    pub mtow_kg: Option<f64>,
}

impl Default for PayloadRangeParams {
    fn default() -> Self {
        Self {
            max_payload_kg: 2_812.0,
            max_fuel_kg: 18_733.0,
            density_kg_m3: 0.301,
            wing_area_m2: 113.7,
            cruise_speed_m_s: 250.56,
            cd0: 0.018,
            induced_drag_factor: 0.049,
            tsfc_kg_per_n_s: 2.0028e-5,
            oew_kg: None,
            mtow_kg: None,
        }
    }
}

/// Errors that can occur while loading or writing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read or write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no aircraft configurations found in {0}")]
    Empty(PathBuf),
}

/// The reference aircraft used when no configuration file is supplied.
pub fn default_config() -> AircraftConfig {
    AircraftConfig::default()
}

/// Load a single aircraft from a JSON, TOML or YAML file.
pub fn load_aircraft_config<P: AsRef<Path>>(path: P) -> Result<AircraftConfig, ConfigError> {
    let path = path.as_ref();
    let mut records: Vec<AircraftConfig> = load_records(path)?;
    if records.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    Ok(records.swap_remove(0))
}

/// Load aircraft from a file or from every `*.toml` file of a directory (sorted by name).
pub fn load_aircraft_configs<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Write the reference aircraft as pretty JSON.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    write_config(path, &default_config())
}

/// Write `config` as pretty JSON, creating parent directories as needed.
pub fn write_config<P: AsRef<Path>>(path: P, config: &AircraftConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, config)?;
    Ok(())
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        return read_dir_records(path);
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            Ok(vec![toml::from_str(&contents)?])
        }
        Some("json") => {
            let reader = File::open(path)?;
            Ok(vec![serde_json::from_reader(reader)?])
        }
        _ => {
            let reader = File::open(path)?;
            Ok(vec![serde_yaml::from_reader(reader)?])
        }
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
