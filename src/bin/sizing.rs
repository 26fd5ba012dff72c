use std::io::Write;
use std::path::{Path, PathBuf};

use aircraft_sizing::analysis::{AnalysisReport, run_analysis};
use aircraft_sizing::config::{
    WeightParams, default_config, load_aircraft_config, write_default_config,
};
use aircraft_sizing::diagram::{DiagramPoint, render_payload_range};
use aircraft_sizing::export::{self, iterations, payload_range, results};
use aircraft_sizing::logging::init_tracing;
use aircraft_sizing::units::{m_to_flight_level, ms_to_kmh, ms_to_knots};
use clap::Parser;
use tracing::info;

const RESULTS_FILE: &str = "analysis_results.json";
const ITERATIONS_FILE: &str = "weight_iterations.csv";
const PAYLOAD_RANGE_FILE: &str = "payload_range.csv";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Size an aircraft: MTOW iteration, field lengths and payload-range"
)]
struct Cli {
    /// Aircraft configuration (JSON, TOML or YAML); the reference aircraft when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving results, CSV tables and the diagram
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Write the reference configuration to PATH and exit
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "aircraft_config_default.json"
    )]
    create_config: Option<PathBuf>,

    /// Skip rendering the payload-range PNG
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(path) = &cli.create_config {
        write_default_config(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading aircraft configuration");
            load_aircraft_config(path)?
        }
        None => default_config(),
    };

    let report = run_analysis(&config)?;
    std::fs::create_dir_all(&cli.output_dir)?;

    let diagram_path = if cli.no_plot {
        None
    } else {
        let path = cli
            .output_dir
            .join(format!("payload_range_{}.png", file_stem(&config.aircraft_name)));
        let points: Vec<DiagramPoint> = report
            .payload_range
            .points()
            .iter()
            .map(DiagramPoint::from)
            .collect();
        render_payload_range(&path, &config.aircraft_name, &points, (cli.width, cli.height))?;
        Some(path)
    };

    write_iterations(&cli.output_dir.join(ITERATIONS_FILE), &report)?;
    write_payload_range(&cli.output_dir.join(PAYLOAD_RANGE_FILE), &report)?;

    let generated_utc = chrono::Utc::now().to_rfc3339();
    let meta = results::Metadata {
        aircraft_name: &config.aircraft_name,
        generated_utc: &generated_utc,
        tool_version: aircraft_sizing::version(),
        diagram_path: diagram_path.as_deref(),
    };
    let results_path = cli.output_dir.join(RESULTS_FILE);
    results::write_results(&results_path, &meta, &report)?;
    info!(path = %results_path.display(), "results written");

    print_summary(&report, &config.weights);
    Ok(())
}

fn write_iterations(path: &Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(path)?;
    iterations::write_header(&mut *writer)?;
    for state in &report.weights.history {
        iterations::Record {
            iteration: state.iteration,
            mtow_guess_kg: state.mtow_guess_kg,
            empty_weight_fraction: state.empty_weight_fraction,
            fuel_fraction: state.fuel_fraction,
            mtow_computed_kg: state.mtow_computed_kg,
            residual_kg: state.residual_kg,
        }
        .write_to(&mut *writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_payload_range(path: &Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(path)?;
    payload_range::write_header(&mut *writer)?;
    for point in report.payload_range.points() {
        payload_range::Record {
            label: point.label.as_str(),
            range_km: point.range_km,
            payload_kg: point.payload_kg,
            fuel_kg: point.fuel_kg,
            takeoff_weight_kg: point.takeoff_weight_kg,
            description: point.label.description(),
        }
        .write_to(&mut *writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(report: &AnalysisReport, weights: &WeightParams) {
    let s = &report.summary;
    println!("Aircraft: {}", s.aircraft_name);
    println!(
        "  MTOW {:>10.1} kg   OEW {:>10.1} kg   fuel {:>9.1} kg",
        s.mtow_kg, s.oew_kg, s.mission_fuel_kg
    );
    println!(
        "  fractions: payload {:.3}  empty {:.3}  fuel {:.3}",
        s.payload_fraction, s.oew_fraction, s.fuel_fraction
    );
    let status = if s.weights_converged {
        "converged"
    } else {
        "NOT converged"
    };
    println!(
        "  weight iteration {} after {} iterations (residual {:.3} kg)",
        status, report.weights.solution.iterations, report.weights.solution.residual_kg
    );
    println!(
        "  design mission {:.0} km at {:.0} kt ({:.0} km/h), FL{:.0}",
        weights.range_km,
        ms_to_knots(weights.cruise_speed_m_s),
        ms_to_kmh(weights.cruise_speed_m_s),
        m_to_flight_level(weights.cruise_altitude_m)
    );
    println!(
        "  takeoff distance {}   landing distance {} (at {:.1} kg)",
        fmt_distance(s.takeoff_distance_m),
        fmt_distance(s.landing_distance_m),
        report.landing_weight_kg
    );
    println!(
        "  range at max payload ({:.0} kg) {:.0} km   max range {:.0} km",
        s.max_payload_kg, s.range_at_max_payload_km, s.max_range_km
    );
}

fn fmt_distance(metres: f64) -> String {
    if metres.is_finite() {
        format!("{metres:.0} m")
    } else {
        "infeasible".to_string()
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
