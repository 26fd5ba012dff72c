use aircraft_sizing::diagram::{DiagramPoint, render_payload_range};
use aircraft_sizing::logging::init_tracing;
use clap::Parser;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a payload-range diagram from an exported payload_range.csv"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "output/payload_range.png")]
    output: PathBuf,
    #[arg(long, default_value = "Aircraft")]
    title: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let points = read_points(&cli.input)?;
    if points.is_empty() {
        return Err(anyhow::anyhow!(
            "No payload-range points in {}",
            cli.input.display()
        ));
    }
    render_payload_range(&cli.output, &cli.title, &points, (cli.width, cli.height))?;
    info!(path = %cli.output.display(), points = points.len(), "diagram written");
    Ok(())
}

fn read_points(path: &Path) -> anyhow::Result<Vec<DiagramPoint>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let label_idx = column("label")?;
    let range_idx = column("range_km")?;
    let payload_idx = column("payload_kg")?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let range_km: f64 = r.get(range_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let payload_kg: f64 = r.get(payload_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if range_km.is_finite() && payload_kg.is_finite() {
            points.push(DiagramPoint {
                label: r.get(label_idx).unwrap_or("").to_string(),
                range_km,
                payload_kg,
            });
        }
    }
    Ok(points)
}
