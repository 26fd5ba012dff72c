//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod payload_range {
    use std::io::{self, Write};

    pub const HEADER: &str = "label,range_km,payload_kg,fuel_kg,takeoff_weight_kg,description";

    /// Write the payload-range CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One corner point of the envelope.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub label: &'a str,
        pub range_km: f64,
        pub payload_kg: f64,
        pub fuel_kg: f64,
        pub takeoff_weight_kg: f64,
        pub description: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.3},{:.3},{:.3},{:.3},\"{}\"",
                self.label,
                self.range_km,
                self.payload_kg,
                self.fuel_kg,
                self.takeoff_weight_kg,
                self.description,
            )
        }
    }
}

pub mod iterations {
    use std::io::{self, Write};

    pub const HEADER: &str =
        "iteration,mtow_guess_kg,empty_weight_fraction,fuel_fraction,mtow_computed_kg,residual_kg";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One row of the MTOW iteration history.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub iteration: usize,
        pub mtow_guess_kg: f64,
        pub empty_weight_fraction: f64,
        pub fuel_fraction: f64,
        pub mtow_computed_kg: f64,
        pub residual_kg: f64,
    }

    impl Record {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{:.8},{:.8},{:.6},{:.6}",
                self.iteration,
                self.mtow_guess_kg,
                self.empty_weight_fraction,
                self.fuel_fraction,
                self.mtow_computed_kg,
                self.residual_kg,
            )
        }
    }
}

pub mod results {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Provenance fields written ahead of the results body.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub aircraft_name: &'a str,
        pub generated_utc: &'a str,
        pub tool_version: &'a str,
        /// Rendered diagram, when one was produced.
        pub diagram_path: Option<&'a Path>,
    }

    #[derive(Serialize)]
    struct ResultsDocument<'a, T: Serialize> {
        aircraft_name: &'a str,
        generated_utc: &'a str,
        tool_version: &'a str,
        payload_range_diagram_path: Option<&'a Path>,
        results: &'a T,
    }

    /// Write the full results as pretty JSON. Non-finite numbers are emitted as `null`.
    pub fn write_results<T: Serialize>(
        path: &Path,
        meta: &Metadata<'_>,
        results: &T,
    ) -> io::Result<()> {
        let mut writer = crate::writer_for_path(path)?;
        let document = ResultsDocument {
            aircraft_name: meta.aircraft_name,
            generated_utc: meta.generated_utc,
            tool_version: meta.tool_version,
            payload_range_diagram_path: meta.diagram_path,
            results,
        };
        to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()
    }
}
