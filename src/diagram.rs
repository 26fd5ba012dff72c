//! Payload-range diagram rendering.

use std::path::Path;

use plotters::prelude::*;
use sizing_payload_range::PayloadRangePoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("no points to plot")]
    Empty,
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to draw diagram: {0}")]
    Draw(String),
}

/// Labelled envelope corner, decoupled from the solver types so CSV input can be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramPoint {
    pub label: String,
    pub range_km: f64,
    pub payload_kg: f64,
}

impl From<&PayloadRangePoint> for DiagramPoint {
    fn from(point: &PayloadRangePoint) -> Self {
        Self {
            label: point.label.as_str().to_string(),
            range_km: point.range_km,
            payload_kg: point.payload_kg,
        }
    }
}

/// Render the envelope as a PNG (or any bitmap format inferred from the extension).
pub fn render_payload_range(
    path: &Path,
    title: &str,
    points: &[DiagramPoint],
    size: (u32, u32),
) -> Result<(), DiagramError> {
    if points.is_empty() {
        return Err(DiagramError::Empty);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let max_range = points
        .iter()
        .map(|p| p.range_km)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let max_payload = points
        .iter()
        .map(|p| p.payload_kg)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let x_max = if max_range > 0.0 { max_range * 1.1 } else { 1.0 };
    let y_max = if max_payload > 0.0 { max_payload * 1.2 } else { 1.0 };

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("Payload-Range Diagram - {title}"), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Range (km)")
        .y_desc("Payload (kg)")
        .label_style(label_font.clone())
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()
        .map_err(draw_error)?;

    let envelope: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.range_km.is_finite() && p.payload_kg.is_finite())
        .map(|p| (p.range_km, p.payload_kg))
        .collect();

    let mut fill = envelope.clone();
    if let Some(&(last_range, _)) = envelope.last() {
        fill.push((last_range, 0.0));
        fill.push((0.0, 0.0));
    }
    let line_color = RGBColor(30, 90, 180);
    chart
        .draw_series(std::iter::once(Polygon::new(
            fill,
            line_color.mix(0.15).filled(),
        )))
        .map_err(draw_error)?;
    chart
        .draw_series(std::iter::once(PathElement::new(
            envelope.clone(),
            ShapeStyle::from(&line_color).stroke_width(3),
        )))
        .map_err(draw_error)?;

    let marker_color = RGBColor(200, 40, 40);
    for point in points {
        if !(point.range_km.is_finite() && point.payload_kg.is_finite()) {
            continue;
        }
        let at = (point.range_km, point.payload_kg);
        chart
            .draw_series(std::iter::once(Circle::new(at, 6, marker_color.filled())))
            .map_err(draw_error)?;
        let text = format!(
            "{} ({:.0} km, {:.0} kg)",
            point.label, point.range_km, point.payload_kg
        );
        let text_at = (at.0 + 0.01 * x_max, at.1 + 0.04 * y_max);
        chart
            .draw_series(std::iter::once(Text::new(
                text,
                text_at,
                label_font.clone().color(&BLACK),
            )))
            .map_err(draw_error)?;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_error<E: std::fmt::Display>(err: E) -> DiagramError {
    DiagramError::Draw(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
