use std::fs;
use std::path::PathBuf;

use airframe_aero::export::polar::{PolarRow, read_polar};
use clap::Parser;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render lift and drag coefficient curves from a polar CSV"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/polar.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

const LIFT_COLOR: RGBColor = RGBColor(30, 90, 200);
const DRAG_COLOR: RGBColor = RGBColor(200, 60, 30);

fn main() -> anyhow::Result<()> {
    airframe_aero::init_tracing();
    let cli = Cli::parse();

    let mut rows = read_polar(&cli.input)?;
    rows.retain(|r| {
        r.alpha_deg.is_finite() && r.lift_coefficient.is_finite() && r.drag_coefficient.is_finite()
    });
    if rows.is_empty() {
        return Err(anyhow::anyhow!("No finite polar rows in {}", cli.input.display()));
    }
    rows.sort_by(|a, b| a.alpha_deg.total_cmp(&b.alpha_deg));

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Lift on top, drag below, sharing the alpha axis.
    let (upper, lower) = root.split_vertically((cli.height / 2) as i32);
    draw_panel(&upper, &rows, |r| r.lift_coefficient, LIFT_COLOR)?;
    draw_panel(&lower, &rows, |r| r.drag_coefficient, DRAG_COLOR)?;

    root.present()?;
    tracing::info!(output = %cli.output.display(), rows = rows.len(), "wrote polar plot");
    Ok(())
}

fn draw_panel<DB, F>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    rows: &[PolarRow],
    value: F,
    color: RGBColor,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Fn(&PolarRow) -> f64,
{
    let (x_min, x_max) = padded_range(rows.iter().map(|r| r.alpha_deg));
    let (y_min, y_max) = padded_range(rows.iter().map(&value));

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Axes through the origin when it is in view; no text is drawn.
    let axis = ShapeStyle::from(&BLACK.mix(0.4)).stroke_width(1);
    if (y_min..=y_max).contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            axis,
        )))?;
    }
    if (x_min..=x_max).contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, y_min), (0.0, y_max)],
            axis,
        )))?;
    }

    chart.draw_series(LineSeries::new(
        rows.iter().map(|r| (r.alpha_deg, value(r))),
        color.stroke_width(2),
    ))?;
    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.alpha_deg, value(r)), 3, color.filled())),
    )?;
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = hi - lo;
    let pad = if span > f64::EPSILON { span * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}
