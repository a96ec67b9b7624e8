//! Per-sequence overlap chart.

use std::path::Path;

use plotters::prelude::*;

use crate::analysis::SequenceAnalysis;
use crate::{Error, Result};

const CHART_SIZE: (u32, u32) = (1024, 768);

type DrawResult<T> = std::result::Result<T, DrawingAreaErrorKind<std::io::Error>>;

/// Render both runs' per-frame overlap as an SVG at `path`.
///
/// Control is drawn in blue and experimental in red, each with a horizontal
/// line at its mean.
pub fn render_overlap_chart(path: &Path, analysis: &SequenceAnalysis) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw(&root, analysis).map_err(|e| Error::Chart(format!("{}: {}", path.display(), e)))
}

fn draw(root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>, analysis: &SequenceAnalysis) -> DrawResult<()> {
    root.fill(&WHITE)?;

    let frames = analysis
        .control
        .len()
        .max(analysis.experimental.len())
        .max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(&analysis.name, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..frames, 0f64..1f64)?;

    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Overlap")
        .draw()?;

    let verdict = &analysis.verdict;
    let runs = [
        (&analysis.control, verdict.control_mean, BLUE, "control"),
        (&analysis.experimental, verdict.experimental_mean, RED, "experimental"),
    ];

    for (series, mean, color, label) in runs {
        chart
            .draw_series(
                series
                    .iter()
                    .enumerate()
                    .map(|(frame, &overlap)| Circle::new((frame as f64, overlap), 2, color.filled())),
            )?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));

        chart.draw_series(LineSeries::new([(0.0, mean), (frames, mean)], &color))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
