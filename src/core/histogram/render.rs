use std::path::Path;

use plotters::prelude::*;

use crate::core::error::{Error, Result};

use super::HistogramSpec;

const CANVAS: (u32, u32) = (800, 500);

/// Rasterizes a projected histogram: title = sample name, x = repeat unit
/// count per read, y = relative frequency in percent.
pub fn render(saveto: &Path, sample: &str, spec: &HistogramSpec) -> Result<()> {
    let root = BitMapBackend::new(saveto, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(|x| Error::Plot(x.to_string()))?;

    let (first, last) = (spec.edges[0], *spec.edges.last().unwrap());
    let ymax = spec.percents.iter().cloned().fold(0f64, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(sample, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(first..last, 0f64..ymax)
        .map_err(|x| Error::Plot(x.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("value")
        .y_desc("relative frequency (%)")
        .draw()
        .map_err(|x| Error::Plot(x.to_string()))?;

    let color = RGBColor(spec.color.0, spec.color.1, spec.color.2);
    let bars = spec.edges.windows(2).zip(spec.percents.iter());
    chart
        .draw_series(bars.clone().map(|(w, &pct)| Rectangle::new([(w[0], 0.0), (w[1], pct)], color.filled())))
        .map_err(|x| Error::Plot(x.to_string()))?;
    chart
        .draw_series(bars.map(|(w, &pct)| Rectangle::new([(w[0], 0.0), (w[1], pct)], BLACK.stroke_width(1))))
        .map_err(|x| Error::Plot(x.to_string()))?;

    root.present().map_err(|x| Error::Plot(x.to_string()))?;
    Ok(())
}
