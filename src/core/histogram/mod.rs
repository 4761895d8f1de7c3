use itertools::Itertools;
use rand::Rng;

pub use render::render;

mod render;

/// Binning specification handed to the plotting backend. Bins are unit
/// width, aligned on integers; the last bin is right-inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramSpec {
    pub edges: Vec<u32>,
    pub percents: Vec<f64>,
    pub color: (u8, u8, u8),
}

/// Projects a repeat count distribution onto a relative-frequency histogram.
/// None when the distribution is empty, has fewer than two distinct values,
/// or the bin range degenerates - such samples are not plotted.
pub fn project(counts: &[u32], rng: &mut impl Rng) -> Option<HistogramSpec> {
    if counts.iter().unique().count() < 2 {
        return None;
    }

    let (min, max) = counts.iter().copied().minmax().into_option().unwrap();
    // The upper bound is deliberately data-dependent; narrow distributions
    // produce a degenerate range and are skipped
    let edges = (min..max.saturating_sub(10)).collect_vec();
    if edges.len() < 2 {
        return None;
    }

    let (first, last) = (edges[0], *edges.last().unwrap());
    let mut bins = vec![0u32; edges.len() - 1];
    for &x in counts {
        if x < first || x > last {
            continue;
        }
        let ind = ((x - first) as usize).min(bins.len() - 1);
        bins[ind] += 1;
    }

    // Density over the in-range observations, scaled to percent
    let total: u32 = bins.iter().sum();
    if total == 0 {
        return None;
    }
    let percents = bins.iter().map(|&x| x as f64 * 100.0 / total as f64).collect();

    let color = rng.gen_range(0..=0xFFFFFFu32);
    let color = ((color >> 16) as u8, (color >> 8) as u8, color as u8);

    Some(HistogramSpec { edges, percents, color })
}
