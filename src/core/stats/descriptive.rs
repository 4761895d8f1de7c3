use std::collections::HashMap;

use derive_getters::Getters;
use itertools::Itertools;

/// Descriptive statistics over one sample's repeat count distribution.
/// Recomputed from scratch for every sample, never cached across samples.
#[derive(Getters, Clone, Debug, PartialEq)]
pub struct SummaryStatistics {
    mean: f64,
    median: u32,
    mode: u32,
}

impl SummaryStatistics {
    /// None for an empty distribution; callers are expected to skip the
    /// statistics block and the histogram entirely.
    pub fn describe(counts: &[u32]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }

        let mean = counts.iter().map(|&x| x as f64).sum::<f64>() / counts.len() as f64;
        // The element at index len/2 of the sorted distribution, even-sized
        // distributions are not interpolated
        let median = counts.iter().copied().sorted().nth(counts.len() / 2).unwrap();

        let mut freqs: HashMap<u32, u32> = HashMap::new();
        for &x in counts {
            *freqs.entry(x).or_default() += 1;
        }
        let maxfreq = freqs.values().copied().max().unwrap();
        // Ties are broken by the first occurrence in the distribution
        let mode = counts.iter().copied().find(|x| freqs[x] == maxfreq).unwrap();

        Some(SummaryStatistics { mean, median, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(SummaryStatistics::describe(&[]).is_none());
    }

    #[test]
    fn single() {
        let stats = SummaryStatistics::describe(&[7]).unwrap();
        assert_eq!(*stats.mean(), 7.0);
        assert_eq!(*stats.median(), 7);
        assert_eq!(*stats.mode(), 7);
    }

    #[test]
    fn describe() {
        let stats = SummaryStatistics::describe(&[3, 3, 5]).unwrap();
        assert!((stats.mean() - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", stats.mean()), "3.67");
        assert_eq!(*stats.median(), 3);
        assert_eq!(*stats.mode(), 3);
    }

    #[test]
    fn even_length_median() {
        let stats = SummaryStatistics::describe(&[4, 1, 3, 2]).unwrap();
        assert_eq!(*stats.median(), 3);
    }

    #[test]
    fn mode_ties_resolve_to_first_seen() {
        let stats = SummaryStatistics::describe(&[5, 2, 2, 5]).unwrap();
        assert_eq!(*stats.mode(), 5);

        let stats = SummaryStatistics::describe(&[2, 5, 5, 2]).unwrap();
        assert_eq!(*stats.mode(), 2);
    }

    #[test]
    fn consistency() {
        let counts = [9, 1, 4, 4, 7, 1, 4];
        let stats = SummaryStatistics::describe(&counts).unwrap();
        assert_eq!(*stats.mean(), counts.iter().sum::<u32>() as f64 / counts.len() as f64);
        assert_eq!(*stats.median(), 4);
        assert_eq!(*stats.mode(), 4);
    }
}
