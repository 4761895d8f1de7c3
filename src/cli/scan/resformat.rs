use std::io::{self, Write};

use itertools::Itertools;

use crate::core::motif::Motif;
use crate::core::run::SampleScan;
use crate::core::stats::SummaryStatistics;

/// Human-readable per-sample report. The statistics block is included only
/// when the distribution is non-empty; read accounting is always reported.
pub fn sample(
    mut saveto: impl Write,
    scan: &SampleScan,
    motif: &Motif,
    mapq: u8,
    summary: Option<&SummaryStatistics>,
) -> io::Result<()> {
    writeln!(saveto, "Statistics for {}", scan.name)?;
    writeln!(saveto, "Total reads: {}", scan.stats.total)?;
    writeln!(saveto, "Filtered reads: {} with mapping quality < {}", scan.stats.filtered, mapq)?;
    writeln!(saveto)?;
    writeln!(saveto, "Repeats found (motif -> counts):")?;

    if let Some(summary) = summary {
        writeln!(saveto)?;
        writeln!(saveto, "Mean repeats for {}: {:.2}", motif, summary.mean())?;
        writeln!(saveto, "Median repeats for {}: {}", motif, summary.median())?;
        writeln!(saveto, "Mode repeats for {}: {}", motif, summary.mode())?;
        writeln!(saveto)?;
    }

    writeln!(saveto, "  {} -> [{}]", motif, scan.counts.iter().join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::counting::ReadStats;

    use super::*;

    fn render(scan: &SampleScan) -> String {
        let motif: Motif = "CAG".parse().unwrap();
        let summary = SummaryStatistics::describe(&scan.counts);
        let mut buffer = Vec::new();
        sample(&mut buffer, scan, &motif, 20, summary.as_ref()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn with_statistics() {
        let scan = SampleScan { name: "SRX".into(), stats: ReadStats::new(10, 2), counts: vec![3, 3, 5] };
        let expected = concat!(
            "Statistics for SRX\n",
            "Total reads: 10\n",
            "Filtered reads: 2 with mapping quality < 20\n",
            "\n",
            "Repeats found (motif -> counts):\n",
            "\n",
            "Mean repeats for CAG: 3.67\n",
            "Median repeats for CAG: 3\n",
            "Mode repeats for CAG: 3\n",
            "\n",
            "  CAG -> [3, 3, 5]\n",
        );
        assert_eq!(render(&scan), expected);
    }

    #[test]
    fn empty_distribution() {
        let scan = SampleScan { name: "SRX".into(), stats: ReadStats::new(4, 4), counts: vec![] };
        let expected = concat!(
            "Statistics for SRX\n",
            "Total reads: 4\n",
            "Filtered reads: 4 with mapping quality < 20\n",
            "\n",
            "Repeats found (motif -> counts):\n",
            "  CAG -> []\n",
        );
        assert_eq!(render(&scan), expected);
    }
}
