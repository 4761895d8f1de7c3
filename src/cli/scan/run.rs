use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::ArgMatches;
use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::cli::shared::style;
use crate::core::counting::{BaseRepeatCounter, ReadStats};
use crate::core::error::Result;
use crate::core::histogram;
use crate::core::run;
use crate::core::stats::SummaryStatistics;

use super::args::ScanArgs;
use super::resformat;

fn sample(hts: &Path, args: &ScanArgs, pbar: &ProgressBar) -> Result<ReadStats> {
    let counter = BaseRepeatCounter::new(args.readfilter, args.scanner.clone());
    let scan = run::scan(hts, counter)?;

    let summary = SummaryStatistics::describe(&scan.counts);

    let report = args.statsdir.join(format!("{}_stats.txt", scan.name));
    let saveto = BufWriter::new(File::create(report)?);
    resformat::sample(saveto, &scan, &args.motif, *args.readfilter.mapq(), summary.as_ref())?;

    if scan.counts.is_empty() {
        pbar.println(format!("No {} repeats found in {}", args.motif, scan.name));
    } else if let Some(spec) = histogram::project(&scan.counts, &mut rand::thread_rng()) {
        let saveto = args.plotsdir.join(format!("{}_hist.png", scan.name));
        histogram::render(&saveto, &scan.name, &spec)?;
    } else {
        pbar.println(format!("Not enough distinct {} repeat counts in {} to plot a histogram", args.motif, scan.name));
    }

    Ok(scan.stats)
}

pub fn run(matches: &ArgMatches, factory: impl Fn() -> ProgressBar) {
    let args = ScanArgs::new(matches, &factory);
    if args.bamfiles.is_empty() {
        // The discovery bar has already reported the notice
        return;
    }

    let pbar = factory();
    pbar.set_style(style::run::running());
    pbar.set_length(args.bamfiles.len() as u64);

    let stats: Vec<ReadStats> = args
        .bamfiles
        .par_iter()
        .filter_map(|hts| {
            let result = sample(hts, &args, &pbar);
            pbar.inc(1);
            match result {
                Ok(stats) => Some(stats),
                Err(error) => {
                    // Failures are isolated to their sample, the batch goes on
                    pbar.println(format!("Failed to process {}: {}", hts.display(), error));
                    None
                }
            }
        })
        .collect();

    pbar.set_style(style::run::finished());
    let total: ReadStats = stats.iter().fold(Default::default(), |a, &b| a + b);
    pbar.finish_with_message(format!(
        "Finished {} of {} sample(s): {} reads, {} filtered by mapping quality",
        stats.len(),
        args.bamfiles.len(),
        total.total,
        total.filtered
    ));
}
