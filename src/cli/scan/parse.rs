use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use indicatif::ProgressBar;
use itertools::Itertools;

use crate::core::filtering::reads::ReadsFilterByQuality;
use crate::core::io::hts;
use crate::core::motif::Motif;
use crate::core::scanning::TandemRepeatScanner;

use super::args;

pub fn motif(pbar: ProgressBar, matches: &ArgMatches) -> Motif {
    pbar.set_message("Parsing the motif...");
    let motif: Motif = matches.value_of(args::scanning::MOTIF).unwrap().parse().unwrap();
    pbar.finish_with_message(format!("Searching for tandem repeats of the motif {}", motif));
    motif
}

pub fn readfilter(pbar: ProgressBar, matches: &ArgMatches) -> ReadsFilterByQuality {
    pbar.set_message("Parsing reads filtering options...");
    let mapq = matches.value_of(args::reads_filtering::MAPQ).unwrap().parse().unwrap();
    let result = ReadsFilterByQuality::new(mapq);
    pbar.finish_with_message(format!("Reads filter options: mapq >= {}", result.mapq()));
    result
}

pub fn scanner(pbar: ProgressBar, matches: &ArgMatches, motif: Motif) -> TandemRepeatScanner {
    pbar.set_message("Parsing repeat scanning options...");
    let minlen = matches.value_of(args::scanning::MIN_LENGTH).unwrap().parse().unwrap();
    let result = TandemRepeatScanner::new(motif, minlen);
    pbar.finish_with_message(format!(
        "Repeat runs of {} shorter than {} base(s) are discarded",
        result.motif(),
        result.minlen()
    ));
    result
}

pub fn bamfiles(pbar: ProgressBar, matches: &ArgMatches) -> Vec<PathBuf> {
    pbar.set_message("Discovering alignment files...");
    let dir: PathBuf = matches.value_of(args::core::INPUT).unwrap().into();
    let result = hts::discover(&dir)
        .unwrap_or_else(|_| panic!("Failed to list alignment files in {}", dir.display()));
    if result.is_empty() {
        pbar.finish_with_message(format!("No alignment files found in {}", dir.display()));
    } else {
        let paths = result.iter().map(|x| x.display()).join(" ");
        pbar.finish_with_message(format!("Discovered {} sample(s): {}", result.len(), paths));
    }
    result
}

pub fn outdirs(pbar: ProgressBar, matches: &ArgMatches) -> (PathBuf, PathBuf) {
    pbar.set_message("Preparing output directories...");
    let statsdir: PathBuf = matches.value_of(args::core::STATS_DIR).unwrap().into();
    let plotsdir: PathBuf = matches.value_of(args::core::PLOTS_DIR).unwrap().into();
    for dir in [&statsdir, &plotsdir] {
        fs::create_dir_all(dir).unwrap_or_else(|_| panic!("Failed to create the output directory {}", dir.display()));
    }
    pbar.finish_with_message(format!(
        "Reports will be saved to {}, histograms to {}",
        statsdir.display(),
        plotsdir.display()
    ));
    (statsdir, plotsdir)
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing the number of threads allowed to launch...");
    let result = matches.value_of(args::core::THREADS).and_then(|x| x.parse().ok()).unwrap();
    pbar.finish_with_message(format!("Using a thread pool with at most {} thread(s)", result));
    result
}
