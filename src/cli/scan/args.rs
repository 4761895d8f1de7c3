use std::path::PathBuf;

use clap::{Arg, ArgMatches};
use indicatif::ProgressBar;

use crate::cli::shared::validate;
use crate::core::filtering::reads::ReadsFilterByQuality;
use crate::core::motif::Motif;
use crate::core::scanning::TandemRepeatScanner;

use super::parse;

pub mod core {
    use super::*;

    pub const INPUT: &str = "input";
    pub const STATS_DIR: &str = "stats-dir";
    pub const PLOTS_DIR: &str = "plots-dir";
    pub const THREADS: &str = "threads";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .short('i')
                .long(INPUT)
                .takes_value(true)
                .default_value(".")
                .validator(validate::path)
                .long_help(
                    "Directory scanned for the input BAM file(s). \
                    Every file with the .bam extension is treated as a separate sample.",
                ),
            Arg::new(STATS_DIR)
                .long(STATS_DIR)
                .takes_value(true)
                .default_value("stats")
                .validator(validate::writable)
                .long_help(
                    "Directory for the per-sample text reports (created if missing). \
                    Reports are saved as <sample>_stats.txt.",
                ),
            Arg::new(PLOTS_DIR)
                .long(PLOTS_DIR)
                .takes_value(true)
                .default_value("plots")
                .validator(validate::writable)
                .long_help(
                    "Directory for the per-sample histograms (created if missing). \
                    Histograms are saved as <sample>_hist.png.",
                ),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .takes_value(true)
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_help("Maximum number of samples processed in parallel."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod scanning {
    use super::*;

    pub const MOTIF: &str = "motif";
    pub const MIN_LENGTH: &str = "min-length";

    pub const SECTION_NAME: &str = "Repeat scanning";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(MOTIF)
                .short('m')
                .long(MOTIF)
                .required(true)
                .takes_value(true)
                .validator(validate::motif)
                .long_help(
                    "Nucleotide motif whose tandem repeats are counted (e.g. CAG). \
                    Matching is literal; the motif is uppercased before scanning.",
                ),
            Arg::new(MIN_LENGTH)
                .long(MIN_LENGTH)
                .takes_value(true)
                .validator(validate::numeric(1usize, usize::MAX))
                .default_value("9")
                .long_help(
                    "Minimum repeat run length in bases. Maximal motif runs shorter than \
                    the threshold are discarded as single-occurrence noise.",
                ),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod reads_filtering {
    use super::*;

    pub const MAPQ: &str = "mapq";

    pub const SECTION_NAME: &str = "Reads filtering";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![Arg::new(MAPQ)
            .long(MAPQ)
            .takes_value(true)
            .validator(validate::numeric(0u8, 255u8))
            .default_value("20")
            .long_help(
                "Count only reads with mapq ≥ threshold; everything below is excluded \
                from the analysis and reported as filtered.",
            )];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(scanning::args()).chain(reads_filtering::args()).collect()
}

pub struct ScanArgs {
    pub motif: Motif,
    pub readfilter: ReadsFilterByQuality,
    pub scanner: TandemRepeatScanner,
    pub bamfiles: Vec<PathBuf>,
    pub statsdir: PathBuf,
    pub plotsdir: PathBuf,
}

impl ScanArgs {
    pub fn new(args: &ArgMatches, factory: &impl Fn() -> ProgressBar) -> Self {
        let motif = parse::motif(factory(), args);
        let readfilter = parse::readfilter(factory(), args);
        let scanner = parse::scanner(factory(), args, motif.clone());
        let bamfiles = parse::bamfiles(factory(), args);
        let (statsdir, plotsdir) = parse::outdirs(factory(), args);
        Self { motif, readfilter, scanner, bamfiles, statsdir, plotsdir }
    }
}
