use clap::{crate_authors, crate_name, crate_version, App, AppSettings};
use indicatif::{MultiProgress, ProgressBar};
use rayon::ThreadPoolBuilder;

use rex::cli;

const JOIN_ERROR: &str = "Failed to render progress bars";

fn main() {
    let matches = App::new(crate_name!())
        .author(crate_authors!("\n"))
        .version(crate_version!())
        .max_term_width(120)
        .setting(AppSettings::DeriveDisplayOrder)
        .args(cli::scan::args())
        .get_matches();

    let masterbar = MultiProgress::new();
    let style = cli::shared::style::parse::with_progress();
    let factory = || masterbar.add(ProgressBar::new_spinner().with_style(style.clone()));

    let threads = cli::scan::parse::threads(factory(), &matches);
    ThreadPoolBuilder::new().num_threads(threads).build_global().expect("Failed to initialize thread pool");

    rayon::scope(|s| {
        s.spawn(|_| cli::scan::run(&matches, &factory));
        if threads != 1 {
            masterbar.join().expect(JOIN_ERROR);
        }
    });
    if threads == 1 {
        masterbar.join().expect(JOIN_ERROR);
    }
}
