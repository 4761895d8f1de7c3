use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while processing a single sample. Each of them aborts the
/// affected sample only, the remaining samples continue.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read the alignment file: {0}")]
    Hts(#[from] rust_htslib::errors::Error),
    #[error("failed to write the report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render the histogram: {0}")]
    Plot(String),
}
