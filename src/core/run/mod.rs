use std::path::Path;

use rust_htslib::bam::{Read, Record};

use crate::core::counting::{ReadStats, RepeatCounter};
use crate::core::error::Result;
use crate::core::io::hts;

/// Outcome of scanning one sample for one motif.
#[derive(Clone, Debug)]
pub struct SampleScan {
    pub name: String,
    pub stats: ReadStats,
    pub counts: Vec<u32>,
}

// Sample identifier = the input file base name without the extension
pub fn stem(hts: &Path) -> String {
    hts.file_stem().map(|x| x.to_string_lossy().to_string()).unwrap_or_else(|| hts.display().to_string())
}

/// Streams a single alignment file through the counter. The reader is scoped
/// to this function and released on every exit path.
pub fn scan(hts: &Path, mut counter: impl RepeatCounter<Record>) -> Result<SampleScan> {
    let mut reader = hts::reader(hts)?;

    let mut record = Record::new();
    while let Some(r) = reader.read(&mut record) {
        r?;
        counter.count(&record);
    }

    let (stats, counts) = counter.dissolve();
    Ok(SampleScan { name: stem(hts), stats, counts })
}
