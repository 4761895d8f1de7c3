use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
pub use rust_htslib::bam::Reader;

use crate::core::error::Result;

pub fn reader(hts: &Path) -> Result<Reader> {
    Ok(Reader::from_path(hts)?)
}

/// Alignment files inside the given directory, sorted so that samples are
/// always processed in a deterministic order.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = fs::read_dir(dir)?
        .filter_map(|x| x.ok())
        .map(|x| x.path())
        .filter(|x| x.is_file() && x.extension().map_or(false, |ext| ext == "bam"))
        .sorted()
        .collect_vec();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(super::discover(dir.path()).unwrap().is_empty());

        for name in ["b.bam", "a.bam", "ignored.sam", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.bam")).unwrap();

        let files = super::discover(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|x| x.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.bam", "b.bam"]);
    }
}
