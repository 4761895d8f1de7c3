use derive_getters::Getters;
use derive_more::Constructor;

use super::{AlignedRead, ReadsFilter};

#[derive(Constructor, Getters, Copy, Clone)]
pub struct ReadsFilterByQuality {
    mapq: u8,
}

impl<R: AlignedRead> ReadsFilter<R> for ReadsFilterByQuality {
    // Reads below the mapping quality threshold are excluded from all analysis
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        record.mapq() >= self.mapq
    }
}
