use std::marker::PhantomData;

use crate::core::filtering::reads::ReadsFilter;
use crate::core::read::{AlignedRead, SequencedRead};
use crate::core::scanning::RepeatScanner;

use super::{ReadStats, RepeatCounter};

pub struct BaseRepeatCounter<R: AlignedRead, Filter: ReadsFilter<R>, Scanner: RepeatScanner> {
    filter: Filter,
    scanner: Scanner,
    stats: ReadStats,
    counts: Vec<u32>,
    phantom: PhantomData<fn() -> R>,
}

impl<R: AlignedRead, Filter: ReadsFilter<R>, Scanner: RepeatScanner> BaseRepeatCounter<R, Filter, Scanner> {
    pub fn new(filter: Filter, scanner: Scanner) -> Self {
        BaseRepeatCounter { filter, scanner, stats: Default::default(), counts: Vec::new(), phantom: Default::default() }
    }
}

impl<R: AlignedRead, Filter: ReadsFilter<R>, Scanner: RepeatScanner> RepeatCounter<R>
    for BaseRepeatCounter<R, Filter, Scanner>
{
    fn count(&mut self, read: &R) {
        self.stats.total += 1;
        if !self.filter.is_read_ok(read) {
            self.stats.filtered += 1;
            return;
        }
        let repeats = self.scanner.scan(&read.seq());
        // Reads without a single qualifying run never enter the distribution
        if repeats > 0 {
            self.counts.push(repeats);
        }
    }

    #[inline]
    fn stats(&self) -> ReadStats {
        self.stats
    }

    #[inline]
    fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    fn dissolve(self) -> (ReadStats, Vec<u32>) {
        (self.stats, self.counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::filtering::reads::MockReadsFilter;
    use crate::core::read::MockRead;
    use crate::core::scanning::MockRepeatScanner;

    use super::*;

    fn read() -> MockRead {
        let mut read = MockRead::new();
        read.expect_seq().returning(|| b"NNN".to_vec());
        read
    }

    #[test]
    fn rejected_reads() {
        let mut filter = MockReadsFilter::new();
        filter.expect_is_read_ok().times(3).return_const(false);
        // The scanner must never see a rejected read
        let scanner = MockRepeatScanner::new();

        let mut counter = BaseRepeatCounter::new(filter, scanner);
        for _ in 0..3 {
            counter.count(&read());
        }

        assert_eq!(counter.stats(), ReadStats::new(3, 3));
        assert!(counter.counts().is_empty());
    }

    #[test]
    fn accepted_reads() {
        let mut filter = MockReadsFilter::new();
        filter.expect_is_read_ok().times(3).return_const(true);

        let mut scanner = MockRepeatScanner::new();
        for repeats in [3u32, 0, 5] {
            scanner.expect_scan().once().return_const(repeats);
        }

        let mut counter = BaseRepeatCounter::new(filter, scanner);
        for _ in 0..3 {
            counter.count(&read());
        }

        // Zero totals are dropped, everything else is kept in read order
        assert_eq!(counter.stats(), ReadStats::new(3, 0));
        assert_eq!(counter.counts(), &[3, 5]);
    }

    #[test]
    fn mixed_reads() {
        let mut filter = MockReadsFilter::new();
        for ok in [true, false, true, false] {
            filter.expect_is_read_ok().once().return_const(ok);
        }

        let mut scanner = MockRepeatScanner::new();
        for repeats in [2u32, 4] {
            scanner.expect_scan().once().return_const(repeats);
        }

        let mut counter = BaseRepeatCounter::new(filter, scanner);
        for _ in 0..4 {
            counter.count(&read());
        }

        let (stats, counts) = counter.dissolve();
        assert_eq!(stats, ReadStats::new(4, 2));
        assert_eq!(counts, vec![2, 4]);
    }
}
