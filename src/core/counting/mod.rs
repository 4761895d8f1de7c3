use derive_more::{Add, Constructor};

pub use repcounter::BaseRepeatCounter;

use crate::core::read::AlignedRead;

mod repcounter;

/// Explicit per-sample read accounting, carried through the pipeline instead
/// of module-level counters so that samples stay independent.
#[derive(Constructor, Add, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReadStats {
    pub total: u32,
    pub filtered: u32,
}

pub trait RepeatCounter<R: AlignedRead> {
    fn count(&mut self, read: &R);
    fn stats(&self) -> ReadStats;
    fn counts(&self) -> &[u32];
    fn dissolve(self) -> (ReadStats, Vec<u32>);
}
