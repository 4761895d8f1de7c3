#[cfg(test)]
use mockall::automock;

pub use tandem::TandemRepeatScanner;

mod tandem;

/// Turns a read's base sequence into the aggregate number of motif units
/// contained in qualifying repeat runs.
#[cfg_attr(test, automock)]
pub trait RepeatScanner {
    fn scan(&self, seq: &[u8]) -> u32;
}
