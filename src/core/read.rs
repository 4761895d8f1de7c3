#[cfg(test)]
use mockall::mock;
use rust_htslib::bam::Record;

#[allow(clippy::len_without_is_empty)]
pub trait SequencedRead {
    fn name(&self) -> &[u8];
    fn seq(&self) -> Vec<u8>;
    fn len(&self) -> usize;
}

pub trait AlignedRead: SequencedRead {
    fn mapq(&self) -> u8;
}

#[cfg(test)]
mock! {
    pub Read {}
    impl AlignedRead for Read {
        fn mapq(&self) -> u8;
    }

    impl SequencedRead for Read {
        fn name(&self) -> &[u8];
        fn seq(&self) -> Vec<u8>;
        fn len(&self) -> usize;
    }
}

impl SequencedRead for Record {
    #[inline]
    fn name(&self) -> &[u8] {
        self.qname()
    }

    #[inline]
    fn seq(&self) -> Vec<u8> {
        self.seq().as_bytes()
    }

    #[inline]
    fn len(&self) -> usize {
        self.seq_len()
    }
}

impl AlignedRead for Record {
    #[inline]
    fn mapq(&self) -> u8 {
        self.mapq()
    }
}
