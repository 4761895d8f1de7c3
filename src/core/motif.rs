use std::fmt::{self, Display};
use std::str::FromStr;

/// Uppercased, non-empty nucleotide pattern searched for in read sequences.
/// Matching is purely textual, symbols outside the ACGT alphabet are kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif(String);

impl Motif {
    #[inline]
    pub fn seq(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for Motif {
    type Err = String;

    fn from_str(motif: &str) -> Result<Self, Self::Err> {
        let motif = motif.trim();
        if motif.is_empty() {
            return Err("motif must be a non-empty nucleotide sequence".into());
        }
        Ok(Motif(motif.to_ascii_uppercase()))
    }
}

impl Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        for raw in ["CAG", "cag", " Cag\t"] {
            let motif: Motif = raw.parse().unwrap();
            assert_eq!(motif.seq(), b"CAG");
            assert_eq!(motif.len(), 3);
            assert_eq!(motif.to_string(), "CAG");
        }
        for raw in ["", "  ", "\t"] {
            assert!(raw.parse::<Motif>().is_err());
        }
    }
}
