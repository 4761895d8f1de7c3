use std::path::Path;
use std::str::FromStr;

use crate::core::motif::Motif;

pub fn path(rawpath: &str) -> Result<(), String> {
    let path = Path::new(&rawpath);
    if !path.exists() {
        Err(format!("{} doesn't exist or there is no permission to read it", rawpath))
    } else {
        Ok(())
    }
}

pub fn writable(_rawpath: &str) -> Result<(), String> {
    // Output directories are created on demand, nothing to check upfront
    Ok(())
}

pub fn motif(motif: &str) -> Result<(), String> {
    match Motif::from_str(motif) {
        Ok(_) => Ok(()),
        Err(x) => Err(x),
    }
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Sized,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    move |val: &str| -> Result<(), String> {
        let numeric = match val.parse::<T>() {
            Ok(x) => x,
            Err(_) => return Err(format!("failed to parse {}", val)),
        };

        if numeric < low || numeric > upper {
            return Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn motif() {
        for motif in ["CAG", "a", "ttaggg"] {
            assert!(super::motif(motif).is_ok());
        }
        for motif in ["", "  ", "\t"] {
            assert!(super::motif(motif).is_err())
        }
    }

    #[test]
    fn numeric() {
        let validator = super::numeric(10, 12);
        assert!(validator("9").is_err());
        assert!(validator("10").is_ok());
        assert!(validator("12").is_ok());
        assert!(validator("13").is_err());
        assert!(validator("").is_err());
        assert!(validator("1x").is_err());

        let validator = super::numeric(10, 10);
        assert!(validator("9").is_err());
        assert!(validator("10").is_ok());
        assert!(validator("11").is_err());
    }
}
