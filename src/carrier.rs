use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::SPEED_OF_LIGHT_M_S;

/// [Carrier] parsing error
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown carrier \"{0}\"")]
    UnknownCarrier(String),
}

/// GPS carrier signal. Only L1 and L2 are processed here,
/// this crate does not support other constellations.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Carrier {
    /// L1 (GPS) 1575.42 MHz
    #[default]
    L1,
    /// L2 (GPS) 1227.60 MHz
    L2,
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::L1 => write!(f, "L1"),
            Self::L2 => write!(f, "L2"),
        }
    }
}

impl std::str::FromStr for Carrier {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            _ => Err(Error::UnknownCarrier(s.to_string())),
        }
    }
}

impl Carrier {
    /// Returns carrier frequency in Hertz
    pub fn frequency(&self) -> f64 {
        match self {
            Self::L1 => 1575.42E6_f64,
            Self::L2 => 1227.60E6_f64,
        }
    }

    /// Returns carrier wavelength in meters
    pub fn wavelength(&self) -> f64 {
        SPEED_OF_LIGHT_M_S / self.frequency()
    }

    /// Frequency band index: 1 for L1, 2 for L2.
    /// Matches the D1/D2 and L1/L2 observable numbering.
    pub fn band(&self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Carrier;
    use std::str::FromStr;

    #[test]
    fn carrier_parsing() {
        for (desc, expected) in [("L1", Carrier::L1), ("l2", Carrier::L2), (" L1 ", Carrier::L1)] {
            let carrier = Carrier::from_str(desc).unwrap();
            assert_eq!(carrier, expected);
            assert_eq!(Carrier::from_str(&carrier.to_string()).unwrap(), carrier);
        }
        assert!(Carrier::from_str("E5").is_err());
    }

    #[test]
    fn carrier_wavelength() {
        assert!((Carrier::L1.wavelength() - 0.19029367).abs() < 1.0E-6);
        assert!((Carrier::L2.wavelength() - 0.24421021).abs() < 1.0E-6);
    }
}
