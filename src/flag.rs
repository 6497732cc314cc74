use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ContinuityFlag] parsing error
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown continuity flag \"{0}\"")]
    UnknownFlag(String),
}

/// Phase continuity marker, attached to every observation by the
/// upstream cycle slip detector. This crate consumes the five value
/// vocabulary as a fixed contract and never modifies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContinuityFlag {
    /// First epoch of a new continuous (slip free) arc
    Start,
    /// Interior epoch of an ongoing continuous arc
    #[default]
    None,
    /// Last epoch of a continuous arc: the arc is now complete
    End,
    /// Isolated observation without continuous neighbor, not interpolable
    Solo,
    /// Cycle slip boundary, not interpolable as part of either adjacent arc
    Slip,
}

impl std::fmt::Display for ContinuityFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::Start => write!(f, "start"),
            Self::None => write!(f, "none"),
            Self::End => write!(f, "end"),
            Self::Solo => write!(f, "solo"),
            Self::Slip => write!(f, "slip"),
        }
    }
}

impl std::str::FromStr for ContinuityFlag {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "none" => Ok(Self::None),
            "end" => Ok(Self::End),
            "solo" => Ok(Self::Solo),
            "slip" => Ok(Self::Slip),
            _ => Err(Error::UnknownFlag(s.to_string())),
        }
    }
}

impl ContinuityFlag {
    /// True for epochs that can never contribute to an arc:
    /// isolated points and cycle slip boundaries.
    pub fn is_interpolable(&self) -> bool {
        !matches!(self, Self::Solo | Self::Slip)
    }
}

#[cfg(test)]
mod test {
    use super::ContinuityFlag;
    use std::str::FromStr;

    #[test]
    fn flag_parsing() {
        for (desc, expected) in [
            ("start", ContinuityFlag::Start),
            ("none", ContinuityFlag::None),
            ("end", ContinuityFlag::End),
            ("solo", ContinuityFlag::Solo),
            ("slip", ContinuityFlag::Slip),
        ] {
            let flag = ContinuityFlag::from_str(desc).unwrap();
            assert_eq!(flag, expected);
            // vocabulary is a contract: display must round trip
            assert_eq!(flag.to_string(), desc);
        }
        assert!(ContinuityFlag::from_str("gap").is_err());
    }

    #[test]
    fn flag_interpolability() {
        assert!(ContinuityFlag::Start.is_interpolable());
        assert!(ContinuityFlag::None.is_interpolable());
        assert!(ContinuityFlag::End.is_interpolable());
        assert!(!ContinuityFlag::Solo.is_interpolable());
        assert!(!ContinuityFlag::Slip.is_interpolable());
    }
}
