#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::prelude::Carrier;

fn default_max_fit_degree() -> usize {
    19
}

fn default_derivative_offset() -> f64 {
    0.01
}

/// Single or dual frequency processing.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum FrequencyMode {
    /// L1 only
    #[default]
    SingleFrequency,
    /// L1 and L2
    DualFrequency,
}

impl std::fmt::Display for FrequencyMode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SingleFrequency => write!(fmt, "single frequency"),
            Self::DualFrequency => write!(fmt, "dual frequency"),
        }
    }
}

impl FrequencyMode {
    /// [Carrier]s processed in this mode, L1 first.
    pub fn carriers(&self) -> &'static [Carrier] {
        match self {
            Self::SingleFrequency => &[Carrier::L1],
            Self::DualFrequency => &[Carrier::L1, Carrier::L2],
        }
    }
}

/// Doppler estimation settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Single or dual frequency processing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub frequency_mode: FrequencyMode,

    /// Highest polynomial degree used when fitting a carrier phase arc.
    /// The actual degree is clamped to (arc length - 1) so the
    /// least squares problem always remains fully determined.
    #[cfg_attr(feature = "serde", serde(default = "default_max_fit_degree"))]
    pub max_fit_degree: usize,

    /// Normalized abscissa offset used by the first order
    /// finite difference of the fitted polynomial.
    #[cfg_attr(feature = "serde", serde(default = "default_derivative_offset"))]
    pub derivative_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency_mode: FrequencyMode::default(),
            max_fit_degree: default_max_fit_degree(),
            derivative_offset: default_derivative_offset(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with this [FrequencyMode].
    pub fn with_frequency_mode(&self, mode: FrequencyMode) -> Self {
        let mut s = self.clone();
        s.frequency_mode = mode;
        s
    }

    /// Copies and returns [Config] with this maximal fit degree.
    pub fn with_max_fit_degree(&self, degree: usize) -> Self {
        let mut s = self.clone();
        s.max_fit_degree = degree;
        s
    }
}
