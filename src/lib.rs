#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod arc;
mod carrier;
mod cfg;
mod constants;
mod error;
mod estimator;
mod flag;
mod observation;
mod time;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::carrier::Carrier;
    pub use crate::cfg::{Config, FrequencyMode};
    pub use crate::error::Error;
    pub use crate::estimator::DopplerEstimator;
    pub use crate::flag::ContinuityFlag;
    pub use crate::observation::{Observation, ObservationSet, SignalObservation};
    pub use crate::time::{TimeFrame, TimeFrameIter};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

// pub export
pub use error::Error;
