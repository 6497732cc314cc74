use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::prelude::{Duration, Epoch};

/// [TimeFrame] definition error
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("scenario stop time must follow start time")]
    InvalidTimeSpan,
    #[error("sampling period must be strictly positive")]
    InvalidSamplingPeriod,
}

/// [TimeFrame] describes the observation scenario: start time, stop time
/// and the constant sampling period of the observation file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct TimeFrame {
    /// Scenario start [Epoch] (inclusive)
    pub start: Epoch,
    /// Scenario stop [Epoch] (inclusive)
    pub stop: Epoch,
    /// Constant sampling period
    pub sampling_period: Duration,
}

impl TimeFrame {
    /// Defines a new [TimeFrame], verifying that the span and
    /// sampling period are coherent.
    pub fn new(start: Epoch, stop: Epoch, sampling_period: Duration) -> Result<Self, Error> {
        if stop < start {
            return Err(Error::InvalidTimeSpan);
        }
        if sampling_period <= Duration::ZERO {
            return Err(Error::InvalidSamplingPeriod);
        }
        Ok(Self {
            start,
            stop,
            sampling_period,
        })
    }

    /// True if this [Epoch] lies within the scenario bounds.
    pub fn contains(&self, t: Epoch) -> bool {
        t >= self.start && t <= self.stop
    }

    /// Sampling period expressed in seconds.
    pub fn sampling_period_seconds(&self) -> f64 {
        self.sampling_period.to_seconds()
    }

    /// Iterates the theoretical epochs of this scenario,
    /// start to stop, one per sampling period.
    pub fn epochs(&self) -> TimeFrameIter {
        TimeFrameIter {
            frame: *self,
            next: Some(self.start),
        }
    }
}

/// Chronological [Epoch] iterator over a [TimeFrame].
pub struct TimeFrameIter {
    frame: TimeFrame,
    next: Option<Epoch>,
}

impl Iterator for TimeFrameIter {
    type Item = Epoch;
    fn next(&mut self) -> Option<Epoch> {
        let t = self.next?;
        if t > self.frame.stop {
            self.next = None;
            return None;
        }
        self.next = Some(t + self.frame.sampling_period);
        Some(t)
    }
}
