//! Carrier phase arc tracking
use crate::prelude::ContinuityFlag;

/// Outcome of one [ArcTracker] transition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArcEvent {
    /// Isolated point or cycle slip boundary:
    /// the sentinel must be written for this epoch.
    Invalidated,
    /// Arc still accumulating, nothing to emit yet.
    Tracking,
    /// Arc is complete: phases are handed over (oldest first)
    /// and the tracker is reset.
    Completed(Vec<f64>),
    /// Arc epoch without a phase value: input session is broken.
    PhaseLoss,
}

/// [ArcTracker] follows the continuity flags of one (satellite, carrier)
/// pair through time and accumulates the carrier phases of the arc in
/// progress. One instance per pair, epochs fed in chronological order.
#[derive(Debug, Default)]
pub(crate) struct ArcTracker {
    /// Phases of the arc in progress, oldest first
    buffer: Vec<f64>,
    /// Asserted by the `end` marker: arc complete
    ready: bool,
}

impl ArcTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the continuity marker and (possible) carrier phase
    /// of the next epoch in chronological order.
    pub fn track(&mut self, flag: ContinuityFlag, phase_cycles: Option<f64>) -> ArcEvent {
        match flag {
            // solo/slip never contribute to an arc:
            // the buffer is left untouched, only readiness is dropped.
            ContinuityFlag::Solo | ContinuityFlag::Slip => {
                self.ready = false;
                return ArcEvent::Invalidated;
            },
            ContinuityFlag::Start => {
                self.buffer.clear();
                self.ready = false;
            },
            ContinuityFlag::None => {
                self.ready = false;
            },
            ContinuityFlag::End => {
                self.ready = true;
            },
        }

        match phase_cycles {
            Some(value) => self.buffer.push(value),
            None => return ArcEvent::PhaseLoss,
        }

        if self.ready {
            self.ready = false;
            ArcEvent::Completed(std::mem::take(&mut self.buffer))
        } else {
            ArcEvent::Tracking
        }
    }
}
