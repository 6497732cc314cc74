use thiserror::Error;

use crate::prelude::{Carrier, Epoch, SV};

/// Errors that abort a Doppler estimation run.
/// There is no partial success: on the first error encountered,
/// the whole session is dropped and no output is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A record flagged as part of an arc is missing its carrier phase.
    /// The input session is inconsistent: upstream only marks
    /// `start`, `none` and `end` on observed phases.
    #[error("{sv}({epoch}): missing {carrier} phase inside arc")]
    MissingPhase {
        /// [Epoch] of the offending record
        epoch: Epoch,
        /// Offending satellite
        sv: SV,
        /// [Carrier] whose phase is missing
        carrier: Carrier,
    },

    /// An estimated rate mapped back onto an epoch where this satellite
    /// has no record. Arcs are contiguous by construction, so this is
    /// an arc invariant breach in the input session.
    #[error("{sv}({epoch}): no record inside own arc")]
    InconsistentArc {
        /// [Epoch] the rate value mapped to
        epoch: Epoch,
        /// Offending satellite
        sv: SV,
    },

    /// The least squares solver failed on this arc.
    /// Ill conditioning is tolerated (and logged), this is only
    /// returned when no solution was obtained at all.
    #[error("{sv}({epoch}): {carrier} arc fit failure")]
    FitFailure {
        /// Last [Epoch] of the arc
        epoch: Epoch,
        /// Offending satellite
        sv: SV,
        /// Processed [Carrier]
        carrier: Carrier,
    },
}
