//! Synthetic observation sessions
use crate::prelude::{
    Carrier, Constellation, ContinuityFlag, Duration, Epoch, Observation, ObservationSet,
    TimeFrame, SV,
};

use std::str::FromStr;

pub fn g01() -> SV {
    SV::new(Constellation::GPS, 1)
}

pub fn g05() -> SV {
    SV::new(Constellation::GPS, 5)
}

pub fn t0() -> Epoch {
    Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap()
}

pub fn sampling_period() -> Duration {
    Duration::from_seconds(1.0)
}

/// [TimeFrame] spanning this many sampling periods past t0.
pub fn frame(num_epochs: usize) -> TimeFrame {
    let dt = sampling_period();
    TimeFrame::new(t0(), t0() + dt * (num_epochs as i64 - 1), dt).unwrap()
}

/// Attaches one satellite to the session: one record per listed
/// (flag, L1 phase) entry, one sampling period apart, starting at t0.
pub fn attach_l1_track(
    set: &mut ObservationSet,
    sv: SV,
    track: &[(ContinuityFlag, f64)],
) {
    let dt = sampling_period();
    for (i, (flag, phase)) in track.iter().enumerate() {
        let t = t0() + dt * i as i64;
        let obs = Observation::new(*flag).with_phase_cycles(Carrier::L1, *phase);
        set.insert(t, sv, obs);
    }
}

/// Single satellite, single 5 epoch arc, L1 phase ramping
/// by +1.0 cycle per epoch.
pub fn linear_arc_session() -> ObservationSet {
    let mut set = ObservationSet::new();
    attach_l1_track(
        &mut set,
        g01(),
        &[
            (ContinuityFlag::Start, 100.0),
            (ContinuityFlag::None, 101.0),
            (ContinuityFlag::None, 102.0),
            (ContinuityFlag::None, 103.0),
            (ContinuityFlag::End, 104.0),
        ],
    );
    set
}

/// G01 carries a clean 5 epoch arc, G05 is isolated everywhere.
pub fn arc_and_solo_session() -> ObservationSet {
    let mut set = linear_arc_session();
    attach_l1_track(
        &mut set,
        g05(),
        &[
            (ContinuityFlag::Solo, 500.0),
            (ContinuityFlag::Solo, 500.2),
            (ContinuityFlag::Solo, 500.4),
            (ContinuityFlag::Solo, 500.6),
            (ContinuityFlag::Solo, 500.8),
        ],
    );
    set
}

/// Single satellite, dual frequency: L1 ramps +1.0, L2 ramps -2.0
/// cycles per epoch over the same 5 epoch arc.
pub fn dual_frequency_session() -> ObservationSet {
    let mut set = ObservationSet::new();
    let dt = sampling_period();
    let flags = [
        ContinuityFlag::Start,
        ContinuityFlag::None,
        ContinuityFlag::None,
        ContinuityFlag::None,
        ContinuityFlag::End,
    ];
    for (i, flag) in flags.iter().enumerate() {
        let t = t0() + dt * i as i64;
        let obs = Observation::new(*flag)
            .with_phase_cycles(Carrier::L1, 100.0 + i as f64)
            .with_phase_cycles(Carrier::L2, 200.0 - 2.0 * i as f64);
        set.insert(t, g01(), obs);
    }
    set
}
