//! Session wide observation storage
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

use crate::prelude::{Carrier, ContinuityFlag, Epoch, SV};

/// Signal observation on a single [Carrier] frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalObservation {
    /// [Carrier] frequency.
    pub carrier: Carrier,
    /// Pseudo range observation, expressed in meters.
    pub pseudo_range_m: Option<f64>,
    /// Carrier phase observation, expressed in cycles.
    pub phase_cycles: Option<f64>,
    /// Doppler (phase rate) in Hz. Missing on input, reconstructed
    /// by the [DopplerEstimator](crate::prelude::DopplerEstimator);
    /// NaN marks epochs that cannot be interpolated.
    pub doppler_hz: Option<f64>,
}

impl SignalObservation {
    /// Creates new carrier phase [SignalObservation] (in cycles).
    pub fn phase_cycles(carrier: Carrier, phase_cycles: f64) -> Self {
        Self {
            carrier,
            doppler_hz: None,
            pseudo_range_m: None,
            phase_cycles: Some(phase_cycles),
        }
    }

    /// Creates new pseudo range [SignalObservation] (in meters).
    pub fn pseudo_range(carrier: Carrier, pseudo_range_m: f64) -> Self {
        Self {
            carrier,
            doppler_hz: None,
            phase_cycles: None,
            pseudo_range_m: Some(pseudo_range_m),
        }
    }

    /// Copies and returns new [SignalObservation] with defined
    /// pseudo range (in meters).
    pub fn with_pseudo_range_m(&self, pseudo_range_m: f64) -> Self {
        let mut s = self.clone();
        s.pseudo_range_m = Some(pseudo_range_m);
        s
    }

    /// Copies and returns new [SignalObservation] with defined
    /// Doppler shift (in Hz).
    pub fn with_doppler_hz(&self, doppler_hz: f64) -> Self {
        let mut s = self.clone();
        s.doppler_hz = Some(doppler_hz);
        s
    }
}

/// Complete observation record for one satellite at one [Epoch].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    /// Phase continuity marker, attached upstream by the cycle slip detector.
    pub flag: ContinuityFlag,
    /// Signal observations, one per tracked [Carrier].
    pub signals: Vec<SignalObservation>,
}

impl Observation {
    /// Builds a new [Observation] with given continuity marker.
    pub fn new(flag: ContinuityFlag) -> Self {
        Self {
            flag,
            signals: Vec::with_capacity(2),
        }
    }

    /// Copies and returns new [Observation] with this carrier
    /// phase observation (in cycles) attached.
    pub fn with_phase_cycles(&self, carrier: Carrier, phase_cycles: f64) -> Self {
        let mut s = self.clone();
        match s.signals.iter_mut().find(|sig| sig.carrier == carrier) {
            Some(sig) => sig.phase_cycles = Some(phase_cycles),
            None => s
                .signals
                .push(SignalObservation::phase_cycles(carrier, phase_cycles)),
        }
        s
    }

    /// Copies and returns new [Observation] with this pseudo range
    /// observation (in meters) attached.
    pub fn with_pseudo_range_m(&self, carrier: Carrier, pseudo_range_m: f64) -> Self {
        let mut s = self.clone();
        match s.signals.iter_mut().find(|sig| sig.carrier == carrier) {
            Some(sig) => sig.pseudo_range_m = Some(pseudo_range_m),
            None => s
                .signals
                .push(SignalObservation::pseudo_range(carrier, pseudo_range_m)),
        }
        s
    }

    /// Returns carrier phase in cycles for this [Carrier], if observed.
    pub fn phase_cycles(&self, carrier: Carrier) -> Option<f64> {
        self.signals
            .iter()
            .filter(|sig| sig.carrier == carrier)
            .find_map(|sig| sig.phase_cycles)
    }

    /// Returns Doppler shift in Hz for this [Carrier], if present.
    /// NaN marks a non interpolable epoch.
    pub fn doppler_hz(&self, carrier: Carrier) -> Option<f64> {
        self.signals
            .iter()
            .filter(|sig| sig.carrier == carrier)
            .find_map(|sig| sig.doppler_hz)
    }

    /// Defines the Doppler shift in Hz for this [Carrier],
    /// allocating the signal slot when the carrier was not observed.
    pub fn set_doppler_hz(&mut self, carrier: Carrier, doppler_hz: f64) {
        match self.signals.iter_mut().find(|sig| sig.carrier == carrier) {
            Some(sig) => sig.doppler_hz = Some(doppler_hz),
            None => self.signals.push(SignalObservation {
                carrier,
                pseudo_range_m: None,
                phase_cycles: None,
                doppler_hz: Some(doppler_hz),
            }),
        }
    }
}

/// [ObservationSet] is the complete observation session:
/// chronologically sorted [Epoch]s, each holding the [Observation]
/// of every satellite in sight at that point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    pub(crate) inner: BTreeMap<Epoch, HashMap<SV, Observation>>,
}

impl ObservationSet {
    /// Builds a new empty [ObservationSet].
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this session holds no epoch at all.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of epochs in this session.
    pub fn num_epochs(&self) -> usize {
        self.inner.len()
    }

    /// Chronological [Epoch] iterator.
    pub fn epochs(&self) -> impl Iterator<Item = Epoch> + '_ {
        self.inner.keys().copied()
    }

    /// Unique satellites observed over the whole session, sorted.
    pub fn satellites(&self) -> Vec<SV> {
        self.inner
            .values()
            .flat_map(|svs| svs.keys().copied())
            .unique()
            .sorted()
            .collect()
    }

    /// Attaches this [Observation] to (epoch, satellite),
    /// replacing any previous record.
    pub fn insert(&mut self, t: Epoch, sv: SV, observation: Observation) {
        self.inner.entry(t).or_default().insert(sv, observation);
    }

    /// Returns the [Observation] of this satellite at this [Epoch], if any.
    pub fn record(&self, t: Epoch, sv: SV) -> Option<&Observation> {
        self.inner.get(&t)?.get(&sv)
    }

    /// Mutable access to the [Observation] of this satellite at this [Epoch].
    pub fn record_mut(&mut self, t: Epoch, sv: SV) -> Option<&mut Observation> {
        self.inner.get_mut(&t)?.get_mut(&sv)
    }
}
