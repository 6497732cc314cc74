//! Doppler (carrier phase rate) estimation
use log::{debug, info, warn};

use polyfit_rs::polyfit_rs::polyfit;

use crate::{
    arc::{ArcEvent, ArcTracker},
    error::Error,
    prelude::{Config, Epoch, ObservationSet, TimeFrame, SV},
};

/// Evaluates a polynomial at x, coefficients lowest order first.
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// [DopplerEstimator] reconstructs the Doppler observable (D1/D2)
/// from carrier phase (L1/L2), for sessions where the receiver did
/// not deliver it. Each slip free arc is fitted with a least squares
/// polynomial and the rate is taken from its first order derivative.
///
/// The input session must carry the continuity flags attached by the
/// upstream cycle slip detector: isolated points and slip boundaries
/// receive an invalid (NaN) Doppler, everything else is estimated
/// once its arc completes.
#[derive(Debug, Clone, Default)]
pub struct DopplerEstimator {
    cfg: Config,
}

impl DopplerEstimator {
    /// Builds a new [DopplerEstimator] with given [Config].
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Reconstructs Doppler over a complete observation session.
    ///
    /// ## Input
    /// - set: the session [ObservationSet], phases and continuity
    ///   flags attached. Never modified.
    /// - good_sats: satellites to process (typically: without outage
    ///   over the session), in the caller's preferred order. Satellites
    ///   outside this set are left untouched.
    /// - frame: scenario [TimeFrame], bounds the iteration and defines
    ///   the sampling period the rates are scaled with.
    ///
    /// ## Output
    /// - A new [ObservationSet] where every visited record carries
    ///   a Doppler value on each processed carrier: NaN for non
    ///   interpolable epochs, the estimated rate (in Hz) inside
    ///   completed arcs. On the first inconsistent record, the whole
    ///   run is dropped and the [Error] locates the offender.
    pub fn estimate(
        &self,
        set: &ObservationSet,
        good_sats: &[SV],
        frame: TimeFrame,
    ) -> Result<ObservationSet, Error> {
        let mut output = set.clone();

        let step_s = frame.sampling_period_seconds();

        let epochs: Vec<Epoch> = set
            .inner
            .range(frame.start..=frame.stop)
            .map(|(t, _)| *t)
            .collect();

        info!(
            "doppler reconstruction: {} epochs, {} satellites, {}",
            epochs.len(),
            good_sats.len(),
            self.cfg.frequency_mode,
        );

        for carrier in self.cfg.frequency_mode.carriers() {
            for sv in good_sats.iter() {
                // each (satellite, carrier) pair gets its own arc state
                let mut tracker = ArcTracker::new();

                for t in epochs.iter() {
                    let record = match set.record(*t, *sv) {
                        Some(record) => record,
                        None => continue, // not in sight
                    };

                    match tracker.track(record.flag, record.phase_cycles(*carrier)) {
                        ArcEvent::Tracking => {},
                        ArcEvent::Invalidated => {
                            if let Some(record) = output.record_mut(*t, *sv) {
                                record.set_doppler_hz(*carrier, f64::NAN);
                            }
                        },
                        ArcEvent::PhaseLoss => {
                            return Err(Error::MissingPhase {
                                epoch: *t,
                                sv: *sv,
                                carrier: *carrier,
                            });
                        },
                        ArcEvent::Completed(phases) => {
                            let rates =
                                self.arc_rates(&phases, step_s)
                                    .ok_or(Error::FitFailure {
                                        epoch: *t,
                                        sv: *sv,
                                        carrier: *carrier,
                                    })?;

                            debug!(
                                "{}({}) - {}: arc completed ({} epochs)",
                                sv,
                                t,
                                carrier,
                                rates.len()
                            );

                            // redistribute: k-th (oldest first) value
                            // lands on t - (n-1-k) sampling periods
                            let n = rates.len();

                            for (k, rate) in rates.iter().enumerate() {
                                let t_k = *t - frame.sampling_period * (n - 1 - k) as i64;

                                match output.record_mut(t_k, *sv) {
                                    Some(record) => {
                                        record.set_doppler_hz(*carrier, *rate);
                                    },
                                    None => {
                                        return Err(Error::InconsistentArc {
                                            epoch: t_k,
                                            sv: *sv,
                                        });
                                    },
                                }
                            }
                        },
                    }
                }
            }
        }

        info!("doppler reconstruction completed");
        Ok(output)
    }

    /// Fits one completed arc (phases in cycles, oldest first) and
    /// returns the rate estimate at each of its epochs, in Hz.
    fn arc_rates(&self, phases: &[f64], step_s: f64) -> Option<Vec<f64>> {
        let n = phases.len();

        let degree = self.cfg.max_fit_degree.min(n - 1);
        if degree < self.cfg.max_fit_degree {
            // short arc: degree drops so the solve remains determined
            warn!(
                "short arc ({} points): fit degree clamped to {}",
                n, degree
            );
        }

        // normalized abscissa 0..n-1
        let indices: Vec<f64> = (0..n).map(|i| i as f64).collect();

        let coefficients = polyfit(&indices, phases, degree).ok()?;

        let delta = self.cfg.derivative_offset;

        // first order derivative of the fitted polynomial,
        // by forward difference over an infinitesimal offset
        let rates = indices
            .iter()
            .zip(phases.iter())
            .map(|(index, phase)| {
                let phase_delta = polyval(&coefficients, index + delta);
                (phase - phase_delta) / (delta * step_s)
            })
            .collect();

        Some(rates)
    }
}

#[cfg(test)]
mod test {
    use super::{polyval, DopplerEstimator};
    use crate::prelude::Config;

    #[test]
    fn polynomial_evaluation() {
        // 2 + 3x + x^2
        let coefficients = [2.0, 3.0, 1.0];
        assert_eq!(polyval(&coefficients, 0.0), 2.0);
        assert_eq!(polyval(&coefficients, 1.0), 6.0);
        assert_eq!(polyval(&coefficients, 2.0), 12.0);
    }

    #[test]
    fn linear_arc_rates() {
        let estimator = DopplerEstimator::new(Config::default());

        // 1 cycle per 30s epoch: -1/30 Hz everywhere
        let phases: Vec<f64> = (0..5).map(|i| 100.0 + i as f64).collect();
        let rates = estimator.arc_rates(&phases, 30.0).unwrap();

        assert_eq!(rates.len(), phases.len());
        for rate in rates {
            assert!(
                (rate - (-1.0 / 30.0)).abs() < 1.0E-3,
                "rate {} too far from expected {}",
                rate,
                -1.0 / 30.0
            );
        }
    }

    #[test]
    fn single_point_arc() {
        let estimator = DopplerEstimator::new(Config::default());
        let rates = estimator.arc_rates(&[123.456], 30.0).unwrap();
        assert_eq!(rates.len(), 1);
        assert!(rates[0].is_finite());
    }
}
