//! Length of stay: regression over many look-back horizons per stay
//!
//! The whole stay, `(-eps, los + eps)`, is kept as the trimmed event stream.
//! Prediction points are laid on a regular grid `0, rate, 2 * rate, ...` below
//! `los + eps`. A point `t` becomes a sample when both
//!
//! - `t > shortest_length`, a minimum amount of observation, and
//! - `t > t0`, where `t0` is the time of the first retained event, so at least
//!   one measurement precedes the prediction.
//!
//! The target is the remaining stay `los - t`. Near the end of the stay it
//! may come out slightly negative from the tolerance; it is kept as is.

use icubench_episode::{DEFAULT_EPS, Stay, TimeWindow, TrimmedStay};

use crate::{
    error::ParameterError,
    generator::{Extraction, Horizon, SampleGenerator, labeled_length_of_stay},
    sample::Target,
    skip::SkipReason,
};

pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;
pub const DEFAULT_SHORTEST_LENGTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthOfStayTask {
    sample_rate: f64,
    shortest_length: f64,
    eps: f64,
}

impl Default for LengthOfStayTask {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            shortest_length: DEFAULT_SHORTEST_LENGTH,
            eps: DEFAULT_EPS,
        }
    }
}

impl LengthOfStayTask {
    pub fn new(sample_rate: f64, shortest_length: f64) -> Result<Self, ParameterError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ParameterError::SampleRate(sample_rate));
        }
        if !shortest_length.is_finite() {
            return Err(ParameterError::ShortestLength(shortest_length));
        }
        Ok(Self {
            sample_rate,
            shortest_length,
            eps: DEFAULT_EPS,
        })
    }

    pub fn with_eps(self, eps: f64) -> Result<Self, ParameterError> {
        if !(eps.is_finite() && eps >= 0.0) {
            return Err(ParameterError::Tolerance(eps));
        }
        Ok(Self { eps, ..self })
    }

    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    #[must_use]
    pub fn shortest_length(&self) -> f64 {
        self.shortest_length
    }

    /// Candidate prediction times of a stay lasting `los` hours.
    ///
    /// The grid starts at 0 and holds `ceil((los + eps) / rate)` points, each
    /// computed as `i * rate` so that rounding does not accumulate.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn candidate_times(&self, los: f64) -> impl Iterator<Item = f64> + use<> {
        let count = ((los + self.eps) / self.sample_rate).ceil();
        let count = if count > 0.0 { count as usize } else { 0 };
        let rate = self.sample_rate;
        (0..count).map(move |i| i as f64 * rate)
    }
}

impl SampleGenerator for LengthOfStayTask {
    fn name(&self) -> &'static str {
        "length-of-stay"
    }

    fn generate(&self, stay: Stay) -> Result<Extraction, SkipReason> {
        let events_name = stay.trimmed_events_name();
        let label_name = stay.trimmed_label_name();
        let parts = stay.into_parts();

        let (label, los) = labeled_length_of_stay(parts.label)?;

        let window = TimeWindow::from_admission(los).with_eps(self.eps);
        let events = window.apply(parts.events);
        let first_event = events.first().ok_or(SkipReason::EmptyWindow)?.time;

        let horizons = self
            .candidate_times(los)
            .filter(|&t| t > self.shortest_length && t > first_event)
            .map(|t| Horizon {
                period_length: t,
                target: Target::RemainingHours(los - t),
            })
            .collect();

        Ok(Extraction {
            trimmed: TrimmedStay {
                patient: parts.patient,
                events_name,
                label_name,
                header: parts.header,
                events,
                demographics: label.demographics,
            },
            horizons,
        })
    }
}
