//! In-hospital mortality: binary classification over a fixed window
//!
//! Each eligible stay yields exactly one sample whose history is the first
//! `n_hours` of the stay and whose target is the mortality flag. A stay is
//! eligible when
//!
//! - its label row exists and records a length of stay,
//! - the stay lasts at least `n_hours - eps`, and
//! - at least one event falls in `(-eps, n_hours + eps)`.

use icubench_episode::{DEFAULT_EPS, Stay, TimeWindow, TrimmedStay};

use crate::{
    error::ParameterError,
    generator::{Extraction, Horizon, SampleGenerator, labeled_length_of_stay},
    sample::Target,
    skip::SkipReason,
};

/// Observation window of the standard benchmark, in hours.
pub const DEFAULT_WINDOW_HOURS: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortalityTask {
    n_hours: f64,
    eps: f64,
}

impl Default for MortalityTask {
    fn default() -> Self {
        Self {
            n_hours: DEFAULT_WINDOW_HOURS,
            eps: DEFAULT_EPS,
        }
    }
}

impl MortalityTask {
    pub fn new(n_hours: f64) -> Result<Self, ParameterError> {
        if !(n_hours.is_finite() && n_hours >= 0.0) {
            return Err(ParameterError::ObservationWindow(n_hours));
        }
        Ok(Self {
            n_hours,
            ..Self::default()
        })
    }

    pub fn with_eps(self, eps: f64) -> Result<Self, ParameterError> {
        if !(eps.is_finite() && eps >= 0.0) {
            return Err(ParameterError::Tolerance(eps));
        }
        Ok(Self { eps, ..self })
    }

    #[must_use]
    pub fn n_hours(&self) -> f64 {
        self.n_hours
    }

    #[must_use]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::from_admission(self.n_hours).with_eps(self.eps)
    }
}

impl SampleGenerator for MortalityTask {
    fn name(&self) -> &'static str {
        "in-hospital-mortality"
    }

    fn generate(&self, stay: Stay) -> Result<Extraction, SkipReason> {
        let events_name = stay.trimmed_events_name();
        let label_name = stay.trimmed_label_name();
        let parts = stay.into_parts();

        let (label, los) = labeled_length_of_stay(parts.label)?;
        if los < self.n_hours - self.eps {
            return Err(SkipReason::TooShort);
        }

        let events = self.window().apply(parts.events);
        if events.is_empty() {
            return Err(SkipReason::EmptyWindow);
        }

        Ok(Extraction {
            trimmed: TrimmedStay {
                patient: parts.patient,
                events_name,
                label_name,
                header: parts.header,
                events,
                demographics: label.demographics,
            },
            horizons: vec![Horizon {
                period_length: self.n_hours,
                target: Target::Mortality(label.mortality),
            }],
        })
    }
}
