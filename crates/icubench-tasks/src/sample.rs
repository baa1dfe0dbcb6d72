//! Labeled samples listed in a manifest.

use std::cmp::Ordering;

use icubench_episode::PatientId;

/// Prediction target of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// In-hospital mortality flag
    Mortality(bool),
    /// Hours remaining in the ICU after the prediction point
    RemainingHours(f64),
}

impl Target {
    /// Total order over targets, consistent across runs.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Mortality(a), Self::Mortality(b)) => a.cmp(b),
            (Self::RemainingHours(a), Self::RemainingHours(b)) => a.total_cmp(b),
            (Self::Mortality(_), Self::RemainingHours(_)) => Ordering::Less,
            (Self::RemainingHours(_), Self::Mortality(_)) => Ordering::Greater,
        }
    }
}

/// One labeled prediction point of a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub patient: PatientId,
    /// Name of the trimmed event-stream file the sample reads from
    pub events_ref: String,
    /// Name of the trimmed label file the sample reads from
    pub label_ref: String,
    /// Hours of history observed before the prediction point
    pub period_length: f64,
    pub target: Target,
}

impl Sample {
    /// Deterministic order used for evaluation manifests.
    ///
    /// Compares patient id, event-stream reference and label reference first,
    /// then period length and target so that the order is total.
    #[must_use]
    pub fn manifest_cmp(&self, other: &Self) -> Ordering {
        self.patient
            .cmp(&other.patient)
            .then_with(|| self.events_ref.cmp(&other.events_ref))
            .then_with(|| self.label_ref.cmp(&other.label_ref))
            .then_with(|| self.period_length.total_cmp(&other.period_length))
            .then_with(|| self.target.total_cmp(&other.target))
    }
}
