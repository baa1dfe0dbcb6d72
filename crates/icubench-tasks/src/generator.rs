//! Common interface of the task-specific sample generators.

use icubench_episode::{StaticLabel, Stay, TrimmedStay};

use crate::{
    sample::{Sample, Target},
    skip::SkipReason,
};

/// Derives labeled samples from a single stay.
///
/// A generator either rejects the stay with a [`SkipReason`] or returns an
/// [`Extraction`]: the trimmed data to store plus zero or more prediction
/// points. Generators are pure; storing the trimmed data is the caller's job.
pub trait SampleGenerator {
    /// Short task name used in logs and reports.
    fn name(&self) -> &'static str;

    fn generate(&self, stay: Stay) -> Result<Extraction, SkipReason>;
}

impl<T> SampleGenerator for &T
where
    T: SampleGenerator + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn generate(&self, stay: Stay) -> Result<Extraction, SkipReason> {
        (**self).generate(stay)
    }
}

/// A prediction point within a stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Hours of history observed before the prediction point
    pub period_length: f64,
    pub target: Target,
}

/// Output of a generator for an eligible stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub trimmed: TrimmedStay,
    pub horizons: Vec<Horizon>,
}

impl Extraction {
    /// Samples referencing the trimmed files, one per horizon.
    #[must_use]
    pub fn samples(&self) -> Vec<Sample> {
        self.horizons
            .iter()
            .map(|horizon| Sample {
                patient: self.trimmed.patient,
                events_ref: self.trimmed.events_name.clone(),
                label_ref: self.trimmed.label_name.clone(),
                period_length: horizon.period_length,
                target: horizon.target,
            })
            .collect()
    }
}

/// Returns the label together with its length of stay in hours.
///
/// A missing label row and a missing or non-finite length of stay are all
/// reported as [`SkipReason::MissingLabel`].
pub(crate) fn labeled_length_of_stay(
    label: Option<StaticLabel>,
) -> Result<(StaticLabel, f64), SkipReason> {
    let label = label.ok_or(SkipReason::MissingLabel)?;
    match label.length_of_stay {
        Some(los) if los.is_finite() => Ok((label, los)),
        _ => Err(SkipReason::MissingLabel),
    }
}
