//! Per-partition sample index
//!
//! A manifest lists every sample of a partition, one row per sample:
//!
//! ```text
//! patient,stay,meta,period_length,y_true
//! 10011,10011_episode1_timeseries.csv,10011_episode1.csv,48,0
//! ```
//!
//! `stay` and `meta` name the trimmed event-stream and label files. Mortality
//! rows print `period_length` and `y_true` as integers; length-of-stay rows
//! print both with six decimals.
//!
//! Training manifests are shuffled with the run's random stream. Test
//! manifests are sorted, so the same samples always produce the same file no
//! matter the order in which they were generated.

use icubench_episode::PatientId;
use rand::{Rng, seq::SliceRandom as _};
use serde::Serialize;

use crate::{
    partition::Partition,
    sample::{Sample, Target},
};

/// File name of the manifest inside a partition directory.
pub const MANIFEST_FILE_NAME: &str = "listfile.csv";

/// Column names of a manifest, in order.
pub const MANIFEST_HEADER: [&str; 5] = ["patient", "stay", "meta", "period_length", "y_true"];

/// Ordered samples of one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    partition: Partition,
    samples: Vec<Sample>,
}

impl Manifest {
    /// Orders `samples` according to the policy of `partition`.
    ///
    /// Only the training partition draws from `rng`; it is shuffled in one
    /// pass over the whole collection.
    pub fn new<R>(partition: Partition, mut samples: Vec<Sample>, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match partition {
            Partition::Train => samples.shuffle(rng),
            Partition::Test => samples.sort_by(Sample::manifest_cmp),
        }
        Self { partition, samples }
    }

    #[must_use]
    pub fn partition(&self) -> Partition {
        self.partition
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Formatted rows, in manifest order.
    pub fn rows(&self) -> impl Iterator<Item = ManifestRow> + '_ {
        self.samples.iter().map(ManifestRow::from_sample)
    }
}

/// A formatted manifest row.
///
/// Field names match [`MANIFEST_HEADER`], so serializing rows with a CSV
/// writer produces the manifest header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRow {
    pub patient: PatientId,
    pub stay: String,
    pub meta: String,
    pub period_length: String,
    pub y_true: String,
}

impl ManifestRow {
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let (period_length, y_true) = match sample.target {
            Target::Mortality(died) => (
                format!("{}", sample.period_length.trunc()),
                u8::from(died).to_string(),
            ),
            Target::RemainingHours(hours) => {
                (format!("{:.6}", sample.period_length), format!("{hours:.6}"))
            }
        };
        Self {
            patient: sample.patient,
            stay: sample.events_ref.clone(),
            meta: sample.label_ref.clone(),
            period_length,
            y_true,
        }
    }
}
