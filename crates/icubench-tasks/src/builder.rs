//! Partition processing: from patient ids to an ordered manifest
//!
//! [`PartitionBuilder`] walks the patients of one partition, asks the
//! [`EpisodeSource`] for their stays, runs the task generator on each stay,
//! stores the trimmed data of eligible stays through the [`TrimmedSink`] and
//! finally orders the collected samples into a [`Manifest`].
//!
//! Skipped stays never abort the run. Each one is logged and counted in the
//! returned [`PartitionReport`]. Read and write failures do abort it.

use std::{collections::BTreeMap, io};

use icubench_episode::{EpisodeSource, PatientId, TrimmedSink};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    generator::SampleGenerator, manifest::Manifest, partition::Partition, skip::SkipReason,
};

const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum BuildError {
    #[display("failed to read stays of patient {patient}")]
    ReadStays { patient: PatientId, source: io::Error },
    #[display("failed to write trimmed files of {events_name}")]
    WriteTrimmed { events_name: String, source: io::Error },
}

/// Counts describing how one partition was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionReport {
    pub task: &'static str,
    pub partition: Partition,
    pub patients: usize,
    pub stays: usize,
    /// Stays whose trimmed data was written
    pub eligible_stays: usize,
    pub samples: usize,
    /// Skipped stays by reason
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl PartitionReport {
    fn new(task: &'static str, partition: Partition) -> Self {
        Self {
            task,
            partition,
            patients: 0,
            stays: 0,
            eligible_stays: 0,
            samples: 0,
            skipped: BTreeMap::new(),
        }
    }

    /// Number of skipped stays, all reasons together.
    #[must_use]
    pub fn skipped_stays(&self) -> usize {
        self.skipped.values().sum()
    }

    #[must_use]
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }
}

/// Result of building a partition.
#[derive(Debug, Clone)]
pub struct PartitionOutput {
    pub manifest: Manifest,
    pub report: PartitionReport,
}

/// Builds the samples of one partition with a task generator.
#[derive(Debug)]
pub struct PartitionBuilder<'a, G>
where
    G: ?Sized,
{
    partition: Partition,
    generator: &'a G,
}

impl<'a, G> PartitionBuilder<'a, G>
where
    G: SampleGenerator + ?Sized,
{
    #[must_use]
    pub fn new(partition: Partition, generator: &'a G) -> Self {
        Self {
            partition,
            generator,
        }
    }

    /// Processes `patients` in the given order.
    ///
    /// `rng` is the run's random stream. It is drawn from only when the
    /// training manifest is shuffled, after every stay has been processed.
    pub fn build<S, W, R>(
        &self,
        patients: &[PatientId],
        mut source: S,
        mut sink: W,
        rng: &mut R,
    ) -> Result<PartitionOutput, BuildError>
    where
        S: EpisodeSource,
        W: TrimmedSink,
        R: Rng + ?Sized,
    {
        let mut report = PartitionReport::new(self.generator.name(), self.partition);
        let mut samples = vec![];

        for (index, &patient) in patients.iter().enumerate() {
            let stays = source
                .stays(patient)
                .map_err(|err| BuildError::ReadStays {
                    patient,
                    source: err,
                })?;
            report.patients += 1;

            for stay in stays {
                report.stays += 1;
                let stay_key = stay.stay_key().to_owned();
                match self.generator.generate(stay) {
                    Ok(extraction) => {
                        sink.write(&extraction.trimmed).map_err(|source| {
                            BuildError::WriteTrimmed {
                                events_name: extraction.trimmed.events_name.clone(),
                                source,
                            }
                        })?;
                        report.eligible_stays += 1;
                        samples.extend(extraction.samples());
                    }
                    Err(reason) => {
                        if reason.is_too_short() {
                            debug!(%patient, stay = %stay_key, "skipping stay: {reason}");
                        } else {
                            warn!(%patient, stay = %stay_key, "skipping stay: {reason}");
                        }
                        *report.skipped.entry(reason).or_insert(0) += 1;
                    }
                }
            }

            if (index + 1).is_multiple_of(PROGRESS_INTERVAL) {
                info!(
                    partition = %self.partition,
                    "processed {} / {} patients",
                    index + 1,
                    patients.len()
                );
            }
        }

        report.samples = samples.len();
        info!(
            task = report.task,
            partition = %self.partition,
            samples = report.samples,
            eligible_stays = report.eligible_stays,
            skipped_stays = report.skipped_stays(),
            "partition done"
        );

        let manifest = Manifest::new(self.partition, samples, rng);
        Ok(PartitionOutput { manifest, report })
    }
}
