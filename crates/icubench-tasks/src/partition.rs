//! Patient-level train/test split
//!
//! Patients, not stays, are the unit of the split: every stay of a patient
//! ends up in the same partition, so no admission of a test patient is ever
//! seen during training.

use std::collections::HashSet;

use icubench_episode::PatientId;
use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Default share of patients held out for evaluation.
pub const DEFAULT_TEST_PROPORTION: f64 = 0.25;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    #[display("train")]
    Train,
    #[display("test")]
    Test,
}

impl Partition {
    /// Directory name of the partition below the output root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

/// Disjoint train and test patient ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionAssignment {
    pub train: Vec<PatientId>,
    pub test: Vec<PatientId>,
}

/// Splits patient ids into train and test sets.
///
/// The ids are permuted with the run's random stream and the last
/// `floor(test_proportion * N)` of the permutation become the test set. The
/// result depends only on the seed of the stream, the ids and the order in
/// which they are given.
///
/// # Example
///
/// ```
/// use icubench_episode::{PatientId, RunSeed};
/// use icubench_tasks::partition::PartitionAssigner;
///
/// let ids: Vec<PatientId> = (1..=10).map(PatientId).collect();
/// let assigner = PartitionAssigner::new(0.25).unwrap();
/// let split = assigner.assign(ids, &mut RunSeed(100).rng());
/// assert_eq!(split.test.len(), 2);
/// assert_eq!(split.train.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionAssigner {
    test_proportion: f64,
}

impl Default for PartitionAssigner {
    fn default() -> Self {
        Self {
            test_proportion: DEFAULT_TEST_PROPORTION,
        }
    }
}

impl PartitionAssigner {
    pub fn new(test_proportion: f64) -> Result<Self, ParameterError> {
        if !(0.0..=1.0).contains(&test_proportion) {
            return Err(ParameterError::TestProportion(test_proportion));
        }
        Ok(Self { test_proportion })
    }

    #[must_use]
    pub fn test_proportion(&self) -> f64 {
        self.test_proportion
    }

    /// Number of test patients out of `num_patients`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    #[must_use]
    pub fn num_test(&self, num_patients: usize) -> usize {
        let num_test = (self.test_proportion * num_patients as f64).floor() as usize;
        num_test.min(num_patients)
    }

    /// Splits `patients` using `rng`.
    ///
    /// Repeated ids are dropped, keeping the first occurrence, so that the two
    /// sets stay disjoint.
    pub fn assign<R>(&self, patients: Vec<PatientId>, rng: &mut R) -> PartitionAssignment
    where
        R: Rng + ?Sized,
    {
        let mut seen = HashSet::with_capacity(patients.len());
        let mut shuffled: Vec<PatientId> = patients
            .into_iter()
            .filter(|patient| seen.insert(*patient))
            .collect();
        shuffled.shuffle(rng);

        let num_test = self.num_test(shuffled.len());
        let test = shuffled.split_off(shuffled.len() - num_test);
        PartitionAssignment {
            train: shuffled,
            test,
        }
    }
}

#[cfg(test)]
mod tests {
    use icubench_episode::RunSeed;

    use super::*;

    fn ids(n: u64) -> Vec<PatientId> {
        (1..=n).map(|i| PatientId(i * 7 + 100)).collect()
    }

    fn sorted(mut ids: Vec<PatientId>) -> Vec<PatientId> {
        ids.sort();
        ids
    }

    #[test]
    fn test_split_is_disjoint_and_complete() {
        for (n, p) in [(0, 0.25), (1, 0.25), (4, 0.25), (10, 0.3), (37, 0.5), (100, 0.99)] {
            let input = ids(n);
            let assigner = PartitionAssigner::new(p).unwrap();
            let split = assigner.assign(input.clone(), &mut RunSeed(100).rng());

            assert_eq!(split.test.len(), assigner.num_test(input.len()));
            assert!(split.train.iter().all(|id| !split.test.contains(id)));

            let mut union = split.train.clone();
            union.extend(&split.test);
            assert_eq!(sorted(union), sorted(input));
        }
    }

    #[test]
    fn test_num_test_is_floor_of_proportion() {
        let assigner = PartitionAssigner::new(0.25).unwrap();
        assert_eq!(assigner.num_test(0), 0);
        assert_eq!(assigner.num_test(3), 0);
        assert_eq!(assigner.num_test(4), 1);
        assert_eq!(assigner.num_test(11), 2);
        assert_eq!(PartitionAssigner::new(0.3).unwrap().num_test(10), 3);
    }

    #[test]
    fn test_zero_proportion_keeps_everyone_in_train() {
        let split = PartitionAssigner::new(0.0)
            .unwrap()
            .assign(ids(20), &mut RunSeed(1).rng());
        assert!(split.test.is_empty());
        assert_eq!(split.train.len(), 20);
    }

    #[test]
    fn test_full_proportion_moves_everyone_to_test() {
        let split = PartitionAssigner::new(1.0)
            .unwrap()
            .assign(ids(20), &mut RunSeed(1).rng());
        assert!(split.train.is_empty());
        assert_eq!(split.test.len(), 20);
    }

    #[test]
    fn test_same_seed_same_split() {
        let assigner = PartitionAssigner::default();
        let a = assigner.assign(ids(50), &mut RunSeed(100).rng());
        let b = assigner.assign(ids(50), &mut RunSeed(100).rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_split() {
        let assigner = PartitionAssigner::default();
        let a = assigner.assign(ids(50), &mut RunSeed(100).rng());
        let b = assigner.assign(ids(50), &mut RunSeed(101).rng());
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut input = ids(8);
        input.extend(ids(8));
        let split = PartitionAssigner::new(0.5)
            .unwrap()
            .assign(input, &mut RunSeed(7).rng());
        assert_eq!(split.train.len() + split.test.len(), 8);
        assert_eq!(split.test.len(), 4);
        assert!(split.train.iter().all(|id| !split.test.contains(id)));
    }

    #[test]
    fn test_invalid_proportion() {
        assert!(PartitionAssigner::new(-0.1).is_err());
        assert!(PartitionAssigner::new(1.5).is_err());
        assert!(PartitionAssigner::new(f64::NAN).is_err());
    }

    #[test]
    fn test_partition_names() {
        assert_eq!(Partition::Train.to_string(), "train");
        assert_eq!(Partition::Test.dir_name(), "test");
    }
}
