//! Benchmark sample generation for ICU prediction tasks
//!
//! This crate turns typed ICU stays into labeled samples and orders them into
//! per-partition manifests.
//!
//! # Overview
//!
//! A benchmark run goes through these steps:
//!
//! 1. **Split Patients** ([`partition::PartitionAssigner`]): Divide patient ids
//!    into disjoint train and test sets from a seeded random stream
//! 2. **Generate Samples** ([`generator::SampleGenerator`]): Clip each stay's
//!    event stream and derive task samples
//!    - [`mortality::MortalityTask`]: one sample per stay, fixed window
//!    - [`length_of_stay::LengthOfStayTask`]: one sample per look-back horizon
//! 3. **Build Partitions** ([`builder::PartitionBuilder`]): Read stays, store
//!    trimmed files, count skipped stays
//! 4. **Order Manifests** ([`manifest::Manifest`]): Shuffle the training
//!    manifest, sort the test manifest
//!
//! # Reproducibility
//!
//! Every random draw of a run comes from a single
//! [`RunRng`](icubench_episode::RunRng) passed explicitly to the
//! partition assigner and to the training manifest. Nothing is reseeded per
//! patient or per sample.
//!
//! # Example
//!
//! ```
//! use icubench_episode::{Demographics, Event, PatientId, RunSeed, StaticLabel, Stay};
//! use icubench_tasks::{
//!     generator::SampleGenerator, length_of_stay::LengthOfStayTask, manifest::Manifest,
//!     partition::Partition,
//! };
//!
//! let stay = Stay::new(
//!     PatientId(1),
//!     "episode1_timeseries.csv",
//!     "episode1.csv",
//!     vec!["Hours".into()],
//!     vec![Event::new(0.5, vec!["0.5".into()])],
//!     Some(StaticLabel {
//!         mortality: false,
//!         length_of_stay: Some(10.0),
//!         demographics: Demographics {
//!             age: "61.2".into(),
//!             gender: "1".into(),
//!             ethnicity: "2".into(),
//!         },
//!     }),
//! );
//!
//! let extraction = LengthOfStayTask::default().generate(stay).unwrap();
//! let samples = extraction.samples();
//! assert_eq!(samples.len(), 6);
//!
//! let manifest = Manifest::new(Partition::Test, samples, &mut RunSeed(100).rng());
//! assert_eq!(manifest.rows().next().unwrap().period_length, "5.000000");
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod length_of_stay;
pub mod manifest;
pub mod mortality;
pub mod partition;
pub mod sample;
pub mod skip;
