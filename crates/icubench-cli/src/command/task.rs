use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use icubench_episode::RunSeed;
use icubench_tasks::{
    builder::{PartitionBuilder, PartitionReport},
    generator::SampleGenerator,
    partition::Partition,
};
use serde::Serialize;
use tracing::info;

use crate::{
    config::OutputLayout,
    fs::{FsEpisodeSource, FsTrimmedSink, read_id_file, write_manifest},
    util,
};

/// Inputs shared by the sample-building tasks.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TaskInputArg {
    /// Directory containing one subdirectory per patient
    pub(crate) root_path: PathBuf,
    /// File listing the training patient ids
    #[arg(long, default_value = "train_ids.csv")]
    pub(crate) train_csv: PathBuf,
    /// File listing the test patient ids
    #[arg(long, default_value = "test_ids.csv")]
    pub(crate) test_csv: PathBuf,
    /// Write a JSON summary of the run to this file
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
}

impl TaskInputArg {
    fn id_file(&self, partition: Partition) -> &Path {
        match partition {
            Partition::Train => &self.train_csv,
            Partition::Test => &self.test_csv,
        }
    }
}

/// Summary of a task run, saved with `--report`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunReport {
    pub(crate) task: &'static str,
    pub(crate) seed: RunSeed,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) partitions: Vec<PartitionReport>,
}

/// Builds every partition of a task in `order`.
///
/// Id files and output directories of all partitions are checked before any
/// stay is read. A single random stream, created from `seed`, is shared by
/// all partitions.
pub(crate) fn run_task<G>(
    generator: &G,
    input: &TaskInputArg,
    output_path: &Path,
    seed: RunSeed,
    order: [Partition; 2],
) -> anyhow::Result<RunReport>
where
    G: SampleGenerator + ?Sized,
{
    let layout = OutputLayout::prepare(&input.root_path, output_path)?;
    let mut rng = seed.rng();
    info!(task = generator.name(), %seed, output = %output_path.display(), "starting");

    let mut id_lists = vec![];
    for partition in order {
        let id_path = input.id_file(partition);
        let patients = read_id_file(id_path)
            .with_context(|| format!("Failed to read {partition} ids: {}", id_path.display()))?;
        id_lists.push((partition, patients));
    }
    let mut plan = vec![];
    for (partition, patients) in id_lists {
        let dir = layout.partition_dir(partition)?;
        plan.push((partition, patients, dir));
    }

    let mut partitions = vec![];
    for (partition, patients, dir) in plan {
        let output = PartitionBuilder::new(partition, generator).build(
            &patients,
            FsEpisodeSource::new(&input.root_path),
            FsTrimmedSink::new(&dir),
            &mut rng,
        )?;
        write_manifest(&dir, &output.manifest)
            .with_context(|| format!("Failed to write manifest in {}", dir.display()))?;
        partitions.push(output.report);
    }

    let report = RunReport {
        task: generator.name(),
        seed,
        generated_at: Utc::now(),
        partitions,
    };
    if let Some(path) = &input.report {
        util::save_json("report", &report, path)?;
        info!(path = %path.display(), "report saved");
    }
    Ok(report)
}
