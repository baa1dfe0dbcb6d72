use std::path::PathBuf;

use icubench_episode::RunSeed;
use icubench_tasks::{
    mortality::{DEFAULT_WINDOW_HOURS, MortalityTask},
    partition::Partition,
};
use tracing::info;

use super::task::{TaskInputArg, run_task};
use crate::config::ConfigError;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InHospitalMortalityArg {
    #[clap(flatten)]
    pub(crate) input: TaskInputArg,
    /// Directory where the created data is stored
    pub(crate) output_path: PathBuf,
    /// Seed of the training manifest shuffle
    #[arg(long, default_value_t = RunSeed(49297))]
    pub(crate) seed: RunSeed,
    /// Length of the observation window in hours
    #[arg(long, default_value_t = DEFAULT_WINDOW_HOURS)]
    pub(crate) n_hours: f64,
}

pub(crate) fn run(arg: &InHospitalMortalityArg) -> anyhow::Result<()> {
    let task = MortalityTask::new(arg.n_hours).map_err(ConfigError::from)?;
    let report = run_task(
        &task,
        &arg.input,
        &arg.output_path,
        arg.seed,
        [Partition::Test, Partition::Train],
    )?;
    for partition in &report.partitions {
        info!(
            partition = %partition.partition,
            samples = partition.samples,
            "in-hospital mortality samples created"
        );
    }
    Ok(())
}
