use std::path::PathBuf;

use icubench_episode::RunSeed;
use icubench_tasks::{
    length_of_stay::{DEFAULT_SAMPLE_RATE, DEFAULT_SHORTEST_LENGTH, LengthOfStayTask},
    partition::Partition,
};
use tracing::info;

use super::task::{TaskInputArg, run_task};
use crate::config::ConfigError;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LengthOfStayArg {
    #[clap(flatten)]
    pub(crate) input: TaskInputArg,
    /// Directory where the created data is stored
    #[arg(long, default_value = "length-of-stay")]
    pub(crate) output_path: PathBuf,
    /// Seed of the training manifest shuffle
    #[arg(long, default_value_t = RunSeed(100))]
    pub(crate) seed: RunSeed,
    /// Spacing of prediction times in hours
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub(crate) sample_rate: f64,
    /// Prediction times at or before this many hours are not sampled
    #[arg(long, default_value_t = DEFAULT_SHORTEST_LENGTH)]
    pub(crate) shortest_length: f64,
}

pub(crate) fn run(arg: &LengthOfStayArg) -> anyhow::Result<()> {
    let task =
        LengthOfStayTask::new(arg.sample_rate, arg.shortest_length).map_err(ConfigError::from)?;
    let report = run_task(
        &task,
        &arg.input,
        &arg.output_path,
        arg.seed,
        [Partition::Train, Partition::Test],
    )?;
    for partition in &report.partitions {
        info!(
            partition = %partition.partition,
            samples = partition.samples,
            "length of stay samples created"
        );
    }
    Ok(())
}
