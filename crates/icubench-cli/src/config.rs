//! Run configuration checks performed before any stay is read.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use icubench_tasks::{error::ParameterError, partition::Partition};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("output path must differ from the root path: {}", _0.display())]
    OutputIsRoot(#[error(not(source))] PathBuf),
    #[display("output path is not writable: {}", path.display())]
    OutputNotWritable { path: PathBuf, source: io::Error },
    #[display("invalid task parameter")]
    Parameter(ParameterError),
}

impl From<ParameterError> for ConfigError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

/// Output directories of a task run.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Checks the output path and creates the output root.
    ///
    /// The output must not be the input root, since trimmed files would then
    /// be mixed with the source stays.
    pub fn prepare(root_path: &Path, output_path: &Path) -> Result<Self, ConfigError> {
        if same_path(root_path, output_path) {
            return Err(ConfigError::OutputIsRoot(output_path.to_owned()));
        }
        ensure_writable_dir(output_path)?;
        Ok(Self {
            root: output_path.to_owned(),
        })
    }

    /// Creates and returns the directory of `partition`.
    pub fn partition_dir(&self, partition: Partition) -> Result<PathBuf, ConfigError> {
        let dir = self.root.join(partition.dir_name());
        ensure_writable_dir(&dir)?;
        Ok(dir)
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn ensure_writable_dir(path: &Path) -> Result<(), ConfigError> {
    let not_writable = |source| ConfigError::OutputNotWritable {
        path: path.to_owned(),
        source,
    };
    fs::create_dir_all(path).map_err(not_writable)?;
    // Mode bits do not tell whether this process may create files here.
    tempfile::tempfile_in(path).map_err(not_writable)?;
    Ok(())
}
