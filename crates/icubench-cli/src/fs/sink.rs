use std::{
    io,
    path::{Path, PathBuf},
};

use icubench_episode::{TrimmedSink, TrimmedStay};

use super::invalid_data;

/// Writes trimmed stays into a partition directory.
#[derive(Debug, Clone)]
pub(crate) struct FsTrimmedSink {
    dir: PathBuf,
}

impl FsTrimmedSink {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TrimmedSink for FsTrimmedSink {
    fn write(&mut self, trimmed: &TrimmedStay) -> io::Result<()> {
        write_events(&self.dir.join(&trimmed.events_name), trimmed)?;
        write_label(&self.dir.join(&trimmed.label_name), trimmed)
    }
}

fn write_events(path: &Path, trimmed: &TrimmedStay) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| invalid_data(path, err))?;
    writer
        .write_record(&trimmed.header)
        .map_err(|err| invalid_data(path, err))?;
    for event in &trimmed.events {
        writer
            .write_record(&event.row)
            .map_err(|err| invalid_data(path, err))?;
    }
    writer.flush()
}

/// Writes the demographics-only label file: `Age,Gender,Ethnicity`.
fn write_label(path: &Path, trimmed: &TrimmedStay) -> io::Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| invalid_data(path, err))?;
    writer
        .serialize(&trimmed.demographics)
        .map_err(|err| invalid_data(path, err))?;
    writer.flush()
}
