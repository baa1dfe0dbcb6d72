use std::{
    fs::File,
    io::{self, BufRead as _, BufReader, BufWriter, Write as _},
    path::Path,
};

use icubench_episode::PatientId;

use super::invalid_data;

/// Reads a patient id file: one decimal id per line, no header.
///
/// Blank lines are ignored.
pub(crate) fn read_id_file(path: &Path) -> io::Result<Vec<PatientId>> {
    let file = File::open(path).map_err(|err| invalid_data(path, err))?;
    let mut ids = vec![];
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let id = line.parse::<PatientId>().map_err(|err| {
            invalid_data(path, format!("line {}: invalid patient id {line:?}: {err}", index + 1))
        })?;
        ids.push(id);
    }
    Ok(ids)
}

/// Writes `ids` one per line, in the given order.
pub(crate) fn write_id_file(path: &Path, ids: &[PatientId]) -> io::Result<()> {
    let file = File::create(path).map_err(|err| invalid_data(path, err))?;
    let mut writer = BufWriter::new(file);
    for id in ids {
        writeln!(writer, "{id}")?;
    }
    writer.flush()
}
