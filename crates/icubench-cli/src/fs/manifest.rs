use std::{io, path::Path};

use icubench_tasks::manifest::{MANIFEST_FILE_NAME, MANIFEST_HEADER, Manifest};
use tracing::debug;

use super::invalid_data;

/// Writes `manifest` as `listfile.csv` inside `dir`.
///
/// The header is written even when the manifest has no rows.
pub(crate) fn write_manifest(dir: &Path, manifest: &Manifest) -> io::Result<()> {
    let path = dir.join(MANIFEST_FILE_NAME);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|err| invalid_data(&path, err))?;
    writer
        .write_record(MANIFEST_HEADER)
        .map_err(|err| invalid_data(&path, err))?;
    for row in manifest.rows() {
        writer
            .serialize(row)
            .map_err(|err| invalid_data(&path, err))?;
    }
    writer.flush()?;
    debug!(
        partition = %manifest.partition(),
        rows = manifest.len(),
        path = %path.display(),
        "manifest written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use icubench_episode::{PatientId, RunSeed};
    use icubench_tasks::{
        partition::Partition,
        sample::{Sample, Target},
    };

    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![
            Sample {
                patient: PatientId(12),
                events_ref: "12_episode1_timeseries.csv".into(),
                label_ref: "12_episode1.csv".into(),
                period_length: 48.0,
                target: Target::Mortality(false),
            },
            Sample {
                patient: PatientId(3),
                events_ref: "3_episode1_timeseries.csv".into(),
                label_ref: "3_episode1.csv".into(),
                period_length: 48.0,
                target: Target::Mortality(true),
            },
        ];
        let manifest = Manifest::new(Partition::Test, samples, &mut RunSeed(0).rng());
        write_manifest(dir.path(), &manifest).unwrap();

        let content = fs::read_to_string(dir.path().join("listfile.csv")).unwrap();
        assert_eq!(
            content,
            "patient,stay,meta,period_length,y_true\n\
             3,3_episode1_timeseries.csv,3_episode1.csv,48,1\n\
             12,12_episode1_timeseries.csv,12_episode1.csv,48,0\n"
        );
    }

    #[test]
    fn test_empty_manifest_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(Partition::Train, vec![], &mut RunSeed(0).rng());
        write_manifest(dir.path(), &manifest).unwrap();
        let content = fs::read_to_string(dir.path().join("listfile.csv")).unwrap();
        assert_eq!(content, "patient,stay,meta,period_length,y_true\n");
    }
}
