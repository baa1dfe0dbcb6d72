use std::{
    fs, io,
    path::{Path, PathBuf},
};

use icubench_episode::{Demographics, EpisodeSource, Event, PatientId, StaticLabel, Stay};
use serde::Deserialize;

use super::invalid_data;

const EVENT_STREAM_MARKER: &str = "timeseries";
const HOURS_PER_DAY: f64 = 24.0;

/// Reads stays from per-patient directories below a root directory.
///
/// Every file whose name contains `timeseries` is an event stream. Its label
/// file has the same name without `_timeseries`.
#[derive(Debug, Clone)]
pub(crate) struct FsEpisodeSource {
    root: PathBuf,
}

impl FsEpisodeSource {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EpisodeSource for FsEpisodeSource {
    fn stays(&mut self, patient: PatientId) -> io::Result<Vec<Stay>> {
        let dir = self.root.join(patient.to_string());
        let mut stream_names = vec![];
        for entry in fs::read_dir(&dir).map_err(|err| invalid_data(&dir, err))? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str()
                && name.contains(EVENT_STREAM_MARKER)
            {
                stream_names.push(name.to_owned());
            }
        }
        stream_names.sort();

        stream_names
            .into_iter()
            .map(|stay_key| read_stay(&dir, patient, stay_key))
            .collect()
    }
}

/// Lists the patients of a root directory.
///
/// Every subdirectory whose name is a decimal number is a patient. Ids are
/// returned in ascending order.
pub(crate) fn list_patient_dirs(root: &Path) -> io::Result<Vec<PatientId>> {
    let mut patients = vec![];
    for entry in fs::read_dir(root).map_err(|err| invalid_data(root, err))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let patient = name
            .parse::<PatientId>()
            .map_err(|err| invalid_data(&entry.path(), err))?;
        patients.push(patient);
    }
    patients.sort();
    Ok(patients)
}

fn read_stay(dir: &Path, patient: PatientId, stay_key: String) -> io::Result<Stay> {
    let label_key = stay_key.replace("_timeseries", "");
    let (header, events) = read_event_stream(&dir.join(&stay_key))?;
    let label = read_label(&dir.join(&label_key))?;
    Ok(Stay::new(patient, stay_key, label_key, header, events, label))
}

/// Reads an event stream: a header line followed by rows whose first column
/// is the hour offset from admission.
///
/// Rows may have fewer or more fields than the header. Only the first field is
/// interpreted and the row is written back as read.
fn read_event_stream(path: &Path) -> io::Result<(Vec<String>, Vec<Event>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| invalid_data(path, err))?;
    let header = reader
        .headers()
        .map_err(|err| invalid_data(path, err))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut events = vec![];
    for record in reader.records() {
        let record = record.map_err(|err| invalid_data(path, err))?;
        let hours = record.get(0).unwrap_or_default().trim();
        let time = hours
            .parse::<f64>()
            .map_err(|err| invalid_data(path, format!("invalid hour offset {hours:?}: {err}")))?;
        events.push(Event::new(time, record.iter().map(str::to_owned).collect()));
    }
    Ok((header, events))
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    #[serde(rename = "Mortality")]
    mortality: u8,
    /// Length of stay in days
    #[serde(rename = "Length of Stay")]
    length_of_stay: Option<f64>,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Ethnicity")]
    ethnicity: String,
}

/// Reads the first data row of a label file.
///
/// Returns `None` when the file has no data row.
fn read_label(path: &Path) -> io::Result<Option<StaticLabel>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| invalid_data(path, err))?;
    let Some(record) = reader.deserialize::<LabelRecord>().next() else {
        return Ok(None);
    };
    let record = record.map_err(|err| invalid_data(path, err))?;
    Ok(Some(StaticLabel {
        mortality: record.mortality != 0,
        length_of_stay: record.length_of_stay.map(|days| days * HOURS_PER_DAY),
        demographics: Demographics {
            age: record.age,
            gender: record.gender,
            ethnicity: record.ethnicity,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL_HEADER: &str = "Icustay,Ethnicity,Gender,Age,Height,Weight,Length of Stay,Mortality";

    fn write_patient(root: &Path, patient: u64, files: &[(&str, &str)]) {
        let dir = root.join(patient.to_string());
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    #[test]
    fn test_reads_stays_in_name_order() {
        let root = tempfile::tempdir().unwrap();
        write_patient(
            root.path(),
            10006,
            &[
                (
                    "episode2_timeseries.csv",
                    "Hours,Heart Rate,Glucose\n1.5,80,\n0.25,,110\n",
                ),
                (
                    "episode2.csv",
                    &format!("{LABEL_HEADER}\n200001,2,1,70.5,,,1.5,1\n"),
                ),
                ("episode1_timeseries.csv", "Hours,Heart Rate,Glucose\n-0.1,72,\n"),
                (
                    "episode1.csv",
                    &format!("{LABEL_HEADER}\n200000,2,1,70.1,,,3.0,0\n"),
                ),
                ("stays.csv", "ignored"),
            ],
        );

        let stays = FsEpisodeSource::new(root.path())
            .stays(PatientId(10006))
            .unwrap();
        assert_eq!(stays.len(), 2);

        let first = &stays[0];
        assert_eq!(first.stay_key(), "episode1_timeseries.csv");
        assert_eq!(first.label_key(), "episode1.csv");
        assert_eq!(first.header(), ["Hours", "Heart Rate", "Glucose"]);
        assert_eq!(first.events().len(), 1);
        assert!((first.events()[0].time + 0.1).abs() < 1e-12);
        let label = first.label().unwrap();
        assert!(!label.mortality);
        assert!((label.length_of_stay.unwrap() - 72.0).abs() < 1e-9);
        assert_eq!(label.demographics.age, "70.1");
        assert_eq!(label.demographics.gender, "1");
        assert_eq!(label.demographics.ethnicity, "2");

        let second = &stays[1];
        let times: Vec<f64> = second.events().iter().map(|e| e.time).collect();
        assert_eq!(times, vec![1.5, 0.25]);
        assert_eq!(second.events()[0].row, vec!["1.5", "80", ""]);
        assert!(second.label().unwrap().mortality);
    }

    #[test]
    fn test_missing_length_of_stay_is_none() {
        let root = tempfile::tempdir().unwrap();
        write_patient(
            root.path(),
            7,
            &[
                ("episode1_timeseries.csv", "Hours,Heart Rate\n1.0,80\n"),
                (
                    "episode1.csv",
                    &format!("{LABEL_HEADER}\n1,2,1,70.5,,,,1\n"),
                ),
            ],
        );
        let stays = FsEpisodeSource::new(root.path()).stays(PatientId(7)).unwrap();
        assert!(stays[0].label().unwrap().length_of_stay.is_none());
    }

    #[test]
    fn test_label_file_without_rows_has_no_label() {
        let root = tempfile::tempdir().unwrap();
        write_patient(
            root.path(),
            7,
            &[
                ("episode1_timeseries.csv", "Hours,Heart Rate\n1.0,80\n"),
                ("episode1.csv", &format!("{LABEL_HEADER}\n")),
            ],
        );
        let stays = FsEpisodeSource::new(root.path()).stays(PatientId(7)).unwrap();
        assert!(stays[0].label().is_none());
    }

    #[test]
    fn test_rows_with_other_field_counts_are_kept() {
        let root = tempfile::tempdir().unwrap();
        write_patient(
            root.path(),
            1,
            &[
                (
                    "episode1_timeseries.csv",
                    "Hours,Heart Rate,Glasgow coma scale\n0.5,80\n1.0,81,15\n2.0,82,15,extra\n",
                ),
                ("episode1.csv", &format!("{LABEL_HEADER}\n1,2,1,70.5,,,2.0,1\n")),
            ],
        );
        let stays = FsEpisodeSource::new(root.path()).stays(PatientId(1)).unwrap();
        let events = stays[0].events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].row, vec!["0.5", "80"]);
        assert_eq!(events[1].row, vec!["1.0", "81", "15"]);
        assert_eq!(events[2].row, vec!["2.0", "82", "15", "extra"]);
    }

    #[test]
    fn test_invalid_hour_offset_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        write_patient(
            root.path(),
            7,
            &[
                ("episode1_timeseries.csv", "Hours,Heart Rate\nsoon,80\n"),
                ("episode1.csv", &format!("{LABEL_HEADER}\n1,2,1,70.5,,,2.0,1\n")),
            ],
        );
        let err = FsEpisodeSource::new(root.path())
            .stays(PatientId(7))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("invalid hour offset"));
    }

    #[test]
    fn test_lists_numeric_directories_in_order() {
        let root = tempfile::tempdir().unwrap();
        for name in ["300", "25", "1000", "notes", "7a"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        fs::write(root.path().join("42"), "not a directory").unwrap();
        let patients = list_patient_dirs(root.path()).unwrap();
        assert_eq!(patients, vec![PatientId(25), PatientId(300), PatientId(1000)]);
    }

    #[test]
    fn test_missing_patient_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(FsEpisodeSource::new(root.path()).stays(PatientId(1)).is_err());
    }
}
