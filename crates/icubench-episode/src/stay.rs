//! Per-admission records produced by an [`EpisodeSource`](crate::EpisodeSource).
//!
//! A patient may own several stays, one per event-stream file. Each stay pairs
//! its event stream with the static label row describing the admission's
//! outcome.

use serde::{Deserialize, Serialize};

use crate::Event;

/// Numeric patient (subject) identifier.
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
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct PatientId(pub u64);

/// Demographic codes forwarded to the trimmed label file.
///
/// The values are pre-encoded upstream. They are carried as the exact text
/// found in the source label row so that nothing is lost or re-rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Ethnicity")]
    pub ethnicity: String,
}

/// Outcome and demographics of one ICU admission.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLabel {
    /// Whether the patient died in hospital
    pub mortality: bool,
    /// Length of the ICU stay in hours, if recorded
    pub length_of_stay: Option<f64>,
    pub demographics: Demographics,
}

/// One ICU admission: its event stream and static label.
///
/// A stay is built once by an [`EpisodeSource`](crate::EpisodeSource) and is
/// not modified afterwards. Sample generators take it by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Stay {
    patient: PatientId,
    stay_key: String,
    label_key: String,
    header: Vec<String>,
    events: Vec<Event>,
    label: Option<StaticLabel>,
}

impl Stay {
    /// Creates a stay record.
    ///
    /// `stay_key` names the source event-stream file and `label_key` the
    /// matching label file. `label` is `None` when the label file has no data
    /// row.
    #[must_use]
    pub fn new(
        patient: PatientId,
        stay_key: impl Into<String>,
        label_key: impl Into<String>,
        header: Vec<String>,
        events: Vec<Event>,
        label: Option<StaticLabel>,
    ) -> Self {
        Self {
            patient,
            stay_key: stay_key.into(),
            label_key: label_key.into(),
            header,
            events,
            label,
        }
    }

    #[must_use]
    pub fn patient(&self) -> PatientId {
        self.patient
    }

    #[must_use]
    pub fn stay_key(&self) -> &str {
        &self.stay_key
    }

    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn label(&self) -> Option<&StaticLabel> {
        self.label.as_ref()
    }

    /// Name of the trimmed event-stream file derived from this stay.
    ///
    /// ```
    /// use icubench_episode::{PatientId, Stay};
    ///
    /// let stay = Stay::new(
    ///     PatientId(42),
    ///     "episode1_timeseries.csv",
    ///     "episode1.csv",
    ///     vec![],
    ///     vec![],
    ///     None,
    /// );
    /// assert_eq!(stay.trimmed_events_name(), "42_episode1_timeseries.csv");
    /// assert_eq!(stay.trimmed_label_name(), "42_episode1.csv");
    /// ```
    #[must_use]
    pub fn trimmed_events_name(&self) -> String {
        format!("{}_{}", self.patient, self.stay_key)
    }

    /// Name of the trimmed label file derived from this stay.
    #[must_use]
    pub fn trimmed_label_name(&self) -> String {
        format!("{}_{}", self.patient, self.label_key)
    }

    /// Splits the stay into its owned parts.
    #[must_use]
    pub fn into_parts(self) -> StayParts {
        StayParts {
            patient: self.patient,
            stay_key: self.stay_key,
            label_key: self.label_key,
            header: self.header,
            events: self.events,
            label: self.label,
        }
    }
}

/// Owned fields of a [`Stay`], returned by [`Stay::into_parts`].
#[derive(Debug)]
pub struct StayParts {
    pub patient: PatientId,
    pub stay_key: String,
    pub label_key: String,
    pub header: Vec<String>,
    pub events: Vec<Event>,
    pub label: Option<StaticLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_parses_and_displays() {
        let id: PatientId = "10006".parse().unwrap();
        assert_eq!(id, PatientId(10006));
        assert_eq!(id.to_string(), "10006");
        assert!("abc".parse::<PatientId>().is_err());
    }

    #[test]
    fn test_patient_id_orders_numerically() {
        let mut ids = vec![PatientId(100), PatientId(9), PatientId(25)];
        ids.sort();
        assert_eq!(ids, vec![PatientId(9), PatientId(25), PatientId(100)]);
    }

    #[test]
    fn test_patient_id_serializes_transparently() {
        let json = serde_json::to_string(&PatientId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_into_parts_keeps_fields() {
        let stay = Stay::new(
            PatientId(3),
            "episode2_timeseries.csv",
            "episode2.csv",
            vec!["Hours".into()],
            vec![Event::new(1.0, vec!["1.0".into()])],
            None,
        );
        let parts = stay.clone().into_parts();
        assert_eq!(parts.patient, stay.patient());
        assert_eq!(parts.stay_key, stay.stay_key());
        assert_eq!(parts.label_key, stay.label_key());
        assert_eq!(parts.header, stay.header());
        assert_eq!(parts.events, stay.events());
        assert!(parts.label.is_none());
    }
}
