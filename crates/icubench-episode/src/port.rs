//! Boundaries between the sampling core and the storage it runs against.
//!
//! The core reads stays through an [`EpisodeSource`] and hands trimmed
//! per-sample data to a [`TrimmedSink`]. The benchmark binary implements both
//! on top of the filesystem; tests implement them in memory.

use std::io;

use crate::{Demographics, Event, PatientId, Stay};

/// Supplies the stays recorded for a patient.
pub trait EpisodeSource {
    /// Returns every stay of `patient`, in a stable order.
    ///
    /// Malformed input is reported as an error. A label file without a data
    /// row is not malformed: it yields a stay whose label is `None`.
    fn stays(&mut self, patient: PatientId) -> io::Result<Vec<Stay>>;
}

/// Receives the trimmed event stream and label of every eligible stay.
pub trait TrimmedSink {
    fn write(&mut self, trimmed: &TrimmedStay) -> io::Result<()>;
}

/// Windowed event stream and reduced label of one stay, ready to be stored.
///
/// The reduced label carries only demographics. Outcome fields are left out
/// so they cannot leak into model features.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedStay {
    pub patient: PatientId,
    /// File name of the trimmed event stream
    pub events_name: String,
    /// File name of the trimmed label
    pub label_name: String,
    pub header: Vec<String>,
    pub events: Vec<Event>,
    pub demographics: Demographics,
}

impl<T> EpisodeSource for &mut T
where
    T: EpisodeSource + ?Sized,
{
    fn stays(&mut self, patient: PatientId) -> io::Result<Vec<Stay>> {
        (**self).stays(patient)
    }
}

impl<T> TrimmedSink for &mut T
where
    T: TrimmedSink + ?Sized,
{
    fn write(&mut self, trimmed: &TrimmedStay) -> io::Result<()> {
        (**self).write(trimmed)
    }
}
