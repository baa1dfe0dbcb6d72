/// A single observation row of an ICU event stream.
///
/// `time` is the offset from ICU admission in hours. It may be negative when
/// the upstream clock alignment places a measurement slightly before
/// admission. `row` holds every column of the original row, the hour column
/// included, and is written back unchanged when the event survives windowing.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Hours since admission
    pub time: f64,
    /// Raw column values as read
    pub row: Vec<String>,
}

impl Event {
    #[must_use]
    pub fn new(time: f64, row: Vec<String>) -> Self {
        Self { time, row }
    }
}
