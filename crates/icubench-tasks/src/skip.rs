use serde::Serialize;

/// Why a stay produced no samples.
///
/// Skips are recoverable: the stay is left out of the manifest and the run
/// goes on. Each skip is logged and counted in the partition report so the
/// completeness of a dataset can be audited afterwards.
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
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Label file has no data row, or its length of stay is missing
    #[display("length of stay is missing")]
    MissingLabel,
    /// Stay is shorter than the observation window
    #[display("stay is shorter than the observation window")]
    TooShort,
    /// No event falls inside the observation window
    #[display("no events in ICU")]
    EmptyWindow,
}
