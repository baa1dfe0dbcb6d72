/// Invalid task or split parameter, detected before any stay is processed.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParameterError {
    #[display("test proportion must be within [0, 1], got {_0}")]
    TestProportion(#[error(not(source))] f64),
    #[display("sample rate must be a positive number of hours, got {_0}")]
    SampleRate(#[error(not(source))] f64),
    #[display("shortest length must be a finite number of hours, got {_0}")]
    ShortestLength(#[error(not(source))] f64),
    #[display("observation window must be a non-negative number of hours, got {_0}")]
    ObservationWindow(#[error(not(source))] f64),
    #[display("boundary tolerance must be a non-negative number of hours, got {_0}")]
    Tolerance(#[error(not(source))] f64),
}
