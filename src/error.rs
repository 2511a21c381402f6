use thiserror::Error;

/// Validation failures raised by the core. All three are deterministic for a
/// given input and carry no retry semantics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("input text is empty")]
    EmptyInput,

    #[error("no valid player names found in input")]
    NoValidNames,

    #[error("invalid distribution parameters: need at least one name and a team size of at least 1")]
    InvalidDistributionParams,
}
