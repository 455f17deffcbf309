use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input contains no records")]
    EmptyInput,

    #[error("Record {0} has no feature values")]
    MissingFeatures(usize),

    #[error("Invalid feature dimension for record {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Record {index} has a non-finite feature value at dimension {dim}")]
    NonFiniteFeature { index: usize, dim: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
