use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
