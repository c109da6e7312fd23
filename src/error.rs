use thiserror::Error;

pub type InteractResult<T> = Result<T, InteractError>;

#[derive(Debug, Error)]
pub enum InteractError {
    #[error("invalid hover scale factor: {0} (must be finite and > 0)")]
    InvalidHoverScale(f64),

    #[error("invalid scene spec: {0}")]
    InvalidSpec(String),

    #[error("unknown element id: {0}")]
    UnknownElement(usize),
}
