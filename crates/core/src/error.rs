use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("Lookup failed: {0}")]
    Lookup(String),
}
