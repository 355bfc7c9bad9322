#[derive(Debug, thiserror::Error)]
pub enum MfnavError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MfnavError {
    /// True for failures that originate from the upstream provider rather
    /// than from the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            MfnavError::UpstreamUnavailable(_) | MfnavError::MalformedPayload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MfnavError>;
