use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error("A generation is already in flight")]
    Busy,
    #[error("Model is still loading, estimated wait {estimated_seconds:.1}s")]
    TransientUnavailable { estimated_seconds: f64 },
    #[error("Generation failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },
    #[error("Model still loading after {retries} retries. Try request again in 5 minutes.")]
    AttemptsExhausted {
        /// Retries this chain made before giving up, the first call excluded.
        retries: u32,
    },
    #[error("Retry chain cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Whether the workflow will recover from this on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, GenerationError::TransientUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
