//! Error types for the embedding adapter

/// Result type for embedding operations.
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Error type covering configuration, model loading, and inference failures.
///
/// Integrates with [`thiserror`] for error chaining; encoder failures are
/// always propagated to the caller rather than silently degraded.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The configured model name does not map to a supported model
    #[error("Unknown embedding model: {name}")]
    UnknownModel { name: String },

    /// Error when provider configuration or state is invalid
    #[error("Invalid embedding configuration: {message}")]
    InvalidConfig { message: String },

    /// Error during model initialization
    #[error("Model initialization failed: {source}")]
    ModelInitialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Async task join errors
    #[error("Async task failed: {source}")]
    AsyncTask {
        #[from]
        source: tokio::task::JoinError,
    },

    /// Errors surfaced by the underlying inference library
    #[error("External error: {source}")]
    External {
        #[from]
        source: anyhow::Error,
    },
}

impl EmbedError {
    /// Create an invalid configuration error with a custom message.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a model initialization error from any error type.
    pub fn model_init<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::ModelInitialization {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_init_preserves_the_underlying_failure() {
        let err = EmbedError::model_init(std::io::Error::other("onnx session failed"));
        assert!(matches!(err, EmbedError::ModelInitialization { .. }));
        assert!(err.to_string().contains("onnx session failed"));
    }
}
