//! Configuration for embedding models

use crate::error::{EmbedError, Result};
use fastembed::EmbeddingModel;
use serde::{Deserialize, Serialize};

/// Default model: the multilingual sentence encoder the corpus comparison
/// pipeline was tuned against.
pub const DEFAULT_MODEL_NAME: &str = "paraphrase-multilingual-MiniLM-L12-v2";

/// Configuration for the embedding provider.
///
/// The model name is an opaque identifier resolved to one of fastembed's
/// built-in models at initialization time. Unknown names fail with
/// [`EmbedError::UnknownModel`] rather than falling back to a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Name of the embedding model to use
    pub model_name: String,
    /// Maximum batch size for embedding generation
    pub batch_size: usize,
    /// Whether to show model download progress on first use
    pub show_download_progress: bool,
}

impl EmbedConfig {
    /// Create a configuration for the given model name with default settings.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..Self::default()
        }
    }

    /// Set the batch size for embedding generation (builder style)
    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }

    /// Set whether download progress is shown (builder style)
    pub fn with_show_download_progress(self, show_download_progress: bool) -> Self {
        Self {
            show_download_progress,
            ..self
        }
    }

    /// Resolve the configured model name to a fastembed built-in model.
    pub fn embedding_model(&self) -> Result<EmbeddingModel> {
        match self.model_name.as_str() {
            "paraphrase-multilingual-MiniLM-L12-v2" => Ok(EmbeddingModel::ParaphraseMLMiniLML12V2),
            "paraphrase-multilingual-mpnet-base-v2" => Ok(EmbeddingModel::ParaphraseMLMpnetBaseV2),
            "multilingual-e5-small" => Ok(EmbeddingModel::MultilingualE5Small),
            "multilingual-e5-base" => Ok(EmbeddingModel::MultilingualE5Base),
            "multilingual-e5-large" => Ok(EmbeddingModel::MultilingualE5Large),
            "all-MiniLM-L6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
            other => Err(EmbedError::UnknownModel {
                name: other.to_string(),
            }),
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            batch_size: 32,
            show_download_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_resolves() {
        let config = EmbedConfig::default();
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(config.batch_size, 32);
        assert!(config.embedding_model().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = EmbedConfig::new("multilingual-e5-small")
            .with_batch_size(8)
            .with_show_download_progress(true);
        assert_eq!(config.batch_size, 8);
        assert!(config.show_download_progress);
        assert!(matches!(
            config.embedding_model(),
            Ok(EmbeddingModel::MultilingualE5Small)
        ));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let config = EmbedConfig::new("no-such-model");
        assert!(matches!(
            config.embedding_model(),
            Err(EmbedError::UnknownModel { .. })
        ));
    }
}
