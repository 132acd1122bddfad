//! Engine configuration

use serde::{Deserialize, Serialize};
use textsim_embed::EmbedConfig;

/// Configuration for index construction and query limits.
///
/// All knobs can also come from the environment via [`IndexConfig::from_env`],
/// using `TEXTSIM_`-prefixed variables. Unset or unparsable variables fall
/// back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Vocabulary cap for the word-level TF-IDF model
    pub word_vocab_cap: usize,
    /// Vocabulary cap for the character-level TF-IDF model
    pub char_vocab_cap: usize,
    /// Smallest character n-gram length
    pub char_ngram_min: usize,
    /// Largest character n-gram length
    pub char_ngram_max: usize,
    /// Blend weight for character-level similarity in [0, 1].
    /// At or below zero the character model is not built at all.
    pub char_weight: f32,
    /// Identifier of the semantic embedding model
    pub model_name: String,
    /// Maximum `k` accepted by a single ranking call
    pub top_k_max: usize,
    /// Number of sentence alignments returned per matched document
    pub align_top_n: usize,
}

impl IndexConfig {
    /// Read configuration from `TEXTSIM_*` environment variables,
    /// defaulting any that are missing or malformed.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            word_vocab_cap: env_parse("TEXTSIM_WORD_VOCAB_CAP", defaults.word_vocab_cap),
            char_vocab_cap: env_parse("TEXTSIM_CHAR_VOCAB_CAP", defaults.char_vocab_cap),
            char_ngram_min: defaults.char_ngram_min,
            char_ngram_max: defaults.char_ngram_max,
            char_weight: env_parse("TEXTSIM_CHAR_WEIGHT", defaults.char_weight),
            model_name: std::env::var("TEXTSIM_MODEL_NAME").unwrap_or(defaults.model_name),
            top_k_max: env_parse("TEXTSIM_TOP_K_MAX", defaults.top_k_max),
            align_top_n: env_parse("TEXTSIM_ALIGN_TOP_N", defaults.align_top_n),
        }
    }

    /// Set the character blend weight (builder style)
    pub fn with_char_weight(self, char_weight: f32) -> Self {
        Self {
            char_weight,
            ..self
        }
    }

    /// Set the word vocabulary cap (builder style)
    pub fn with_word_vocab_cap(self, word_vocab_cap: usize) -> Self {
        Self {
            word_vocab_cap,
            ..self
        }
    }

    /// Set the maximum allowed top-k (builder style)
    pub fn with_top_k_max(self, top_k_max: usize) -> Self {
        Self { top_k_max, ..self }
    }

    /// Set the embedding model name (builder style)
    pub fn with_model_name(self, model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..self
        }
    }

    /// The configured blend weight clamped to [0, 1].
    pub fn char_weight_clamped(&self) -> f32 {
        self.char_weight.clamp(0.0, 1.0)
    }

    /// Whether character-level scoring is enabled at all.
    pub fn char_enabled(&self) -> bool {
        self.char_weight_clamped() > 0.0
    }

    /// Embedding provider configuration for the configured model.
    pub fn embed_config(&self) -> EmbedConfig {
        EmbedConfig::new(self.model_name.clone())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            word_vocab_cap: 60_000,
            char_vocab_cap: 60_000,
            char_ngram_min: 3,
            char_ngram_max: 5,
            char_weight: 0.4,
            model_name: textsim_embed::DEFAULT_MODEL_NAME.to_string(),
            top_k_max: 20,
            align_top_n: 5,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
