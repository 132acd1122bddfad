//! Embedding provider implementations

use crate::config::EmbedConfig;
use crate::error::{EmbedError, Result};
use async_trait::async_trait;
use fastembed::{InitOptions, TextEmbedding};
use fnv::FnvHasher;
use std::collections::HashMap;
use std::hash::Hasher;
use std::sync::{Arc, Mutex, OnceLock};

/// Result of embedding generation
#[derive(Debug, Clone)]
pub struct EmbeddingResult {
    /// The generated embeddings, one unit-normalized row per input text
    pub embeddings: Vec<Vec<f32>>,
    /// The dimension of each embedding vector
    pub dimension: usize,
}

impl EmbeddingResult {
    /// Create a new result; the dimension is inferred from the first row.
    pub fn new(embeddings: Vec<Vec<f32>>) -> Self {
        let dimension = embeddings.first().map(|e| e.len()).unwrap_or(0);
        Self {
            embeddings,
            dimension,
        }
    }

    /// Returns the number of embedding vectors in this result.
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    /// Returns `true` if this result contains no embedding vectors.
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}

/// Type alias for cached model entries (model, dimension)
type ModelCacheEntry = (Arc<Mutex<TextEmbedding>>, usize);

/// Global cache for initialized embedding models to avoid reloading
static MODEL_CACHE: OnceLock<Mutex<HashMap<String, ModelCacheEntry>>> = OnceLock::new();

fn get_model_cache() -> &'static Mutex<HashMap<String, ModelCacheEntry>> {
    MODEL_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// An opaque text-to-vector capability.
///
/// Output rows are unit-normalized and order-preserving, so cosine similarity
/// against other normalized vectors is a plain dot product. Implementations
/// are injected wherever encoding is needed, which lets tests substitute a
/// deterministic stub for the real model.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed_text(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts (batch processing)
    async fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingResult>;

    /// Get the dimension of embeddings produced by this provider
    fn embedding_dimension(&self) -> usize;

    /// Get the name/identifier of this provider
    fn provider_name(&self) -> &str;
}

/// FastEmbed-based embedding provider using local ONNX models
#[derive(Clone)]
pub struct FastEmbedProvider {
    config: EmbedConfig,
    model: Option<Arc<Mutex<TextEmbedding>>>,
    dimension: usize,
}

impl std::fmt::Debug for FastEmbedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedProvider")
            .field("config", &self.config)
            .field("model", &self.model.is_some())
            .field("dimension", &self.dimension)
            .finish()
    }
}

impl FastEmbedProvider {
    /// Creates a new uninitialized provider. Call [`initialize`](Self::initialize)
    /// (or use [`create`](Self::create)) before embedding.
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            config,
            model: None,
            dimension: 384, // paraphrase-multilingual-MiniLM-L12-v2 dimension
        }
    }

    /// Creates and initializes a provider in one step.
    pub async fn create(config: EmbedConfig) -> Result<Self> {
        let mut provider = Self::new(config);
        provider.initialize().await?;
        Ok(provider)
    }

    /// Loads the embedding model, reusing the global cache when the same
    /// configuration was initialized before.
    pub async fn initialize(&mut self) -> Result<()> {
        tracing::info!("Initializing embedding provider: {}", self.config.model_name);

        let cache_key = self.create_cache_key();

        let cached_data = {
            let cache = get_model_cache().lock().unwrap();
            cache
                .get(&cache_key)
                .map(|(model, dim)| (Arc::clone(model), *dim))
        };

        if let Some((cached_model, cached_dimension)) = cached_data {
            tracing::info!("Using cached model for: {}", self.config.model_name);
            self.model = Some(cached_model);
            self.dimension = cached_dimension;
            return Ok(());
        }

        let embedding_model = self.config.embedding_model()?;
        let show_progress = self.config.show_download_progress;

        // Model loading is CPU and IO heavy; keep it off the async runtime.
        let (model, dimension) =
            tokio::task::spawn_blocking(move || -> Result<(TextEmbedding, usize)> {
                let init_options =
                    InitOptions::new(embedding_model).with_show_download_progress(show_progress);

                let mut model =
                    TextEmbedding::try_new(init_options).map_err(EmbedError::model_init)?;

                // Probe the dimension with a throwaway embedding
                let test_embeddings = model
                    .embed(vec!["test".to_string()], None)
                    .map_err(EmbedError::model_init)?;
                let dimension = test_embeddings.first().map(|emb| emb.len()).unwrap_or(384);

                tracing::info!("Model loaded successfully. Dimension: {}", dimension);
                Ok((model, dimension))
            })
            .await??;

        let model_arc = Arc::new(Mutex::new(model));

        {
            let mut cache = get_model_cache().lock().unwrap();
            cache.insert(cache_key, (Arc::clone(&model_arc), dimension));
        }

        self.model = Some(model_arc);
        self.dimension = dimension;
        Ok(())
    }

    /// Create a cache key from the deterministic JSON form of the config
    fn create_cache_key(&self) -> String {
        let config_json =
            serde_json::to_string(&self.config).expect("Config should always serialize");

        let mut hasher = FnvHasher::default();
        hasher.write(b"v1:");
        hasher.write(config_json.as_bytes());

        format!("v1:{:x}", hasher.finish())
    }

    /// Clears the global model cache.
    pub fn clear_cache() {
        let cache = get_model_cache();
        let mut cache_guard = cache.lock().unwrap();
        cache_guard.clear();
        tracing::info!("Model cache cleared");
    }

    /// Returns the number of cached models.
    pub fn cache_size() -> usize {
        let cache = get_model_cache();
        let cache_guard = cache.lock().unwrap();
        cache_guard.len()
    }

    /// L2-normalize each row so cosine similarity reduces to a dot product.
    fn normalize(embeddings: Vec<Vec<f32>>) -> Vec<Vec<f32>> {
        embeddings
            .into_iter()
            .map(|mut embedding| {
                let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for value in &mut embedding {
                        *value /= norm;
                    }
                }
                embedding
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_text(&self, text: &str) -> Result<Vec<f32>> {
        let texts = vec![text.to_string()];
        let result = self.embed_texts(&texts).await?;
        result
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::invalid_config("No embedding generated for text"))
    }

    async fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingResult> {
        if texts.is_empty() {
            return Ok(EmbeddingResult::new(vec![]));
        }

        let model = self.model.as_ref().ok_or_else(|| {
            EmbedError::invalid_config("Model not initialized. Call initialize() first.")
        })?;

        tracing::debug!("Generating embeddings for {} texts", texts.len());

        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.config.batch_size) {
            let chunk = chunk.to_vec();
            let model_clone = Arc::clone(model);

            let batch_embeddings = tokio::task::spawn_blocking(move || -> Result<Vec<Vec<f32>>> {
                tracing::debug!("Processing batch of {} texts", chunk.len());

                let mut model_guard = model_clone.lock().unwrap();
                let embeddings = model_guard
                    .embed(chunk, None)
                    .map_err(|e| EmbedError::External { source: e })?;

                Ok(embeddings)
            })
            .await??;

            all_embeddings.extend(Self::normalize(batch_embeddings));
        }

        tracing::debug!("Generated {} embeddings", all_embeddings.len());
        Ok(EmbeddingResult::new(all_embeddings))
    }

    fn embedding_dimension(&self) -> usize {
        self.dimension
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_result_infers_dimension() {
        let result = EmbeddingResult::new(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.dimension, 3);
        assert!(!result.is_empty());

        let empty = EmbeddingResult::new(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.dimension, 0);
    }

    #[test]
    fn provider_creation() {
        let provider = FastEmbedProvider::new(EmbedConfig::default());
        assert_eq!(provider.provider_name(), "fastembed");
        assert_eq!(provider.embedding_dimension(), 384);
    }

    #[test]
    fn cache_key_is_deterministic() {
        let config = EmbedConfig::default();
        let key1 = FastEmbedProvider::new(config.clone()).create_cache_key();
        let key2 = FastEmbedProvider::new(config).create_cache_key();
        assert_eq!(key1, key2);
        assert!(key1.starts_with("v1:"));

        let other = FastEmbedProvider::new(EmbedConfig::new("multilingual-e5-small"));
        assert_ne!(key1, other.create_cache_key());
    }

    #[test]
    fn normalize_produces_unit_rows() {
        let rows = FastEmbedProvider::normalize(vec![vec![3.0, 4.0], vec![0.0, 0.0]]);
        let norm: f32 = rows[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        // Zero rows stay zero instead of dividing by zero
        assert_eq!(rows[1], vec![0.0, 0.0]);
    }

    #[test]
    fn clear_cache_empties_the_model_cache() {
        FastEmbedProvider::clear_cache();
        assert_eq!(FastEmbedProvider::cache_size(), 0);
    }

    #[tokio::test]
    async fn uninitialized_provider_rejects_embedding() {
        let provider = FastEmbedProvider::new(EmbedConfig::default());
        let result = provider.embed_texts(&["hello".to_string()]).await;
        assert!(matches!(result, Err(EmbedError::InvalidConfig { .. })));
    }

    #[tokio::test]
    #[ignore] // Integration test: downloads the real model - run with: cargo test -- --ignored
    async fn multilingual_model_embeds_and_ranks() -> Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .ok();

        let provider = FastEmbedProvider::create(EmbedConfig::default()).await?;
        assert!(FastEmbedProvider::cache_size() >= 1);

        let texts = vec![
            "O gato está no telhado.".to_string(),
            "Cães são amigos do homem.".to_string(),
        ];
        let result = provider.embed_texts(&texts).await?;
        assert_eq!(result.len(), 2);
        assert_eq!(result.dimension, provider.embedding_dimension());

        for embedding in &result.embeddings {
            let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-3, "embedding should be normalized");
        }

        // A feline query should sit closer to the cat sentence
        let query = provider.embed_text("felino miando").await?;
        let sim_cat: f32 = query
            .iter()
            .zip(result.embeddings[0].iter())
            .map(|(a, b)| a * b)
            .sum();
        let sim_dog: f32 = query
            .iter()
            .zip(result.embeddings[1].iter())
            .map(|(a, b)| a * b)
            .sum();
        assert!(sim_cat > sim_dog);

        Ok(())
    }
}
