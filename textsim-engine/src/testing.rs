//! Shared fixtures for unit tests: a deterministic embedding stub and a
//! small Portuguese toy corpus.

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use textsim_embed::{EmbedError, EmbeddingProvider, EmbeddingResult};

use crate::index::Document;

pub(crate) const STUB_DIM: usize = 64;

/// Deterministic bag-of-words embedding: each token hashes to one of
/// `STUB_DIM` buckets, counts are L2-normalized. Token overlap between two
/// texts translates to cosine similarity, which is all the ranking tests
/// need from a semantic encoder.
pub(crate) struct StubProvider;

fn bag_embed(text: &str) -> Vec<f32> {
    let mut vec = vec![0.0f32; STUB_DIM];
    for raw in text.split_whitespace() {
        let token: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        if token.is_empty() {
            continue;
        }
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        vec[(hasher.finish() % STUB_DIM as u64) as usize] += 1.0;
    }
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vec {
            *value /= norm;
        }
    }
    vec
}

#[async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed_text(&self, text: &str) -> textsim_embed::Result<Vec<f32>> {
        Ok(bag_embed(text))
    }

    async fn embed_texts(&self, texts: &[String]) -> textsim_embed::Result<EmbeddingResult> {
        Ok(EmbeddingResult::new(
            texts.iter().map(|t| bag_embed(t)).collect(),
        ))
    }

    fn embedding_dimension(&self) -> usize {
        STUB_DIM
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// A provider that always fails, for capability-failure propagation tests.
pub(crate) struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    async fn embed_text(&self, _text: &str) -> textsim_embed::Result<Vec<f32>> {
        Err(EmbedError::invalid_config("provider intentionally failing"))
    }

    async fn embed_texts(&self, _texts: &[String]) -> textsim_embed::Result<EmbeddingResult> {
        Err(EmbedError::invalid_config("provider intentionally failing"))
    }

    fn embedding_dimension(&self) -> usize {
        STUB_DIM
    }

    fn provider_name(&self) -> &str {
        "failing-stub"
    }
}

pub(crate) fn toy_docs() -> Vec<Document> {
    vec![
        Document::new(
            0,
            Some("A".to_string()),
            "O gato está no telhado. O gato mia alto.",
        ),
        Document::new(
            1,
            Some("B".to_string()),
            "Cães são amigos do homem. Um cão late.",
        ),
        Document::new(
            2,
            Some("C".to_string()),
            "Gatos e cães podem conviver em paz.",
        ),
    ]
}
