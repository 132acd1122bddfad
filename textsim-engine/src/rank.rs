//! Dual-method retrieval: lexical and semantic top-k ranking.

use itertools::Itertools;
use serde::Serialize;
use textsim_embed::EmbeddingProvider;

use crate::error::{EngineError, Result};
use crate::index::CorpusIndex;

/// A ranked document: id plus similarity score, ordered descending by score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedResult {
    pub doc_id: i64,
    pub score: f32,
}

/// Rank the corpus against `query` by combined lexical similarity.
///
/// Word-level cosine always contributes; when the index carries a character
/// model the two are blended as `(1-w)*word + w*char` with the configured
/// weight clamped to [0, 1]. Returns `min(k, N)` results, score descending,
/// ties broken by original corpus order. A query with no in-vocabulary
/// terms yields all-zero scores in corpus order, which is a valid
/// low-information result rather than an error.
pub fn topk_lexical(index: &CorpusIndex, query: &str, k: usize) -> Result<Vec<RankedResult>> {
    validate_k(k, index.config.top_k_max)?;

    let q_word = index.word_model.transform_one(query);
    let word_scores: Vec<f32> = index
        .word_matrix
        .iter()
        .map(|row| row.dot(&q_word))
        .collect();

    let combined: Vec<f32> = match &index.char_lexical {
        Some(char_lexical) => {
            let w = index.config.char_weight_clamped();
            let q_char = char_lexical.model.transform_one(query);
            word_scores
                .iter()
                .zip(char_lexical.matrix.iter())
                .map(|(word, row)| (1.0 - w) * word + w * row.dot(&q_char))
                .collect()
        }
        None => word_scores,
    };

    tracing::debug!(k, corpus = index.len(), "Ranked query lexically");
    Ok(select_top_k(index, &combined, k))
}

/// Rank the corpus against `query` by semantic embedding similarity.
///
/// Encodes the query through the injected provider and scores it against
/// every embedding row. Selection and tie-break rules match
/// [`topk_lexical`]; encoder failures propagate.
pub async fn topk_semantic(
    index: &CorpusIndex,
    provider: &dyn EmbeddingProvider,
    query: &str,
    k: usize,
) -> Result<Vec<RankedResult>> {
    validate_k(k, index.config.top_k_max)?;

    let q_vec = provider.embed_text(query).await?;
    let scores: Vec<f32> = index
        .embed_matrix
        .iter()
        .map(|row| dense_dot(row, &q_vec))
        .collect();

    tracing::debug!(k, corpus = index.len(), "Ranked query semantically");
    Ok(select_top_k(index, &scores, k))
}

fn validate_k(k: usize, max: usize) -> Result<()> {
    if k == 0 || k > max {
        return Err(EngineError::InvalidTopK { requested: k, max });
    }
    Ok(())
}

/// Highest `k` entries, score descending, ties by ascending corpus position.
fn select_top_k(index: &CorpusIndex, scores: &[f32], k: usize) -> Vec<RankedResult> {
    scores
        .iter()
        .copied()
        .enumerate()
        .sorted_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)))
        .take(k)
        .map(|(pos, score)| RankedResult {
            doc_id: index.ids[pos],
            score,
        })
        .collect()
}

fn dense_dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
