//! Combined comparison report: both ranking methods plus per-document
//! sentence alignments, ready for any transport layer to serialize.

use serde::Serialize;
use textsim_embed::EmbeddingProvider;

use crate::align::{SentenceAlignment, align};
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::rank::{RankedResult, topk_lexical, topk_semantic};

/// Retrieval method that produced a group of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Lexical,
    Semantic,
}

/// Alignments for one matched document, sorted by score descending.
#[derive(Debug, Clone, Serialize)]
pub struct DocMatches {
    pub doc_id: i64,
    pub doc_title: Option<String>,
    pub score: f32,
    pub alignments: Vec<SentenceAlignment>,
}

/// All matched documents for one retrieval method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodMatches {
    pub method: Method,
    pub docs: Vec<DocMatches>,
}

/// Full comparison of a query against the corpus under both methods.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub query_len: usize,
    pub corpus_size: usize,
    pub items: Vec<MethodMatches>,
}

/// Compare `query` against the corpus with both retrieval methods.
///
/// Ranks the top `k` documents lexically and semantically; with `detail`
/// set, each ranked document also carries up to `align_top_n` sentence
/// alignments (already score-descending from the greedy matcher). Without
/// `detail` the alignment step is skipped entirely.
pub async fn compare(
    index: &CorpusIndex,
    provider: &dyn EmbeddingProvider,
    query: &str,
    k: usize,
    detail: bool,
) -> Result<CompareReport> {
    let lexical = topk_lexical(index, query, k)?;
    let semantic = topk_semantic(index, provider, query, k).await?;

    let items = vec![
        MethodMatches {
            method: Method::Lexical,
            docs: doc_groups(index, query, &lexical, detail),
        },
        MethodMatches {
            method: Method::Semantic,
            docs: doc_groups(index, query, &semantic, detail),
        },
    ];

    Ok(CompareReport {
        query_len: query.chars().count(),
        corpus_size: index.len(),
        items,
    })
}

fn doc_groups(
    index: &CorpusIndex,
    query: &str,
    ranked: &[RankedResult],
    detail: bool,
) -> Vec<DocMatches> {
    ranked
        .iter()
        .map(|result| {
            // Ranked ids always come from the index, so the position exists
            let pos = index
                .position_of(result.doc_id)
                .expect("ranked id present in index");
            let alignments = if detail {
                align(index, query, index.text(pos), index.config().align_top_n)
            } else {
                Vec::new()
            };
            DocMatches {
                doc_id: result.doc_id,
                doc_title: index.title(pos).map(String::from),
                score: result.score,
                alignments,
            }
        })
        .collect()
}
