//! Sentence-level alignment between a query and a matched document.

use itertools::Itertools;
use serde::Serialize;
use textsim_text::segment;

use crate::index::CorpusIndex;

/// One aligned sentence pair with both spans' offsets and the cosine score.
///
/// Offsets are byte offsets into the respective original strings, matching
/// [`textsim_text::SentenceSpan`] semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceAlignment {
    pub doc_sentence: String,
    pub doc_start: usize,
    pub doc_end: usize,
    pub query_sentence: String,
    pub query_start: usize,
    pub query_end: usize,
    pub score: f32,
}

/// Best-effort one-to-one alignment of query sentences to document sentences.
///
/// Both texts are segmented, every sentence is projected through the index's
/// fitted word model (never re-fit), and candidate pairs with positive cosine
/// similarity are selected greedily in descending score order, ties by
/// ascending `(query, document)` sentence position. Each sentence on either
/// side is used at most once, and at most `top_n` pairs are returned.
///
/// Greedy selection is not globally optimal bipartite matching; that is a
/// deliberate latency tradeoff. Degenerate inputs (either side without
/// segmentable sentences, or no positive-scoring pair) produce an empty
/// vector, never an error.
pub fn align(
    index: &CorpusIndex,
    query: &str,
    doc_text: &str,
    top_n: usize,
) -> Vec<SentenceAlignment> {
    let q_spans = segment(query);
    let d_spans = segment(doc_text);
    if q_spans.is_empty() || d_spans.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let q_texts: Vec<&str> = q_spans.iter().map(|s| s.text.as_str()).collect();
    let d_texts: Vec<&str> = d_spans.iter().map(|s| s.text.as_str()).collect();
    let q_vecs = index.word_model.transform(&q_texts);
    let d_vecs = index.word_model.transform(&d_texts);

    let mut candidates: Vec<(f32, usize, usize)> = Vec::new();
    for (qi, q_vec) in q_vecs.iter().enumerate() {
        for (di, d_vec) in d_vecs.iter().enumerate() {
            let score = q_vec.dot(d_vec);
            if score > 0.0 {
                candidates.push((score, qi, di));
            }
        }
    }

    let mut used_q = vec![false; q_spans.len()];
    let mut used_d = vec![false; d_spans.len()];
    let mut results = Vec::new();
    for (score, qi, di) in candidates
        .into_iter()
        .sorted_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)))
    {
        if used_q[qi] || used_d[di] {
            continue;
        }
        used_q[qi] = true;
        used_d[di] = true;
        let q_span = &q_spans[qi];
        let d_span = &d_spans[di];
        results.push(SentenceAlignment {
            doc_sentence: d_span.text.clone(),
            doc_start: d_span.start,
            doc_end: d_span.end,
            query_sentence: q_span.text.clone(),
            query_start: q_span.start,
            query_end: q_span.end,
            score,
        });
        if results.len() >= top_n {
            break;
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::index::{CorpusIndex, build_index};
    use crate::testing::{StubProvider, toy_docs};

    async fn toy_index() -> CorpusIndex {
        build_index(&IndexConfig::default(), &StubProvider, toy_docs())
            .await
            .expect("toy index builds")
    }

    #[tokio::test]
    async fn aligns_matching_sentences_with_offsets() {
        let index = toy_index().await;
        let doc_text = index.text(0).to_string();
        let query = "Um gato subiu no telhado. Nada parecido aqui.";
        let results = align(&index, query, &doc_text, 5);

        assert!(!results.is_empty());
        let top = &results[0];
        assert_eq!(top.doc_sentence, "O gato está no telhado.");
        assert_eq!(top.query_sentence, "Um gato subiu no telhado.");
        assert_eq!(&query[top.query_start..top.query_end], top.query_sentence);
        assert_eq!(&doc_text[top.doc_start..top.doc_end], top.doc_sentence);
        assert!(top.score > 0.0);
    }

    #[tokio::test]
    async fn alignment_is_one_to_one() {
        let index = toy_index().await;
        // Both document sentences mention "gato"; a single query sentence
        // may only be awarded to its best match.
        let results = align(&index, "O gato mia no telhado.", index.text(0), 5);
        let mut query_sents: Vec<&str> =
            results.iter().map(|r| r.query_sentence.as_str()).collect();
        let mut doc_sents: Vec<&str> = results.iter().map(|r| r.doc_sentence.as_str()).collect();
        query_sents.sort_unstable();
        query_sents.dedup();
        doc_sents.sort_unstable();
        doc_sents.dedup();
        assert_eq!(query_sents.len(), results.len());
        assert_eq!(doc_sents.len(), results.len());
    }

    #[tokio::test]
    async fn respects_top_n_limit() {
        let index = toy_index().await;
        let query = "O gato está no telhado. O gato mia alto. Gatos e cães podem conviver em paz.";
        let doc = query.to_string();
        let limited = align(&index, query, &doc, 2);
        assert!(limited.len() <= 2);
        let all = align(&index, query, &doc, 5);
        assert!(all.len() >= limited.len());
    }

    #[tokio::test]
    async fn empty_sides_yield_empty_alignment() {
        let index = toy_index().await;
        assert!(align(&index, "", index.text(0), 5).is_empty());
        assert!(align(&index, index.text(0), "", 5).is_empty());
        assert!(align(&index, "", "", 5).is_empty());
    }

    #[tokio::test]
    async fn no_positive_pair_yields_empty_alignment() {
        let index = toy_index().await;
        let results = align(&index, "Xilofone quebrado. Zumbido estranho.", index.text(0), 5);
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn results_are_sorted_by_score() {
        let index = toy_index().await;
        let query = "O gato está no telhado. Cães podem conviver.";
        let results = align(&index, query, index.text(2), 5);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
