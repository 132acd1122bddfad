//! TF-IDF fitting and transformation.

use std::collections::HashMap;

use super::sparse::SparseVector;
use super::tokenize::{char_wb_ngrams, word_ngrams};

/// Which analyzer a vectorizer runs over its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analyzer {
    /// Word unigrams + bigrams
    Word,
    /// Character n-grams bounded at word edges
    CharWb { min_n: usize, max_n: usize },
}

impl Analyzer {
    fn analyze(&self, text: &str) -> Vec<String> {
        match *self {
            Analyzer::Word => word_ngrams(text),
            Analyzer::CharWb { min_n, max_n } => char_wb_ngrams(text, min_n, max_n),
        }
    }
}

/// A fitted term-weighting model.
///
/// Fitting learns the vocabulary and inverse document frequencies from the
/// corpus once; transformation never re-fits, so out-of-vocabulary query
/// terms simply contribute zero weight. Term weight is sublinear term
/// frequency (`1 + ln(tf)`) times smoothed IDF (`ln((1+n)/(1+df)) + 1`),
/// and every produced row is L2-normalized so cosine similarity between
/// rows is a sparse dot product.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    analyzer: Analyzer,
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit a vectorizer over the corpus and return it together with the
    /// corpus weight matrix (one normalized sparse row per input text).
    ///
    /// No minimum document frequency is applied: rare and unique terms are
    /// kept, which matters for catching verbatim copied rare phrases. When
    /// the vocabulary exceeds `max_features`, the terms with the highest
    /// total corpus frequency are retained (ties broken by term order).
    pub fn fit_transform(
        analyzer: Analyzer,
        max_features: usize,
        texts: &[String],
    ) -> (Self, Vec<SparseVector>) {
        let analyzed: Vec<Vec<String>> = texts.iter().map(|t| analyzer.analyze(t)).collect();

        // Document frequency and total corpus frequency per term
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        let mut corpus_freq: HashMap<&str, u64> = HashMap::new();
        let mut seen_in_doc: HashMap<&str, usize> = HashMap::new();
        for (doc_idx, terms) in analyzed.iter().enumerate() {
            for term in terms {
                *corpus_freq.entry(term).or_insert(0) += 1;
                if seen_in_doc.insert(term, doc_idx) != Some(doc_idx) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        let mut terms: Vec<&str> = corpus_freq.keys().copied().collect();
        if terms.len() > max_features {
            terms.sort_unstable_by(|a, b| {
                corpus_freq[b].cmp(&corpus_freq[a]).then_with(|| a.cmp(b))
            });
            terms.truncate(max_features);
        }
        // Deterministic index assignment
        terms.sort_unstable();

        let n_docs = texts.len() as f32;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (i, term) in terms.iter().enumerate() {
            vocabulary.insert(term.to_string(), i as u32);
            let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
        }

        let fitted = Self {
            analyzer,
            vocabulary,
            idf,
        };
        let matrix = analyzed
            .iter()
            .map(|terms| fitted.weigh(terms))
            .collect();
        (fitted, matrix)
    }

    /// Transform texts into the fitted vector space. Never re-fits.
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts
            .iter()
            .map(|t| self.weigh(&self.analyzer.analyze(t.as_ref())))
            .collect()
    }

    /// Transform a single text.
    pub fn transform_one(&self, text: &str) -> SparseVector {
        self.weigh(&self.analyzer.analyze(text))
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for term in terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }
        let pairs = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = 1.0 + (count as f32).ln();
                (idx, tf * self.idf[idx as usize])
            })
            .collect();
        let mut row = SparseVector::from_pairs(pairs);
        row.l2_normalize();
        row
    }
}
