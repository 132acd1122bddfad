//! Corpus index construction.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use textsim_embed::EmbeddingProvider;

use crate::config::IndexConfig;
use crate::error::{EngineError, Result};
use crate::lexical::{Analyzer, SparseVector, TfidfVectorizer};

/// One corpus document. Immutable once loaded; `id` is unique and stable
/// within a corpus build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: Option<String>,
    pub text: String,
}

impl Document {
    pub fn new(id: i64, title: Option<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title,
            text: text.into(),
        }
    }
}

/// The fitted character-level model and its corpus matrix, present only when
/// character scoring is enabled (blend weight above zero).
#[derive(Debug, Clone)]
pub struct CharLexical {
    pub(crate) model: TfidfVectorizer,
    pub(crate) matrix: Vec<SparseVector>,
}

/// The central immutable artifact built once per corpus snapshot.
///
/// All row collections share length N and row order with `ids`: a positional
/// lookup of a document uses the same index into every array. The index is
/// never mutated after construction; rebuilding means constructing a new
/// index and swapping it in (see [`IndexHandle`](crate::handle::IndexHandle)).
#[derive(Debug)]
pub struct CorpusIndex {
    pub(crate) config: IndexConfig,
    pub(crate) ids: Vec<i64>,
    pub(crate) titles: Vec<Option<String>>,
    pub(crate) texts: Vec<String>,
    pub(crate) word_model: TfidfVectorizer,
    pub(crate) word_matrix: Vec<SparseVector>,
    pub(crate) char_lexical: Option<CharLexical>,
    pub(crate) embed_matrix: Vec<Vec<f32>>,
    pub(crate) embed_dim: usize,
}

impl CorpusIndex {
    /// Number of documents in this corpus snapshot.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True only for an index that was never buildable; kept for symmetry.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Document ids in corpus order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Position of a document id within the corpus, if present.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    /// Title of the document at `pos`.
    pub fn title(&self, pos: usize) -> Option<&str> {
        self.titles[pos].as_deref()
    }

    /// Full text of the document at `pos`.
    pub fn text(&self, pos: usize) -> &str {
        &self.texts[pos]
    }

    /// The configuration this index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Dimension of the semantic embedding rows.
    pub fn embedding_dimension(&self) -> usize {
        self.embed_dim
    }

    /// Whether character-level lexical scoring is part of this index.
    pub fn char_enabled(&self) -> bool {
        self.char_lexical.is_some()
    }
}

/// Build a [`CorpusIndex`] from a corpus of documents.
///
/// Fits the word lexical model (always), the character model (only when the
/// configured blend weight is above zero), and calls the semantic encoder
/// once over all texts. All-or-nothing: an empty corpus is rejected with
/// [`EngineError::EmptyCorpus`], and encoder failures propagate.
pub async fn build_index(
    config: &IndexConfig,
    provider: &dyn EmbeddingProvider,
    docs: Vec<Document>,
) -> Result<CorpusIndex> {
    if docs.is_empty() {
        return Err(EngineError::EmptyCorpus);
    }

    let started = Instant::now();
    let mut ids = Vec::with_capacity(docs.len());
    let mut titles = Vec::with_capacity(docs.len());
    let mut texts = Vec::with_capacity(docs.len());
    for doc in docs {
        ids.push(doc.id);
        titles.push(doc.title);
        texts.push(doc.text);
    }

    let (word_model, word_matrix) =
        TfidfVectorizer::fit_transform(Analyzer::Word, config.word_vocab_cap, &texts);
    tracing::debug!(
        vocabulary = word_model.vocabulary_len(),
        "Fitted word lexical model"
    );

    let char_lexical = if config.char_enabled() {
        let (model, matrix) = TfidfVectorizer::fit_transform(
            Analyzer::CharWb {
                min_n: config.char_ngram_min,
                max_n: config.char_ngram_max,
            },
            config.char_vocab_cap,
            &texts,
        );
        tracing::debug!(
            vocabulary = model.vocabulary_len(),
            "Fitted character lexical model"
        );
        Some(CharLexical { model, matrix })
    } else {
        None
    };

    let embedded = provider.embed_texts(&texts).await?;
    let embed_dim = embedded.dimension;
    let embed_matrix = embedded.embeddings;

    tracing::info!(
        documents = ids.len(),
        embedding_dimension = embed_dim,
        char_scoring = char_lexical.is_some(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Built corpus index"
    );

    Ok(CorpusIndex {
        config: config.clone(),
        ids,
        titles,
        texts,
        word_model,
        word_matrix,
        char_lexical,
        embed_matrix,
        embed_dim,
    })
}
