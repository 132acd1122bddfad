//! textsim-engine: dual-retrieval document similarity with sentence alignment
//!
//! This crate detects textual similarity between a query document and a
//! reference corpus by combining two retrieval methods over one immutable
//! [`CorpusIndex`]:
//!
//! - **lexical**: word-level TF-IDF (unigrams + bigrams) optionally blended
//!   with character n-gram TF-IDF, for surface term overlap;
//! - **semantic**: dense sentence embeddings from an injected
//!   [`EmbeddingProvider`](textsim_embed::EmbeddingProvider), for
//!   meaning-level proximity.
//!
//! Matched documents can then be aligned at sentence granularity: a greedy
//! one-to-one matching of query sentences to document sentences by word
//! TF-IDF cosine similarity.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textsim_engine::{Document, IndexConfig, build_index, topk_lexical, align};
//! use textsim_embed::FastEmbedProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = IndexConfig::default();
//! let provider = FastEmbedProvider::create(config.embed_config()).await?;
//!
//! let docs = vec![Document::new(0, None, "O gato está no telhado.")];
//! let index = build_index(&config, &provider, docs).await?;
//!
//! let ranked = topk_lexical(&index, "gato no telhado", 5)?;
//! let pairs = align(&index, "gato no telhado", index.text(0), 5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! An index is read-only after construction and safe to share across any
//! number of concurrent ranking and alignment calls. [`IndexHandle`] gives
//! rebuilds atomic-swap semantics: readers hold `Arc` snapshots and never
//! observe a partially built index.

pub mod align;
pub mod compare;
pub mod config;
pub mod error;
pub mod handle;
pub mod index;
pub mod lexical;
pub mod rank;

#[cfg(test)]
pub(crate) mod testing;

pub use align::{SentenceAlignment, align};
pub use compare::{CompareReport, DocMatches, Method, MethodMatches, compare};
pub use config::IndexConfig;
pub use error::{EngineError, Result};
pub use handle::IndexHandle;
pub use index::{CharLexical, CorpusIndex, Document, build_index};
pub use rank::{RankedResult, topk_lexical, topk_semantic};
