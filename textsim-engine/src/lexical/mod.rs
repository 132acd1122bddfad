//! Lexical (TF-IDF) representations of the corpus.
//!
//! Two complementary term-weighting models: word unigrams + bigrams for
//! surface overlap, and optional character n-grams for morphological
//! variation and near-duplicate phrasing. Both are fitted once over the
//! full corpus at index-build time and reused, unfitted, for every query.

pub mod sparse;
pub mod tokenize;
pub mod vectorizer;

pub use sparse::SparseVector;
pub use vectorizer::{Analyzer, TfidfVectorizer};
