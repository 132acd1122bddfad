//! Error types for the similarity engine

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by index construction and ranking.
///
/// Degenerate-but-valid outcomes (no segmentable sentences, all-zero
/// similarity rows) are represented as empty or zero-scored results, never
/// as errors. Encoder failures are propagated as-is; there is no silent
/// lexical-only fallback.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An index cannot be built over zero documents
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// `k` was zero or exceeded the configured maximum
    #[error("top_k must be between 1 and {max}, got {requested}")]
    InvalidTopK { requested: usize, max: usize },

    /// The embedding capability failed during construction or a query
    #[error("embedding provider failed: {source}")]
    Embed {
        #[from]
        source: textsim_embed::EmbedError,
    },
}
