//! # textsim-embed
//!
//! Semantic encoder adapter for the textsim similarity engine. Wraps local
//! ONNX sentence-embedding models behind an async [`EmbeddingProvider`]
//! trait: text in, fixed-length unit-normalized `f32` vector out.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textsim_embed::{EmbedConfig, EmbeddingProvider, FastEmbedProvider};
//!
//! # async fn example() -> textsim_embed::Result<()> {
//! let provider = FastEmbedProvider::create(EmbedConfig::default()).await?;
//!
//! let texts = vec!["O café é bom.".to_string(), "Ele é caro.".to_string()];
//! let result = provider.embed_texts(&texts).await?;
//!
//! println!("{} embeddings of dimension {}", result.len(), result.dimension);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`]: model selection and batch settings
//! - [`provider`]: the [`EmbeddingProvider`] trait and the fastembed-backed
//!   implementation, with a global model cache keyed by configuration
//! - [`error`]: error types and result handling
//!
//! Inference runs inside `spawn_blocking` so the async runtime is never
//! stalled by model execution. Providers are trait objects by design: the
//! similarity engine takes `&dyn EmbeddingProvider`, so tests can substitute
//! a deterministic stub for the real model.

pub mod config;
pub mod error;
pub mod provider;

pub use config::{DEFAULT_MODEL_NAME, EmbedConfig};
pub use error::{EmbedError, Result};
pub use provider::{EmbeddingProvider, EmbeddingResult, FastEmbedProvider};
