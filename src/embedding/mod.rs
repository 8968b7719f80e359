//! Text-to-vector embedding.
//!
//! Provides the [`EmbeddingProvider`] trait. The concrete provider is the
//! HTTP client in [`crate::openai`]; tests substitute in-process fakes.

use std::future::Future;

use crate::error::ProviderError;

/// Trait for embedding text into vectors.
///
/// Every call for a given provider must return vectors of the same
/// dimensionality; the retriever fails on mismatched stored embeddings.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f64>, ProviderError>> + Send;
}
