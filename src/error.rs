//! Error taxonomy for the journal core and its external collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the entry store, the similarity engine, the retriever,
/// and a journaling session.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The journal file exists but is not a list of `{date, text, embedding}` records.
    #[error("journal file {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize journal: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cosine similarity is undefined for a zero vector")]
    ZeroVector,

    #[error("embedding contains a NaN or infinite component")]
    NonFiniteEmbedding,

    #[error("embedding provider failed: {0}")]
    EmbeddingProvider(#[source] ProviderError),

    #[error("judgement provider failed: {0}")]
    JudgementProvider(#[source] ProviderError),
}

/// Failures of a remote embedding or chat service.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured (set OPENAI_API_KEY or provider.api_key)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service returned no {0}")]
    EmptyResponse(&'static str),
}

/// Result type using [`JournalError`].
pub type Result<T> = std::result::Result<T, JournalError>;
