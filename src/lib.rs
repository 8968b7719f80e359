//! Journaling with recall of similar days and an AI productivity judge.
//!
//! Each entry is stored with a semantic embedding. When a new entry is
//! written, the most similar past entries are retrieved by cosine similarity
//! and passed, together with the new entry, to a language model that rates
//! the day's productivity and gives short advice.
//!
//! # Architecture
//!
//! - **Storage**: a single pretty-printed JSON array, rewritten atomically on save
//! - **Retrieval**: brute-force cosine similarity over every stored entry, stable top-N
//! - **Providers**: an OpenAI-compatible HTTP API for embeddings and chat completions
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`error`]: Error taxonomy for the core and the external providers
//! - [`journal`]: Entry store, similarity, and retrieval
//! - [`embedding`] / [`judge`]: Traits for the external collaborators
//! - [`openai`]: HTTP implementation of both collaborators
//! - [`session`]: The record-then-judge workflow

pub mod config;
pub mod embedding;
pub mod error;
pub mod journal;
pub mod judge;
pub mod openai;
pub mod session;
