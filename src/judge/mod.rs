//! Productivity judgement: the [`JudgementProvider`] trait and the prompt
//! built from today's entry and its similar days.

mod prompt;

use std::future::Future;

pub use prompt::build_prompt;

use crate::error::ProviderError;
use crate::journal::JournalEntry;

/// Trait for turning a prompt into free-text commentary.
pub trait JudgementProvider: Send + Sync {
    fn judge(&self, prompt: &str) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// A judgement of today's entry and the past entries it was compared with.
#[derive(Debug, Clone)]
pub struct Judgement {
    /// Commentary returned by the judgement provider, trimmed.
    pub text: String,
    /// Similar past entries given to the provider, most similar first.
    pub similar: Vec<JournalEntry>,
}
