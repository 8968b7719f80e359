#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use daylog::embedding::EmbeddingProvider;
use daylog::error::ProviderError;
use daylog::journal::JournalEntry;
use daylog::judge::JudgementProvider;

pub const DIM: usize = 8;

/// Generate a deterministic embedding with a spike at position `seed`.
/// Distinct seeds (mod `DIM`) produce orthogonal vectors.
pub fn test_embedding(seed: u8) -> Vec<f64> {
    let mut v = vec![0.0f64; DIM];
    v[seed as usize % DIM] = 1.0;
    v
}

/// Blend two spike embeddings: `weight` of `a` and `1 - weight` of `b`.
pub fn blend(a: u8, b: u8, weight: f64) -> Vec<f64> {
    test_embedding(a)
        .iter()
        .zip(test_embedding(b))
        .map(|(x, y)| x * weight + y * (1.0 - weight))
        .collect()
}

pub fn entry(date: &str, text: &str, embedding: Vec<f64>) -> JournalEntry {
    JournalEntry::new(date, text, embedding)
}

/// Embedding provider answering from a fixed table; unknown text fails.
#[derive(Default)]
pub struct FakeEmbedder {
    table: HashMap<String, Vec<f64>>,
}

impl FakeEmbedder {
    pub fn with(mut self, text: &str, embedding: Vec<f64>) -> Self {
        self.table.insert(text.to_string(), embedding);
        self
    }
}

impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, ProviderError> {
        self.table.get(text).cloned().ok_or(ProviderError::Status {
            status: 429,
            body: "rate limited".into(),
        })
    }
}

/// Judgement provider that records every prompt and replies with a fixed text,
/// or fails when built with [`RecordingJudge::failing`].
#[derive(Default)]
pub struct RecordingJudge {
    pub prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingJudge {
    pub fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl JudgementProvider for RecordingJudge {
    async fn judge(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(ProviderError::EmptyResponse("chat completion"));
        }
        Ok("7/10. Keep the mornings for deep work.".to_string())
    }
}
