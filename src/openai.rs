//! OpenAI-compatible HTTP client.
//!
//! [`OpenAiClient`] is built from explicit configuration and implements both
//! [`EmbeddingProvider`] (`POST /embeddings`) and [`JudgementProvider`]
//! (`POST /chat/completions`). Any server exposing the same two endpoints
//! works by changing `provider.base_url`.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::DaylogConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::ProviderError;
use crate::judge::JudgementProvider;

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    embedding_model: String,
    chat_model: String,
    max_completion_tokens: u32,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f64>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_completion_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &DaylogConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.provider.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.provider.base_url.trim_end_matches('/').to_string(),
            api_key: config.provider.api_key.clone(),
            embedding_model: config.embedding.model.clone(),
            chat_model: config.judge.model.clone(),
            max_completion_tokens: config.judge.max_completion_tokens,
        })
    }

    async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let url = format!("{}/{endpoint}", self.base_url);

        tracing::debug!(%url, "provider request");
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "provider request rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn first_embedding(response: EmbeddingResponse) -> Result<Vec<f64>, ProviderError> {
    response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .ok_or(ProviderError::EmptyResponse("embedding"))
}

fn first_message(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or(ProviderError::EmptyResponse("chat completion"))
}

impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, ProviderError> {
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: text,
        };
        let embedding = first_embedding(self.post_json("embeddings", &request).await?)?;
        tracing::debug!(dims = embedding.len(), "text embedded");
        Ok(embedding)
    }
}

impl JudgementProvider for OpenAiClient {
    async fn judge(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.chat_model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_completion_tokens: self.max_completion_tokens,
        };
        first_message(self.post_json("chat/completions", &request).await?)
    }
}
