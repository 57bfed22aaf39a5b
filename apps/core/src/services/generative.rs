//! Generative text-completion client.
//!
//! The chat handler and the recipe write-up path only depend on the
//! `GenerativeService` trait, so tests can substitute a mock without any
//! network.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// Text-completion seam: takes a fully built prompt, returns free-form text.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

#[async_trait]
impl<G: GenerativeService + ?Sized> GenerativeService for std::sync::Arc<G> {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt).await
    }
}

/// Gemini REST client.
///
/// POSTs to `/v1beta/models/{model}:generateContent` with the API key as a
/// query parameter and extracts the first candidate's text.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.generative_base_url.clone(),
            model: config.generative_model.clone(),
            api_key: config.generative_api_key.clone(),
        }
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        info!("Requesting completion ({} chars of prompt)", prompt.len());

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let request_future = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send();

        let res = timeout(COMPLETION_TIMEOUT, request_future).await??;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Service(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res.json().await?;
        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                AppError::Service("Completion response carried no text candidate".to_string())
            })?;

        Ok(text.to_string())
    }
}
