use crate::{
    composer::TextGenerator,
    config::GeminiConfig,
    error::{PromptError, Result},
    models::{GenerateContentRequest, GenerateContentResponse, GoogleErrorResponse},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct TextClient {
    client: Client,
    config: GeminiConfig,
}

impl TextClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PromptError::Configuration(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PromptError::Configuration("API key is not configured".into()))
    }

    pub async fn generate(&self, instruction: &str) -> Result<String> {
        let api_key = self.api_key()?;

        log::info!("Invoking model: {}", self.config.model);
        log::debug!("Instruction length: {} chars", instruction.len());

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::single_turn(instruction))
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini request failed: {:?}", e);
                PromptError::Upstream(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PromptError::Upstream(format!("Failed to read Gemini response: {}", e)))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            PromptError::Upstream(format!("Malformed Gemini response: {}", e))
        })?;

        parsed.text().ok_or_else(|| match parsed.block_reason() {
            Some(reason) => PromptError::Upstream(format!("Prompt was blocked: {}", reason)),
            None => PromptError::Upstream("Malformed Gemini response: no text in candidates".into()),
        })
    }
}

/// Map a non-2xx reply to an error class. Credential problems are reported
/// as configuration errors, everything else as upstream errors.
fn classify_failure(status: StatusCode, body: &str) -> PromptError {
    let message = serde_json::from_str::<GoogleErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("HTTP {}: {}", status.as_u16(), body.trim()));

    log::error!("Gemini service error {}: {}", status, message);

    let credential_problem = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || message.contains("API key");

    if credential_problem {
        PromptError::Configuration(message)
    } else {
        PromptError::Upstream(message)
    }
}

#[async_trait]
impl TextGenerator for TextClient {
    async fn generate(&self, instruction: &str) -> Result<String> {
        TextClient::generate(self, instruction).await
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
