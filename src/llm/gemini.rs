use super::client::LlmClient;
use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Native Gemini REST client (`models/{model}:generateContent`).
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        let base_url = if config.base_url.is_empty() {
            GEMINI_API_BASE.to_string()
        } else {
            config.base_url.trim_end_matches('/').to_string()
        };

        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(request: InferenceRequest) -> GenerateContentRequest {
        let parts = vec![
            Part::Text {
                text: request.prompt,
            },
            Part::InlineData {
                inline_data: InlineData {
                    data: request.image.to_base64(),
                    mime_type: request.image.mime_type,
                },
            },
        ];

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: request.json_mode.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn infer(&self, request: InferenceRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(Error::config(format!(
                "No API key configured; set {}",
                crate::config::API_KEY_ENV
            )));
        }

        debug!(
            model = %self.model,
            image_bytes = request.image.data.len(),
            json_mode = request.json_mode,
            "Sending generateContent request"
        );

        let body = Self::build_request(request);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API returned an error");
            return Err(Error::llm(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await?;

        let finish_reason = api_response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone());

        api_response.text().ok_or_else(|| {
            Error::llm(format!(
                "Gemini response contained no text (finish reason: {}, feedback: {})",
                finish_reason.as_deref().unwrap_or("none"),
                api_response
                    .prompt_feedback
                    .as_ref()
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "none".to_string())
            ))
        })
    }
}
