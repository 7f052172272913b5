use super::types::InferenceRequest;
use super::{GeminiClient, OpenAiClient};
use crate::{
    Result,
    config::{LlmConfig, LlmProvider},
};
use async_trait::async_trait;
use std::sync::Arc;

/// The one call this service makes to a generative model: prompt plus image
/// in, model text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn infer(&self, request: InferenceRequest) -> Result<String>;
}

pub fn create_llm_client(config: LlmConfig) -> Arc<dyn LlmClient> {
    match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config)),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config)),
    }
}
