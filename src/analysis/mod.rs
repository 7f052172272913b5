//! Ingredient analysis: one prompt, one image, one model call.
//!
//! [`Analyzer::analyze`] is the whole request path minus HTTP. It returns an
//! explicit `Result` so the server layer decides how failures look on the wire.

mod prompts;

pub use prompts::{INGREDIENT_VOCABULARY, OPEN_PROMPT, preset_prompt};

use crate::{
    Result,
    config::{AnalysisConfig, ResponseMode},
    llm::{InferenceRequest, InlineImage, LlmClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Upload as received from the client. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn mime_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_MIME_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutput {
    /// Model text, untouched.
    Raw(String),
    /// Model text parsed as JSON.
    Parsed(Value),
}

pub struct Analyzer {
    client: Arc<dyn LlmClient>,
    prompt: String,
    response_mode: ResponseMode,
    json_mode: bool,
}

impl Analyzer {
    pub fn new(client: Arc<dyn LlmClient>, config: &AnalysisConfig) -> Self {
        let prompt = config
            .prompt
            .clone()
            .unwrap_or_else(|| preset_prompt(config.prompt_preset));

        Self {
            client,
            prompt,
            response_mode: config.response_mode,
            json_mode: config.json_mode,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response_mode(&self) -> ResponseMode {
        self.response_mode
    }

    pub async fn analyze(&self, upload: UploadedImage) -> Result<AnalysisOutput> {
        let mime_type = upload.mime_type().to_string();

        let request = InferenceRequest {
            prompt: self.prompt.clone(),
            image: InlineImage {
                mime_type,
                data: upload.data,
            },
            json_mode: self.json_mode,
        };

        let text = self.client.infer(request).await?;
        debug!(response_len = text.len(), "Model returned analysis");

        match self.response_mode {
            ResponseMode::Raw => Ok(AnalysisOutput::Raw(text)),
            ResponseMode::Parsed => Ok(AnalysisOutput::Parsed(serde_json::from_str(&text)?)),
        }
    }
}
