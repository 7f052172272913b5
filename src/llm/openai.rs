use super::client::LlmClient;
use super::types::InferenceRequest;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageUrlArgs, ResponseFormat,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// Client for OpenAI-compatible chat-completions endpoints, including
/// Gemini's OpenAI compatibility surface.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    has_api_key: bool,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let has_api_key = !config.api_key.is_empty();
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            has_api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn infer(&self, request: InferenceRequest) -> Result<String> {
        if !self.has_api_key {
            return Err(Error::config(format!(
                "No API key configured; set {}",
                crate::config::API_KEY_ENV
            )));
        }

        debug!(
            model = %self.model,
            image_bytes = request.image.data.len(),
            json_mode = request.json_mode,
            "Creating chat completion with inline image"
        );

        let text_part = ChatCompletionRequestMessageContentPartTextArgs::default()
            .text(request.prompt)
            .build()?;
        let image_part = ChatCompletionRequestMessageContentPartImageArgs::default()
            .image_url(ImageUrlArgs::default().url(request.image.to_data_url()).build()?)
            .build()?;

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(vec![
                ChatCompletionRequestUserMessageContentPart::Text(text_part),
                ChatCompletionRequestUserMessageContentPart::ImageUrl(image_part),
            ]))
            .build()?;

        let messages: Vec<ChatCompletionRequestMessage> = vec![message.into()];

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if request.json_mode {
            request_builder.response_format(ResponseFormat::JsonObject);
        }

        let response = self.client.chat().create(request_builder.build()?).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("Chat completion contained no message content"))
    }
}
