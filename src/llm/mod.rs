mod client;
mod gemini;
mod openai;
pub mod types;

pub use client::{LlmClient, create_llm_client};
pub use gemini::{GEMINI_API_BASE, GeminiClient};
pub use openai::OpenAiClient;
pub use types::{InferenceRequest, InlineImage};
