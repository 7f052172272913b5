use async_trait::async_trait;
use ingredient_analyzer::{
    Error, Result,
    llm::{InferenceRequest, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub response: Option<String>,
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: None,
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn infer(&self, request: InferenceRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| Error::llm("No mock response configured"))
    }
}
