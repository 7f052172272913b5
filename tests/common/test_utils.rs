use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use ingredient_analyzer::{
    analysis::Analyzer,
    config::{AnalysisConfig, Config, LlmConfig, LlmProvider, ResponseMode},
    server::{self, handlers::AppState},
};
use std::sync::Arc;

pub const BOUNDARY: &str = "----ingredient-analyzer-test-boundary";

/// Fixture returned by the stub model in the end-to-end scenario.
pub const TOMATO_JSON: &str =
    r#"{"ingredients_detected":["Tomato"],"shelf_life_days":{"Tomato":5}}"#;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.llm = LlmConfig {
        provider: LlmProvider::Gemini,
        base_url: String::new(),
        api_key: "test-api-key".to_string(),
        model: "gemini-1.5-flash".to_string(),
    };
    config
}

/// Router backed by `client`, with the given response mode.
pub fn create_test_app(client: MockLlmClient, mode: ResponseMode) -> Router {
    let analysis = AnalysisConfig {
        response_mode: mode,
        ..create_test_config().analysis
    };
    let analyzer = Analyzer::new(Arc::new(client), &analysis);
    server::router(AppState {
        analyzer: Arc::new(analyzer),
    })
}

/// One multipart part.
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &'a str, file_name: &'a str, content_type: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content_type: Some(content_type),
            data,
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{}\"", file_name));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn jpeg_upload_request(data: &[u8]) -> Request<Body> {
    multipart_request(
        server::ANALYZE_PATH,
        &[Part::file("file", "test.jpg", "image/jpeg", data)],
    )
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "gemini"
  api_key: "file-api-key"
  model: "gemini-2.0-flash"

analysis:
  prompt_preset: "vocabulary"
  response_mode: "parsed"
"#;

/// Sample configuration for an OpenAI-compatible endpoint
pub const SAMPLE_CONFIG_OPENAI: &str = r#"
llm:
  provider: "openai"
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  model: "gemini-1.5-flash"

analysis:
  prompt: "List every vegetable you can see as JSON."
  json_mode: false
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

analysis:
  response_mode: "xml"
"#;
