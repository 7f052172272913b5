use super::types::{ErrorResponse, WELCOME_MESSAGE, WelcomeResponse};
use crate::{
    Error, Result,
    analysis::{AnalysisOutput, Analyzer, UploadedImage},
};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Multipart field the client is expected to put the image in.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn analyze_ingredients(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    match run_analysis(&state.analyzer, multipart, request_id).await {
        Ok(output) => {
            info!(%request_id, "Analysis succeeded");
            Ok(into_success_response(output))
        }
        Err(e) => {
            error!(%request_id, "Analysis failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

async fn run_analysis(
    analyzer: &Analyzer,
    multipart: std::result::Result<Multipart, MultipartRejection>,
    request_id: Uuid,
) -> Result<AnalysisOutput> {
    let upload = read_upload(multipart?).await?;

    info!(
        %request_id,
        file_name = upload.file_name.as_deref().unwrap_or("<none>"),
        mime_type = upload.mime_type(),
        size = upload.data.len(),
        "Received image for analysis"
    );

    analyzer.analyze(upload).await
}

/// Reads the `file` field, or the first field carrying a file name if the
/// client used a different field name.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedImage> {
    let mut fallback = None;

    while let Some(field) = multipart.next_field().await? {
        let is_upload_field = field.name() == Some(UPLOAD_FIELD);
        if !is_upload_field && (fallback.is_some() || field.file_name().is_none()) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?.to_vec();

        let upload = UploadedImage {
            file_name,
            content_type,
            data,
        };

        if is_upload_field {
            return Ok(upload);
        }
        fallback = Some(upload);
    }

    fallback.ok_or_else(|| {
        Error::upload(format!(
            "No file uploaded; expected multipart field '{}'",
            UPLOAD_FIELD
        ))
    })
}

fn into_success_response(output: AnalysisOutput) -> Response {
    match output {
        // Encoded as a JSON string so the body is valid JSON whatever the model sent
        AnalysisOutput::Raw(text) => Json(text).into_response(),
        AnalysisOutput::Parsed(value) => Json(value).into_response(),
    }
}
